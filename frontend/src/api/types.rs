use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(alias = "_id")]
    pub id: String,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 2] = [AttendanceStatus::Present, AttendanceStatus::Absent];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

/// Employee fields the server embeds in attendance rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEmployee {
    pub employee_id: String,
    pub full_name: String,
    #[serde(default)]
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub employee_id: Option<String>,
    pub date: String,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub employee: Option<AttendanceEmployee>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendance {
    pub employee_id: String,
    pub date: String,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub total_records: u32,
    pub total_present: u32,
    pub total_absent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAttendance {
    #[serde(default, alias = "attendances")]
    pub records: Vec<AttendanceRecord>,
    pub summary: AttendanceSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAttendanceRow {
    #[serde(alias = "_id")]
    pub id: String,
    pub employee_id: String,
    pub full_name: String,
    pub department: String,
    pub total_attendance_days: u32,
    pub present_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_employees: u32,
    pub total_attendance_records: u32,
    pub present_count: u32,
    pub absent_count: u32,
    #[serde(default)]
    pub employees_summary: Vec<EmployeeAttendanceRow>,
}

/// Query parameters accepted by `GET /attendance`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceQuery {
    pub employee_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl AttendanceQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_non_empty(&mut params, "employeeId", self.employee_id.as_deref());
        push_non_empty(&mut params, "startDate", self.start_date.as_deref());
        push_non_empty(&mut params, "endDate", self.end_date.as_deref());
        params
    }

    pub fn date_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_non_empty(&mut params, "startDate", self.start_date.as_deref());
        push_non_empty(&mut params, "endDate", self.end_date.as_deref());
        params
    }
}

fn push_non_empty(params: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            params.push((key, value.to_string()));
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: String,
    pub msg: String,
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<FieldError>>,
}

pub const CODE_VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const CODE_SERVER_ERROR: &str = "SERVER_ERROR";
pub const CODE_REQUEST_FAILED: &str = "REQUEST_FAILED";
pub const CODE_DECODE_ERROR: &str = "DECODE_ERROR";
pub const CODE_UNKNOWN: &str = "UNKNOWN";

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            error: msg.into(),
            code: CODE_VALIDATION_ERROR.to_string(),
            status: None,
            errors,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: CODE_UNKNOWN.to_string(),
            status: None,
            errors: Vec::new(),
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: CODE_REQUEST_FAILED.to_string(),
            status: None,
            errors: Vec::new(),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: CODE_DECODE_ERROR.to_string(),
            status: None,
            errors: Vec::new(),
        }
    }

    /// Builds the error for a non-2xx status from whatever body came back.
    pub fn from_envelope(status: u16, envelope: ErrorEnvelope) -> Self {
        let errors = envelope.errors.unwrap_or_default();
        let (error, code) = match envelope.error {
            Some(message) if !errors.is_empty() => (message, CODE_VALIDATION_ERROR),
            Some(message) => (message, CODE_SERVER_ERROR),
            None if !errors.is_empty() => ("Validation failed".to_string(), CODE_VALIDATION_ERROR),
            None => (format!("Request failed with status {status}"), CODE_UNKNOWN),
        };
        Self {
            error,
            code: code.to_string(),
            status: Some(status),
            errors,
        }
    }

    pub fn is_server_reported(&self) -> bool {
        self.code == CODE_SERVER_ERROR || self.code == CODE_VALIDATION_ERROR
    }

    pub fn has_field_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Message the server reported, or `fallback` when the failure carried none.
    pub fn message_or(&self, fallback: &str) -> String {
        if self.is_server_reported() && !self.error.trim().is_empty() {
            self.error.clone()
        } else {
            fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn employee_accepts_mongo_style_id() {
        let employee: Employee = serde_json::from_value(json!({
            "_id": "abc",
            "employeeId": "EMP001",
            "fullName": "Jane Doe",
            "email": "jane@x.com",
            "department": "Engineering"
        }))
        .unwrap();
        assert_eq!(employee.id, "abc");
        assert_eq!(employee.employee_id, "EMP001");
    }

    #[test]
    fn mark_attendance_serializes_camel_case() {
        let payload = MarkAttendance {
            employee_id: "e1".into(),
            date: "2025-01-02T00:00:00.000Z".into(),
            status: AttendanceStatus::Absent,
        };
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({
                "employeeId": "e1",
                "date": "2025-01-02T00:00:00.000Z",
                "status": "Absent"
            })
        );
    }

    #[test]
    fn attendance_query_skips_empty_values() {
        let query = AttendanceQuery {
            employee_id: Some(String::new()),
            start_date: Some("2025-01-01".into()),
            end_date: None,
        };
        assert_eq!(query.params(), vec![("startDate", "2025-01-01".to_string())]);
        assert_eq!(query.date_params(), vec![("startDate", "2025-01-01".to_string())]);
    }

    #[test]
    fn error_envelope_with_field_list_is_validation_error() {
        let envelope: ErrorEnvelope = serde_json::from_value(json!({
            "error": "Validation failed",
            "errors": [{ "path": "email", "msg": "Email already exists" }]
        }))
        .unwrap();
        let error = ApiError::from_envelope(400, envelope);
        assert_eq!(error.code, CODE_VALIDATION_ERROR);
        assert_eq!(error.status, Some(400));
        assert!(error.has_field_errors());
        assert_eq!(error.message_or("fallback"), "Validation failed");
    }

    #[test]
    fn message_or_falls_back_for_transport_failures() {
        assert_eq!(
            ApiError::request_failed("dns error").message_or("Failed to load employees"),
            "Failed to load employees"
        );
        let empty = ApiError::from_envelope(500, ErrorEnvelope::default());
        assert_eq!(empty.code, CODE_UNKNOWN);
        assert_eq!(empty.message_or("Failed"), "Failed");
    }

    #[test]
    fn display_and_string_conversion_use_message() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");
        let raw: String = ApiError::decode("bad body").into();
        assert_eq!(raw, "bad body");
    }

    #[test]
    fn status_parse_round_trips_labels() {
        assert_eq!(AttendanceStatus::parse("Present"), Some(AttendanceStatus::Present));
        assert_eq!(AttendanceStatus::parse("present"), None);
    }
}
