use chrono::NaiveDate;

use crate::api::{AttendanceQuery, AttendanceStatus, Employee, MarkAttendance};
use crate::components::forms::SelectOption;
use crate::state::{FieldErrors, FormField, FormState};
use crate::utils::time::{date_input_value, parse_date_input, to_utc_midnight_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AttendanceField {
    EmployeeId,
    Date,
    Status,
}

impl FormField for AttendanceField {
    const ALL: &'static [Self] = &[
        AttendanceField::EmployeeId,
        AttendanceField::Date,
        AttendanceField::Status,
    ];

    fn name(self) -> &'static str {
        match self {
            AttendanceField::EmployeeId => "employeeId",
            AttendanceField::Date => "date",
            AttendanceField::Status => "status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    EmployeeId,
    StartDate,
    EndDate,
}

/// List filters. Kept apart from the mark form; neither resets the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilters {
    pub employee_id: String,
    pub start_date: String,
    pub end_date: String,
}

impl AttendanceFilters {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::EmployeeId => &self.employee_id,
            FilterField::StartDate => &self.start_date,
            FilterField::EndDate => &self.end_date,
        }
    }

    /// Returns whether the value actually changed.
    pub fn set(&mut self, field: FilterField, value: String) -> bool {
        let slot = match field {
            FilterField::EmployeeId => &mut self.employee_id,
            FilterField::StartDate => &mut self.start_date,
            FilterField::EndDate => &mut self.end_date,
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    pub fn clear(&mut self) -> bool {
        let changed = self.is_active();
        *self = Self::default();
        changed
    }

    pub fn is_active(&self) -> bool {
        !(self.employee_id.is_empty() && self.start_date.is_empty() && self.end_date.is_empty())
    }

    pub fn to_query(&self) -> AttendanceQuery {
        let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_string());
        AttendanceQuery {
            employee_id: non_empty(&self.employee_id),
            start_date: non_empty(&self.start_date),
            end_date: non_empty(&self.end_date),
        }
    }
}

/// Form defaults: today's date, `Present`, and the pre-selected employee if any.
pub fn default_form(employee_id: Option<&str>, today: NaiveDate) -> FormState<AttendanceField> {
    FormState::new([
        (
            AttendanceField::EmployeeId,
            employee_id.unwrap_or_default().to_string(),
        ),
        (AttendanceField::Date, date_input_value(today)),
        (
            AttendanceField::Status,
            AttendanceStatus::Present.as_str().to_string(),
        ),
    ])
}

pub fn validate(state: &FormState<AttendanceField>) -> FieldErrors<AttendanceField> {
    let mut errors = FieldErrors::new();
    if state.value(AttendanceField::EmployeeId).trim().is_empty() {
        errors.insert(AttendanceField::EmployeeId, "Employee is required".to_string());
    }
    let date = state.value(AttendanceField::Date);
    if date.trim().is_empty() {
        errors.insert(AttendanceField::Date, "Date is required".to_string());
    } else if parse_date_input(date).is_none() {
        errors.insert(AttendanceField::Date, "Invalid date".to_string());
    }
    let status = state.value(AttendanceField::Status);
    if status.trim().is_empty() {
        errors.insert(AttendanceField::Status, "Status is required".to_string());
    } else if AttendanceStatus::parse(status).is_none() {
        errors.insert(AttendanceField::Status, "Invalid status".to_string());
    }
    errors
}

/// Builds the request body from a form that passed [`validate`].
pub fn to_payload(state: &FormState<AttendanceField>) -> Option<MarkAttendance> {
    let date = parse_date_input(state.value(AttendanceField::Date))?;
    let status = AttendanceStatus::parse(state.value(AttendanceField::Status))?;
    Some(MarkAttendance {
        employee_id: state.value(AttendanceField::EmployeeId).trim().to_string(),
        date: to_utc_midnight_timestamp(date),
        status,
    })
}

pub fn filter_options(employees: &[Employee]) -> Vec<SelectOption> {
    employees
        .iter()
        .map(|emp| SelectOption::new(&emp.id, format!("{} - {}", emp.employee_id, emp.full_name)))
        .collect()
}

pub fn form_options(employees: &[Employee]) -> Vec<SelectOption> {
    employees
        .iter()
        .map(|emp| {
            SelectOption::new(
                &emp.id,
                format!("{} - {} ({})", emp.employee_id, emp.full_name, emp.department),
            )
        })
        .collect()
}

pub fn status_options() -> Vec<SelectOption> {
    AttendanceStatus::ALL
        .iter()
        .map(|status| SelectOption::new(status.as_str(), status.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::employee;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
    }

    #[test]
    fn defaults_prefill_today_and_present() {
        let state = default_form(Some("e1"), today());
        assert_eq!(state.value(AttendanceField::EmployeeId), "e1");
        assert_eq!(state.value(AttendanceField::Date), "2025-01-02");
        assert_eq!(state.value(AttendanceField::Status), "Present");
        assert!(validate(&state).is_empty());

        let blank = default_form(None, today());
        assert_eq!(blank.value(AttendanceField::EmployeeId), "");
    }

    #[test]
    fn validation_reports_each_required_field() {
        let errors = validate(&FormState::default());
        assert_eq!(
            errors.get(&AttendanceField::EmployeeId).map(String::as_str),
            Some("Employee is required")
        );
        assert_eq!(
            errors.get(&AttendanceField::Date).map(String::as_str),
            Some("Date is required")
        );
        assert_eq!(
            errors.get(&AttendanceField::Status).map(String::as_str),
            Some("Status is required")
        );
    }

    #[test]
    fn malformed_date_and_status_are_rejected() {
        let mut state = default_form(Some("e1"), today());
        state.set(AttendanceField::Date, "2025-13-40");
        state.set(AttendanceField::Status, "Late");
        let errors = validate(&state);
        assert_eq!(errors.get(&AttendanceField::Date).map(String::as_str), Some("Invalid date"));
        assert_eq!(
            errors.get(&AttendanceField::Status).map(String::as_str),
            Some("Invalid status")
        );
        assert_eq!(to_payload(&state), None);
    }

    #[test]
    fn payload_sends_utc_midnight_timestamp() {
        let mut state = default_form(Some("e1"), today());
        state.set(AttendanceField::Status, "Absent");
        let payload = to_payload(&state).unwrap();
        assert_eq!(payload.employee_id, "e1");
        assert_eq!(payload.date, "2025-01-02T00:00:00.000Z");
        assert_eq!(payload.status, AttendanceStatus::Absent);
    }

    #[test]
    fn filters_track_changes_and_build_query() {
        let mut filters = AttendanceFilters::default();
        assert!(!filters.is_active());
        assert!(filters.set(FilterField::EmployeeId, "e1".into()));
        assert!(!filters.set(FilterField::EmployeeId, "e1".into()));
        assert!(filters.set(FilterField::EndDate, "2025-01-31".into()));
        assert_eq!(
            filters.to_query(),
            AttendanceQuery {
                employee_id: Some("e1".into()),
                start_date: None,
                end_date: Some("2025-01-31".into()),
            }
        );
        assert!(filters.clear());
        assert!(!filters.clear());
        assert_eq!(filters.to_query(), AttendanceQuery::default());
    }

    #[test]
    fn option_labels_follow_picker_formats() {
        let employees = vec![employee("e1", "EMP001", "Jane Doe")];
        assert_eq!(filter_options(&employees)[0].label, "EMP001 - Jane Doe");
        assert_eq!(form_options(&employees)[0].label, "EMP001 - Jane Doe (Engineering)");
        assert_eq!(form_options(&employees)[0].value, "e1");
        assert_eq!(status_options().len(), 2);
    }
}
