use chrono::NaiveDate;

use crate::api::{
    ApiError, AttendanceQuery, AttendanceRecord, AttendanceSummary, Employee,
    EmployeeAttendance, MarkAttendance,
};
use crate::pages::attendance::utils::{
    self, AttendanceField, AttendanceFilters, FilterField,
};
use crate::state::{Form, LoadState, Notification, RequestToken, RequestTokens};

pub const LOAD_FAILED: &str = "Failed to load attendance records";
pub const MARK_FAILED: &str = "Failed to mark attendance";
pub const MARKED: &str = "Attendance marked successfully.";
pub const UNKNOWN_EMPLOYEE: &str = "Unknown";

/// Display values for one attendance row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRow {
    pub id: String,
    pub date: String,
    pub employee_code: String,
    pub employee_name: String,
    pub department: String,
    pub status: crate::api::AttendanceStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceState {
    /// Picker source; a failed load leaves it empty.
    pub employees: Vec<Employee>,
    pub records: LoadState<Vec<AttendanceRecord>>,
    /// Only present while the employee filter is set.
    pub summary: Option<AttendanceSummary>,
    pub filters: AttendanceFilters,
    pub banner: Option<String>,
    pub form: Form<AttendanceField>,
    pub selected_employee: Option<Employee>,
    tokens: RequestTokens,
}

impl AttendanceState {
    pub fn records(&self) -> &[AttendanceRecord] {
        self.records.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.is_active()
    }

    pub fn employee_name(&self, id: &str) -> String {
        self.employees
            .iter()
            .find(|employee| employee.id == id)
            .map(|employee| employee.full_name.clone())
            .unwrap_or_else(|| UNKNOWN_EMPLOYEE.to_string())
    }

    /// Prefers the employee the server embedded in the record, then the picker list.
    pub fn row(&self, record: &AttendanceRecord) -> AttendanceRow {
        let (employee_code, employee_name, department) = match &record.employee {
            Some(embedded) => (
                embedded.employee_id.clone(),
                embedded.full_name.clone(),
                embedded.department.clone(),
            ),
            None => {
                let known = record
                    .employee_id
                    .as_deref()
                    .and_then(|id| self.employees.iter().find(|employee| employee.id == id));
                match known {
                    Some(employee) => (
                        employee.employee_id.clone(),
                        employee.full_name.clone(),
                        employee.department.clone(),
                    ),
                    None => (
                        "-".to_string(),
                        UNKNOWN_EMPLOYEE.to_string(),
                        "-".to_string(),
                    ),
                }
            }
        };
        AttendanceRow {
            id: record.id.clone(),
            date: crate::utils::time::display_date(&record.date),
            employee_code,
            employee_name,
            department,
            status: record.status,
        }
    }

    pub fn rows(&self) -> Vec<AttendanceRow> {
        self.records().iter().map(|record| self.row(record)).collect()
    }

    pub fn set_employees(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
    }

    pub fn set_filter(&mut self, field: FilterField, value: String) -> bool {
        self.filters.set(field, value)
    }

    pub fn clear_filters(&mut self) -> bool {
        self.filters.clear()
    }

    /// Starts a list fetch for the current filters. List and summary share the token.
    pub fn begin_fetch(&mut self) -> (RequestToken, AttendanceQuery) {
        self.records.begin();
        (self.tokens.issue(), self.filters.to_query())
    }

    /// Applies the list response. True when the summary step should follow.
    pub fn finish_list(
        &mut self,
        token: RequestToken,
        result: Result<Vec<AttendanceRecord>, ApiError>,
    ) -> bool {
        if !self.tokens.is_current(token) {
            return false;
        }
        match result {
            Ok(records) => {
                self.records.succeed(records);
                true
            }
            Err(err) => {
                self.summary = None;
                if let Some(message) = self.records.fail(err.message_or(LOAD_FAILED)) {
                    self.banner = Some(message);
                }
                false
            }
        }
    }

    /// `None` means no employee filter was active, which clears the summary.
    pub fn finish_summary(
        &mut self,
        token: RequestToken,
        result: Option<Result<EmployeeAttendance, ApiError>>,
    ) -> bool {
        if !self.tokens.is_current(token) {
            return false;
        }
        self.summary = match result {
            Some(Ok(scoped)) => Some(scoped.summary),
            Some(Err(err)) => {
                self.banner = Some(err.message_or(LOAD_FAILED));
                None
            }
            None => None,
        };
        true
    }

    pub fn open_modal(&mut self, employee: Option<Employee>, today: NaiveDate) {
        if self.form.is_submitting() {
            return;
        }
        let employee_id = employee.as_ref().map(|employee| employee.id.as_str());
        self.form = Form::open(utils::default_form(employee_id, today));
        self.selected_employee = employee;
    }

    pub fn close_modal(&mut self) -> bool {
        let closed = self.form.close();
        if closed {
            self.selected_employee = None;
        }
        closed
    }

    pub fn update_field(&mut self, field: AttendanceField, value: String) {
        self.form.update_field(field, value);
    }

    pub fn begin_submit(&mut self) -> Option<MarkAttendance> {
        self.form
            .begin_submit(utils::validate)
            .and_then(utils::to_payload)
    }

    pub fn finish_submit(
        &mut self,
        result: &Result<Option<AttendanceRecord>, ApiError>,
    ) -> Notification {
        match result {
            Ok(_) => {
                self.form.finish_submit_ok();
                self.selected_employee = None;
                Notification::success(MARKED)
            }
            Err(err) => {
                let message = err.message_or(MARK_FAILED);
                if !self.form.finish_submit_err(&err.errors) {
                    self.banner = Some(message.clone());
                }
                Notification::error(message)
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.banner = None;
    }
}
