use crate::api::{ApiError, CreateEmployee, Employee};
use crate::pages::employees::utils::{self, EmployeeField};
use crate::state::{
    DeleteFlow, Form, FormState, LoadState, Notification, RequestToken, RequestTokens,
};

pub const LOAD_FAILED: &str = "Failed to load employees";
pub const CREATE_FAILED: &str = "Failed to create employee";
pub const DELETE_FAILED: &str = "Failed to delete employee";
pub const CREATED: &str = "Employee added successfully.";
pub const DELETED: &str = "Employee deleted successfully.";

/// Everything the employees page renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeesState {
    pub list: LoadState<Vec<Employee>>,
    /// Dismissible page-level error shown above a still-usable list.
    pub banner: Option<String>,
    pub form: Form<EmployeeField>,
    pub delete: DeleteFlow<Employee>,
    tokens: RequestTokens,
}

impl EmployeesState {
    pub fn employees(&self) -> &[Employee] {
        self.list.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        matches!(&self.list, LoadState::Loaded(list) if list.is_empty())
    }

    pub fn begin_load(&mut self) -> RequestToken {
        self.list.begin();
        self.tokens.issue()
    }

    /// Applies a list response. Returns false when a newer load superseded it.
    pub fn finish_load(
        &mut self,
        token: RequestToken,
        result: Result<Vec<Employee>, ApiError>,
    ) -> bool {
        if !self.tokens.is_current(token) {
            return false;
        }
        match result {
            Ok(list) => self.list.succeed(list),
            Err(err) => {
                if let Some(message) = self.list.fail(err.message_or(LOAD_FAILED)) {
                    self.banner = Some(message);
                }
            }
        }
        true
    }

    pub fn open_create_form(&mut self) {
        if !self.form.is_submitting() {
            self.form = Form::open(FormState::default());
        }
    }

    pub fn close_form(&mut self) -> bool {
        self.form.close()
    }

    pub fn update_field(&mut self, field: EmployeeField, value: String) {
        self.form.update_field(field, value);
    }

    /// Validates the open form. `None` means nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<CreateEmployee> {
        self.form.begin_submit(utils::validate).map(utils::to_payload)
    }

    pub fn finish_submit(&mut self, result: &Result<Option<Employee>, ApiError>) -> Notification {
        match result {
            Ok(_) => {
                self.form.finish_submit_ok();
                Notification::success(CREATED)
            }
            Err(err) => {
                let message = err.message_or(CREATE_FAILED);
                if !self.form.finish_submit_err(&err.errors) {
                    self.banner = Some(message.clone());
                }
                Notification::error(message)
            }
        }
    }

    pub fn request_delete(&mut self, employee: Employee) {
        self.delete.request(employee);
    }

    pub fn cancel_delete(&mut self) -> bool {
        self.delete.cancel()
    }

    /// Moves the confirmation to `Deleting` and hands back the id to delete.
    pub fn begin_delete(&mut self) -> Option<String> {
        self.delete.begin().map(|employee| employee.id.clone())
    }

    pub fn finish_delete(&mut self, result: &Result<(), ApiError>) -> Notification {
        self.delete.finish();
        match result {
            Ok(()) => Notification::success(DELETED),
            Err(err) => {
                let message = err.message_or(DELETE_FAILED);
                self.banner = Some(message.clone());
                Notification::error(message)
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.banner = None;
    }
}
