use regex::Regex;
use std::sync::OnceLock;

use crate::api::CreateEmployee;
use crate::state::{FieldErrors, FormField, FormState};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EmployeeField {
    EmployeeId,
    FullName,
    Email,
    Department,
}

impl FormField for EmployeeField {
    const ALL: &'static [Self] = &[
        EmployeeField::EmployeeId,
        EmployeeField::FullName,
        EmployeeField::Email,
        EmployeeField::Department,
    ];

    fn name(self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "employeeId",
            EmployeeField::FullName => "fullName",
            EmployeeField::Email => "email",
            EmployeeField::Department => "department",
        }
    }
}

impl EmployeeField {
    pub fn label(self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "Employee ID",
            EmployeeField::FullName => "Full Name",
            EmployeeField::Email => "Email Address",
            EmployeeField::Department => "Department",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "e.g., EMP001",
            EmployeeField::FullName => "John Doe",
            EmployeeField::Email => "john.doe@example.com",
            EmployeeField::Department => "Engineering",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            EmployeeField::Email => "email",
            _ => "text",
        }
    }

    fn required_message(self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "Employee ID is required",
            EmployeeField::FullName => "Full Name is required",
            EmployeeField::Email => "Email is required",
            EmployeeField::Department => "Department is required",
        }
    }
}

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(value))
}

pub fn validate(state: &FormState<EmployeeField>) -> FieldErrors<EmployeeField> {
    let mut errors = FieldErrors::new();
    for field in EmployeeField::ALL {
        let value = state.value(*field);
        if value.trim().is_empty() {
            errors.insert(*field, field.required_message().to_string());
        } else if *field == EmployeeField::Email && !is_valid_email(value) {
            errors.insert(*field, "Invalid email format".to_string());
        }
    }
    errors
}

pub fn to_payload(state: &FormState<EmployeeField>) -> CreateEmployee {
    let value = |field| state.value(field).trim().to_string();
    CreateEmployee {
        employee_id: value(EmployeeField::EmployeeId),
        full_name: value(EmployeeField::FullName),
        email: value(EmployeeField::Email),
        department: value(EmployeeField::Department),
    }
}
