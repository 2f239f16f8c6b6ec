use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::api::FieldError;

/// A named input of one form. The wire name doubles as the key servers use in
/// structured field errors.
pub trait FormField: Copy + Ord + Debug + 'static {
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

pub type FieldErrors<F> = BTreeMap<F, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState<F: FormField> {
    fields: BTreeMap<F, String>,
    errors: FieldErrors<F>,
}

impl<F: FormField> Default for FormState<F> {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}

impl<F: FormField> FormState<F> {
    /// Every field starts as an empty string unless `defaults` overrides it.
    pub fn new(defaults: impl IntoIterator<Item = (F, String)>) -> Self {
        let mut fields: BTreeMap<F, String> =
            F::ALL.iter().map(|field| (*field, String::new())).collect();
        fields.extend(defaults);
        Self {
            fields,
            errors: FieldErrors::new(),
        }
    }

    pub fn value(&self, field: F) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or_default()
    }

    /// Writes a value and drops that field's error; other errors stay until the next submit.
    pub fn set(&mut self, field: F, value: impl Into<String>) {
        self.fields.insert(field, value.into());
        self.errors.remove(&field);
    }

    pub fn error(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &FieldErrors<F> {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn set_errors(&mut self, errors: FieldErrors<F>) {
        self.errors = errors;
    }

    /// Replaces the errors with the server-reported ones that name a field of this form.
    /// Returns whether any were kept.
    pub fn apply_server_errors(&mut self, errors: &[FieldError]) -> bool {
        self.errors = errors
            .iter()
            .filter_map(|err| F::from_name(&err.path).map(|field| (field, err.msg.clone())))
            .collect();
        !self.errors.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Pristine,
    Editing,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Form<F: FormField> {
    Closed,
    Open {
        state: FormState<F>,
        status: FormStatus,
    },
}

impl<F: FormField> Default for Form<F> {
    fn default() -> Self {
        Form::Closed
    }
}

impl<F: FormField> Form<F> {
    pub fn open(state: FormState<F>) -> Self {
        Form::Open {
            state,
            status: FormStatus::Pristine,
        }
    }

    pub fn state(&self) -> Option<&FormState<F>> {
        match self {
            Form::Open { state, .. } => Some(state),
            Form::Closed => None,
        }
    }

    pub fn status(&self) -> Option<FormStatus> {
        match self {
            Form::Open { status, .. } => Some(*status),
            Form::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Form::Open { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(
            self,
            Form::Open {
                status: FormStatus::Submitting,
                ..
            }
        )
    }

    pub fn value(&self, field: F) -> &str {
        self.state().map(|state| state.value(field)).unwrap_or_default()
    }

    pub fn error(&self, field: F) -> Option<&str> {
        self.state().and_then(|state| state.error(field))
    }

    pub fn update_field(&mut self, field: F, value: impl Into<String>) {
        if let Form::Open { state, status } = self {
            state.set(field, value);
            if *status == FormStatus::Pristine {
                *status = FormStatus::Editing;
            }
        }
    }

    /// Closes the form, discarding its state. Refused while a submission is in flight.
    pub fn close(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = Form::Closed;
        true
    }

    /// Runs `validate`; on success moves to `Submitting` and returns the state to send.
    pub fn begin_submit(
        &mut self,
        validate: impl FnOnce(&FormState<F>) -> FieldErrors<F>,
    ) -> Option<&FormState<F>> {
        let Form::Open { state, status } = self else {
            return None;
        };
        if *status == FormStatus::Submitting {
            return None;
        }
        let errors = validate(state);
        let valid = errors.is_empty();
        state.set_errors(errors);
        if valid {
            *status = FormStatus::Submitting;
            Some(&*state)
        } else {
            *status = FormStatus::Editing;
            None
        }
    }

    pub fn finish_submit_ok(&mut self) {
        *self = Form::Closed;
    }

    /// Returns to editing after a rejected submission. True when the
    /// server's field errors were mapped onto this form's inputs.
    pub fn finish_submit_err(&mut self, server_errors: &[FieldError]) -> bool {
        match self {
            Form::Open { state, status } => {
                *status = FormStatus::Editing;
                state.apply_server_errors(server_errors)
            }
            Form::Closed => false,
        }
    }
}
