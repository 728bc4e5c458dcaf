//! Signup form state: field values, per-field errors and focus

use super::field::{FieldInput, FieldName};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Errors raised when applying an input change
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("field '{field}' does not accept {got} input")]
    InputKind { field: FieldName, got: &'static str },
}

/// The values entered into the form; also the JSON body sent on submit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub password: String,
    pub tos: bool,
}

impl FormValues {
    /// Current value of a field, as the input kind it accepts
    pub fn input(&self, field: FieldName) -> FieldInput {
        match field {
            FieldName::Name => FieldInput::Text(self.name.clone()),
            FieldName::Email => FieldInput::Text(self.email.clone()),
            FieldName::Password => FieldInput::Text(self.password.clone()),
            FieldName::Tos => FieldInput::Checked(self.tos),
        }
    }

    /// Text value of a text field (empty for the checkbox)
    pub fn text(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::Tos => "",
        }
    }

    /// Copy of these values with only `field` replaced
    pub fn with(&self, field: FieldName, input: FieldInput) -> Result<Self, FormError> {
        let mut next = self.clone();
        match (field, input) {
            (FieldName::Name, FieldInput::Text(s)) => next.name = s,
            (FieldName::Email, FieldInput::Text(s)) => next.email = s,
            (FieldName::Password, FieldInput::Text(s)) => next.password = s,
            (FieldName::Tos, FieldInput::Checked(b)) => next.tos = b,
            (field, input) => {
                return Err(FormError::InputKind {
                    field,
                    got: input.kind(),
                })
            }
        }
        Ok(next)
    }
}

/// Per-field error messages; empty string means no error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: String,
    pub email: String,
    pub password: String,
    pub tos: String,
}

impl FieldErrors {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::Tos => &self.tos,
        }
    }

    pub fn set(&mut self, field: FieldName, message: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::Tos => &mut self.tos,
        };
        *slot = message.into();
    }

    pub fn clear(&mut self, field: FieldName) {
        self.set(field, String::new());
    }
}

/// Number of focus slots: the four fields plus the submit button
const FOCUS_SLOTS: usize = FieldName::ALL.len() + 1;

/// The signup form: values, errors and which slot has focus
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub values: FormValues,
    pub errors: FieldErrors,
    pub active_field_index: usize,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field under focus, or None when the submit button is focused
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    /// Returns true if the submit button is currently focused
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == FOCUS_SLOTS - 1
    }

    /// Reset values and errors to their pristine state, keeping focus
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.errors = FieldErrors::default();
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        FOCUS_SLOTS
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FOCUS_SLOTS - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod form_values {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_empty_and_unchecked() {
            let values = FormValues::default();
            assert_eq!(values.name, "");
            assert_eq!(values.email, "");
            assert_eq!(values.password, "");
            assert!(!values.tos);
        }

        #[test]
        fn test_with_replaces_only_one_field() {
            let values = FormValues {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                password: "secret".to_string(),
                tos: false,
            };
            let next = values.with(FieldName::Tos, FieldInput::Checked(true)).unwrap();
            assert_eq!(
                next,
                FormValues {
                    tos: true,
                    ..values.clone()
                }
            );
            // Original is untouched
            assert!(!values.tos);
        }

        #[test]
        fn test_with_rejects_wrong_input_kind() {
            let values = FormValues::default();
            let err = values
                .with(FieldName::Tos, FieldInput::Text("on".to_string()))
                .unwrap_err();
            assert_eq!(
                err,
                FormError::InputKind {
                    field: FieldName::Tos,
                    got: "text"
                }
            );

            let err = values
                .with(FieldName::Name, FieldInput::Checked(true))
                .unwrap_err();
            assert_eq!(err.to_string(), "field 'name' does not accept checkbox input");
        }

        #[test]
        fn test_serializes_to_wire_body() {
            let values = FormValues {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                password: "secret".to_string(),
                tos: true,
            };
            let json = serde_json::to_value(&values).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "name": "Ada",
                    "email": "ada@example.com",
                    "password": "secret",
                    "tos": true
                })
            );
        }

        #[test]
        fn test_input_reads_back_field() {
            let values = FormValues {
                email: "a@b.com".to_string(),
                tos: true,
                ..Default::default()
            };
            assert_eq!(values.input(FieldName::Email), FieldInput::from("a@b.com"));
            assert_eq!(values.input(FieldName::Tos), FieldInput::Checked(true));
            assert_eq!(values.text(FieldName::Tos), "");
        }
    }

    mod field_errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_and_clear() {
            let mut errors = FieldErrors::default();

            errors.set(FieldName::Email, "Must be a valid email.");
            assert_eq!(errors.get(FieldName::Email), "Must be a valid email.");
            assert_eq!(errors.get(FieldName::Name), "");

            errors.clear(FieldName::Email);
            assert_eq!(errors, FieldErrors::default());
        }
    }

    mod signup_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = SignupForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.active_field_name(), Some(FieldName::Name));
            assert!(!form.is_submit_active());
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = SignupForm::new();
            for _ in 0..5 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit() {
            let mut form = SignupForm::new();
            form.prev_field();
            assert!(form.is_submit_active());
            assert_eq!(form.active_field_name(), None);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = SignupForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 4);
        }

        #[test]
        fn test_reset_clears_values_and_errors() {
            let mut form = SignupForm::new();
            form.values.name = "Ada".to_string();
            form.values.tos = true;
            form.errors.set(FieldName::Password, "Please enter a password.");
            form.set_active_field(2);

            form.reset();

            assert_eq!(form.values, FormValues::default());
            assert_eq!(form.errors, FieldErrors::default());
            assert_eq!(form.active_field_index, 2);
        }
    }
}
