//! Signup schema: rule lists per field, field-scoped and whole-object checks

use super::rules::Rule;
use super::ValidationError;
use crate::state::{FieldInput, FieldName, FormValues};

pub const NAME_REQUIRED: &str = "Name is a required field.";
pub const EMAIL_REQUIRED: &str = "Must include email address.";
pub const EMAIL_INVALID: &str = "Must be a valid email.";
pub const PASSWORD_REQUIRED: &str = "Please enter a password.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const TOS_REQUIRED: &str = "Please accept terms of service.";

/// Minimum password length in characters
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Ordered rules for every field of the signup form
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<(FieldName, Vec<Rule>)>,
}

impl Schema {
    /// The fixed signup rule set
    pub fn signup() -> Self {
        Self {
            fields: vec![
                (FieldName::Name, vec![Rule::required(NAME_REQUIRED)]),
                (
                    FieldName::Email,
                    vec![Rule::required(EMAIL_REQUIRED), Rule::email(EMAIL_INVALID)],
                ),
                (
                    FieldName::Password,
                    vec![
                        Rule::required(PASSWORD_REQUIRED),
                        Rule::min_length(PASSWORD_MIN_LENGTH, PASSWORD_TOO_SHORT),
                    ],
                ),
                (FieldName::Tos, vec![Rule::is_true(TOS_REQUIRED)]),
            ],
        }
    }

    fn rules_for(&self, field: FieldName) -> &[Rule] {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Check one value against the rules scoped to `field`.
    /// The first failing rule's message is reported.
    pub fn validate_field(
        &self,
        field: FieldName,
        input: &FieldInput,
    ) -> Result<(), ValidationError> {
        match self.rules_for(field).iter().find(|rule| !rule.passes(input)) {
            Some(rule) => Err(ValidationError {
                field,
                message: rule.message().to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Whole-object check: true iff every field satisfies its rules
    pub fn is_valid(&self, values: &FormValues) -> bool {
        self.fields
            .iter()
            .all(|(field, _)| self.validate_field(*field, &values.input(*field)).is_ok())
    }
}
