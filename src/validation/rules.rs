//! Individual validation rules

use crate::state::FieldInput;
use once_cell::sync::Lazy;
use regex::Regex;

/// Email address pattern in the HTML living-standard style: a local part
/// of permitted characters, `@`, then dot-separated domain labels.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// A single rule with the message reported when it fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Text must be non-empty
    Required { message: String },
    /// Text must be a syntactically valid email address. Empty text passes;
    /// pair with `Required` to reject it.
    Email { message: String },
    /// Text must have at least `min` characters. Empty text passes.
    MinLength { min: usize, message: String },
    /// Checkbox must be checked
    IsTrue { message: String },
}

impl Rule {
    pub fn required(message: &str) -> Self {
        Rule::Required {
            message: message.to_string(),
        }
    }

    pub fn email(message: &str) -> Self {
        Rule::Email {
            message: message.to_string(),
        }
    }

    pub fn min_length(min: usize, message: &str) -> Self {
        Rule::MinLength {
            min,
            message: message.to_string(),
        }
    }

    pub fn is_true(message: &str) -> Self {
        Rule::IsTrue {
            message: message.to_string(),
        }
    }

    /// Message reported when this rule fails
    pub fn message(&self) -> &str {
        match self {
            Rule::Required { message }
            | Rule::Email { message }
            | Rule::MinLength { message, .. }
            | Rule::IsTrue { message } => message,
        }
    }

    /// Check an input against this rule. An input of the wrong kind fails.
    pub fn passes(&self, input: &FieldInput) -> bool {
        match (self, input) {
            (Rule::Required { .. }, FieldInput::Text(s)) => !s.is_empty(),
            (Rule::Email { .. }, FieldInput::Text(s)) => s.is_empty() || is_email(s),
            (Rule::MinLength { min, .. }, FieldInput::Text(s)) => {
                s.is_empty() || s.chars().count() >= *min
            }
            (Rule::IsTrue { .. }, FieldInput::Checked(checked)) => *checked,
            _ => false,
        }
    }
}

/// Check whether `value` is a syntactically valid email address
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
