//! Form field value objects

use std::fmt;

/// The four fields of the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Password,
    Tos,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Password,
        FieldName::Tos,
    ];

    /// JSON key used on the wire
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Tos => "tos",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Tos => "Terms of Service",
        }
    }

    /// Whether the field is a checkbox rather than a text input
    pub fn is_checkbox(&self) -> bool {
        matches!(self, Self::Tos)
    }

    /// Whether the input echoes masked characters
    pub fn is_masked(&self) -> bool {
        matches!(self, Self::Password)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw value coming out of an input change: text for text inputs,
/// checked state for the checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Checked(bool),
}

impl FieldInput {
    /// Short name of the input kind, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            FieldInput::Text(_) => "text",
            FieldInput::Checked(_) => "checkbox",
        }
    }
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        FieldInput::Text(value.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(value: String) -> Self {
        FieldInput::Text(value)
    }
}

impl From<bool> for FieldInput {
    fn from(value: bool) -> Self {
        FieldInput::Checked(value)
    }
}
