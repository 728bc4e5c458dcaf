//! Schema validation for the signup form
//!
//! Two modes are offered over the same rule set:
//! - field-scoped: [`Schema::validate_field`] checks one value and reports
//!   the first failing rule's message
//! - whole-object: [`Schema::is_valid`] folds every field into one boolean

mod rules;
mod schema;

use crate::state::FieldName;
use thiserror::Error;

pub use schema::*;

/// A failed field check; displays as the human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: FieldName,
    pub message: String,
}
