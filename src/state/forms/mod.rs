//! Form domain layer
//!
//! Type-safe field names, input values and the signup form record.

mod field;
mod form_state;

pub use field::{FieldInput, FieldName};
pub use form_state::{FieldErrors, Form, FormError, FormValues, SignupForm};
