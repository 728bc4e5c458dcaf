//! Form rendering module
//!
//! - `field_renderer`: text input, checkbox and inline error helpers
//! - `signup_form`: the signup form itself

mod field_renderer;
mod signup_form;

pub use signup_form::draw as draw_signup_form;
