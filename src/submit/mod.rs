//! Form submission over HTTP

mod client;
mod error;
mod traits;

pub use client::{HttpSubmitter, DEFAULT_TIMEOUT};
pub use error::{SubmitError, SubmitResult};
pub use traits::Submitter;

#[cfg(test)]
pub use traits::MockSubmitter;
