//! Error types for form submission

use thiserror::Error;

/// Errors that can occur while posting the form
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Request never produced a response (DNS, connect, timeout, ...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Success status but the body was not JSON
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Client could not be constructed
    #[error("Client configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SubmitError::Decode(err.to_string())
        } else if err.is_builder() {
            SubmitError::Configuration(err.to_string())
        } else {
            SubmitError::Transport(err.to_string())
        }
    }
}

/// Result type for submission
pub type SubmitResult<T> = Result<T, SubmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = SubmitError::Status {
            status: 400,
            body: r#"{"error":"Missing password"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Server returned 400: {"error":"Missing password"}"#
        );
    }

    #[test]
    fn test_transport_display() {
        let err = SubmitError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }
}
