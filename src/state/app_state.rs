//! Application state definitions

use super::forms::SignupForm;
use chrono::{DateTime, Local};
use serde_json::Value;

/// Token identifying one submit action
pub type SubmitToken = u64;

/// Tracks in-flight submissions and which success was applied last
#[derive(Debug, Clone, Default)]
pub struct SubmissionTracker {
    /// Last token handed out
    issued: SubmitToken,
    /// Token of the most recently applied successful outcome
    applied: SubmitToken,
    /// Number of submissions awaiting an outcome
    in_flight: usize,
}

impl SubmissionTracker {
    /// Hand out the next token and mark a submission as in flight
    pub fn issue(&mut self) -> SubmitToken {
        self.issued += 1;
        self.in_flight += 1;
        self.issued
    }

    /// Record an outcome for `token`.
    /// Returns false when a newer success was already applied (stale).
    /// Only successes advance the applied token; a failure changes no
    /// visible state and so never supersedes an older success.
    pub fn settle(&mut self, token: SubmitToken, succeeded: bool) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if token <= self.applied {
            return false;
        }
        if succeeded {
            self.applied = token;
        }
        true
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Signup form values, errors and focus
    pub form: SignupForm,
    /// Body of the last successful submission; `[]` until then
    pub response: Value,
    /// When the last successful response arrived
    pub response_received_at: Option<DateTime<Local>>,
    /// Submission bookkeeping
    pub submissions: SubmissionTracker,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: SignupForm::new(),
            response: Value::Array(Vec::new()),
            response_received_at: None,
            submissions: SubmissionTracker::default(),
        }
    }
}

impl AppState {
    /// Pretty-printed response dump, as rendered in the response panel
    pub fn response_dump(&self) -> String {
        serde_json::to_string_pretty(&self.response).unwrap_or_else(|_| self.response.to_string())
    }
}
