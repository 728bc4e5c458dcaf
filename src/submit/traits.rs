//! Trait abstraction for the form submitter to enable mocking in tests

use super::error::SubmitResult;
use crate::state::FormValues;
use async_trait::async_trait;
use serde_json::Value;

/// Sends the form to a remote endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// POST `body` as JSON to `url`, returning the decoded response body
    async fn post(&self, url: &str, body: &FormValues) -> SubmitResult<Value>;
}
