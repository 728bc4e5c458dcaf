//! HTTP client for posting the signup form
//!
//! A thin wrapper around `reqwest` that sends the form values as a JSON
//! body and hands back the decoded JSON response.

use super::error::{SubmitError, SubmitResult};
use super::traits::Submitter;
use crate::state::FormValues;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Posts the form over HTTP
pub struct HttpSubmitter {
    client: reqwest::Client,
}

impl HttpSubmitter {
    /// Create a new submitter with the given request timeout
    pub fn new(timeout: Duration) -> SubmitResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn post(&self, url: &str, body: &FormValues) -> SubmitResult<Value> {
        tracing::debug!(url, "Posting signup form");

        let response = self.client.post(url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| SubmitError::Decode(e.to_string()))
    }
}
