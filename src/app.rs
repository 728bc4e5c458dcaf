//! Application state and core logic
//!
//! `App` is the form controller: it applies input changes, keeps the
//! per-field error map current, derives submit enablement from the whole
//! form, and dispatches submissions without blocking the event loop.

use crate::state::{AppState, FieldInput, FieldName, Form, FormError, SubmitToken};
use crate::submit::{SubmitResult, Submitter};
use crate::validation::Schema;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Result of one submit action, delivered back to the event loop
#[derive(Debug)]
pub struct SubmitOutcome {
    pub token: SubmitToken,
    pub result: SubmitResult<Value>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Rules the form is validated against
    schema: Schema,
    /// Sends the form to the endpoint
    submitter: Arc<dyn Submitter>,
    /// Endpoint the form is posted to
    endpoint: String,
    outcome_tx: mpsc::UnboundedSender<SubmitOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
    /// Whether the app should quit
    quit: bool,
    /// Status bar feedback message
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(submitter: Arc<dyn Submitter>, endpoint: impl Into<String>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            schema: Schema::signup(),
            submitter,
            endpoint: endpoint.into(),
            outcome_tx,
            outcome_rx,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Endpoint the form is posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Apply an input change to one field.
    ///
    /// Only `field` is replaced; its error entry is set from a field-scoped
    /// check of the incoming value. An input of the wrong kind for the field
    /// is rejected and leaves state untouched.
    pub fn on_field_change(
        &mut self,
        field: FieldName,
        input: FieldInput,
    ) -> Result<(), FormError> {
        let values = self.state.form.values.with(field, input.clone())?;

        match self.schema.validate_field(field, &input) {
            Ok(()) => self.state.form.errors.clear(field),
            Err(err) => self.state.form.errors.set(field, err.message),
        }

        self.state.form.values = values;
        Ok(())
    }

    /// Whole-form validity; the submit button is disabled when false
    pub fn submit_enabled(&self) -> bool {
        self.schema.is_valid(&self.state.form.values)
    }

    /// Send the current values to the endpoint.
    ///
    /// Returns false without sending when the form is invalid. Otherwise the
    /// request runs on its own task and its outcome is applied later by
    /// [`App::poll_submissions`].
    pub fn on_submit(&mut self) -> bool {
        if !self.submit_enabled() {
            tracing::debug!("Submit ignored: form is invalid");
            return false;
        }

        let token = self.state.submissions.issue();
        let submitter = Arc::clone(&self.submitter);
        let url = self.endpoint.clone();
        let body = self.state.form.values.clone();
        let tx = self.outcome_tx.clone();

        tracing::info!(token, url = %url, "Submitting signup form");
        tokio::spawn(async move {
            let result = submitter.post(&url, &body).await;
            // A closed channel means the app is shutting down
            let _ = tx.send(SubmitOutcome { token, result });
        });

        self.status_message = Some("Submitting...".to_string());
        true
    }

    /// Apply every submission outcome that has arrived, without waiting
    pub fn poll_submissions(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    /// Wait for the next submission outcome and apply it.
    /// Returns false when nothing is in flight.
    #[cfg(test)]
    pub async fn wait_for_submission(&mut self) -> bool {
        if !self.state.submissions.is_pending() {
            return false;
        }
        match self.outcome_rx.recv().await {
            Some(outcome) => {
                self.apply_outcome(outcome);
                true
            }
            None => false,
        }
    }

    /// Apply one submission outcome. Outcomes older than the last applied
    /// success are dropped.
    pub fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        if !self
            .state
            .submissions
            .settle(outcome.token, outcome.result.is_ok())
        {
            tracing::debug!(token = outcome.token, "Discarding stale submission outcome");
            return;
        }

        match outcome.result {
            Ok(body) => {
                tracing::info!(token = outcome.token, response = %body, "Submission succeeded");
                self.state.response = body;
                self.state.response_received_at = Some(Local::now());
                self.state.form.reset();
                self.status_message = Some("Submitted!".to_string());
            }
            Err(err) => {
                // Values stay as entered so the user can retry
                tracing::warn!(token = outcome.token, error = %err, "Submission failed");
                if !self.state.submissions.is_pending() {
                    self.status_message = None;
                }
            }
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let active = self.state.form.active_field_name();
        let on_submit_button = self.state.form.is_submit_active();

        // Clear feedback on key press, but keep the in-flight notice
        if !self.state.submissions.is_pending() {
            self.status_message = None;
        }

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Char('s') if ctrl => {
                self.on_submit();
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_response();
            }
            KeyCode::Enter if on_submit_button => {
                self.on_submit();
            }
            KeyCode::Enter | KeyCode::Char(' ') if active == Some(FieldName::Tos) => {
                let checked = !self.state.form.values.tos;
                self.on_field_change(FieldName::Tos, FieldInput::Checked(checked))?;
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                if let Some(field) = active.filter(|f| !f.is_checkbox()) {
                    let mut text = self.state.form.values.text(field).to_string();
                    text.push(c);
                    self.on_field_change(field, FieldInput::Text(text))?;
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = active.filter(|f| !f.is_checkbox()) {
                    let mut text = self.state.form.values.text(field).to_string();
                    text.pop();
                    self.on_field_change(field, FieldInput::Text(text))?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Copy the response dump to the clipboard, reporting in the status bar
    fn copy_response(&mut self) {
        let dump = self.state.response_dump();
        match self.copy_to_clipboard(&dump) {
            Ok(()) => {
                self.status_message = Some(format!("Copied {} chars", dump.chars().count()))
            }
            Err(err) => {
                tracing::warn!(error = %err, "Clipboard copy failed");
                self.status_message = Some("Clipboard unavailable".to_string());
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
