//! Input form controller.
//!
//! Holds the current input mode (text vs. file), validates input locally,
//! and drives the submission lifecycle as a single explicit state value.
//! Each submission carries a monotonically increasing request id; a
//! completion is applied only when its id still matches the most recent
//! request, so a late response arriving after a reset is ignored.

use crate::client::{AnalysisBackend, ApiError, ValidationError};
use crate::models::{AnalysisRequest, AnalysisResult, FileUpload};

/// Minimum trimmed text length accepted at submit time.
pub const MIN_TEXT_CHARS: usize = 50;

/// Maximum text length, enforced at the input boundary (overflow truncated).
pub const MAX_TEXT_CHARS: usize = 50_000;

/// Which input the form submits. Switching modes keeps the other mode's
/// buffered input; only the active mode is used on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Text,
    File,
}

/// Submission lifecycle. A result and an error can never coexist.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(AnalysisResult),
    Failed(ApiError),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            SubmissionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            SubmissionState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// One form instance. Single submission at a time, enforced by the
/// `Submitting` state rather than a lock.
#[derive(Default)]
pub struct FormController {
    mode: InputMode,
    text: String,
    file: Option<FileUpload>,
    state: SubmissionState,
    last_request: Option<AnalysisRequest>,
    // Most recent request id. Bumped on every submission and on reset.
    seq: u64,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text buffer, truncating overflow at the input boundary.
    pub fn set_text(&mut self, text: &str) {
        self.text = truncate_chars(text, MAX_TEXT_CHARS).to_string();
    }

    pub fn selected_file(&self) -> Option<&FileUpload> {
        self.file.as_ref()
    }

    pub fn select_file(&mut self, filename: impl Into<String>, bytes: Vec<u8>) {
        self.file = Some(FileUpload {
            filename: filename.into(),
            bytes,
        });
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Whether the submit action is enabled: some input in the active mode
    /// and no submission in flight.
    pub fn can_submit(&self) -> bool {
        if self.state.is_submitting() {
            return false;
        }
        match self.mode {
            InputMode::Text => !self.text.trim().is_empty(),
            InputMode::File => self.file.is_some(),
        }
    }

    /// Validate the active input and build the request to submit.
    fn build_request(&self) -> Result<AnalysisRequest, ValidationError> {
        match self.mode {
            InputMode::Text => {
                let trimmed = self.text.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::MissingInput);
                }
                let len = trimmed.chars().count();
                if len < MIN_TEXT_CHARS {
                    return Err(ValidationError::TextTooShort { len });
                }
                Ok(AnalysisRequest::from_text(trimmed))
            }
            InputMode::File => match &self.file {
                Some(file) => Ok(AnalysisRequest::from_file(
                    file.filename.clone(),
                    file.bytes.clone(),
                )),
                None => Err(ValidationError::MissingInput),
            },
        }
    }

    /// Start a submission: validate, enter `Submitting`, and return the
    /// tagged request to run against a backend. Validation failures move the
    /// form straight to `Failed` without touching the network.
    pub fn begin_submit(&mut self) -> Result<(u64, AnalysisRequest), ApiError> {
        match self.build_request() {
            Ok(request) => {
                self.seq += 1;
                self.last_request = Some(request.clone());
                self.state = SubmissionState::Submitting;
                Ok((self.seq, request))
            }
            Err(err) => {
                let err = ApiError::from(err);
                self.state = SubmissionState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Apply a completed submission. Dropped silently when the id no longer
    /// matches the most recent request (e.g. the form was reset mid-flight).
    pub fn complete(&mut self, id: u64, outcome: Result<AnalysisResult, ApiError>) {
        if id != self.seq || !self.state.is_submitting() {
            tracing::debug!(id, current = self.seq, "Ignoring stale submission result");
            return;
        }
        self.state = match outcome {
            Ok(result) => SubmissionState::Succeeded(result),
            Err(error) => SubmissionState::Failed(error),
        };
    }

    /// Validate, submit to the backend, and apply the outcome. No-op while a
    /// submission is already in flight.
    pub async fn submit(&mut self, backend: &dyn AnalysisBackend) {
        if self.state.is_submitting() {
            return;
        }
        match self.begin_submit() {
            Ok((id, request)) => {
                let outcome = backend.analyze(&request).await;
                self.complete(id, outcome);
            }
            Err(_) => {
                // Already recorded as Failed by begin_submit.
            }
        }
    }

    /// Replay the exact last submission parameters, bypassing re-validation.
    /// Falls back to a regular submit when nothing was submitted yet.
    pub async fn retry(&mut self, backend: &dyn AnalysisBackend) {
        if self.state.is_submitting() {
            return;
        }
        let Some(request) = self.last_request.clone() else {
            self.submit(backend).await;
            return;
        };
        self.seq += 1;
        let id = self.seq;
        self.state = SubmissionState::Submitting;
        let outcome = backend.analyze(&request).await;
        self.complete(id, outcome);
    }

    /// Return to `Idle`: clears both input buffers, any result or error, and
    /// invalidates whatever submission may still be in flight.
    pub fn reset(&mut self) {
        self.text.clear();
        self.file = None;
        self.last_request = None;
        self.state = SubmissionState::Idle;
        self.seq += 1;
    }
}

/// Truncate to at most `max` characters on a valid UTF-8 boundary.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_truncates_overflow() {
        let mut form = FormController::new();
        form.set_text(&"a".repeat(MAX_TEXT_CHARS + 100));
        assert_eq!(form.text().chars().count(), MAX_TEXT_CHARS);

        // Multi-byte characters are cut on a character boundary.
        let long = "é".repeat(MAX_TEXT_CHARS + 1);
        form.set_text(&long);
        assert_eq!(form.text().chars().count(), MAX_TEXT_CHARS);
    }

    #[test]
    fn test_mode_switch_keeps_buffers() {
        let mut form = FormController::new();
        form.set_text("draft text");
        form.set_mode(InputMode::File);
        form.select_file("a.pdf", vec![1]);
        form.set_mode(InputMode::Text);

        assert_eq!(form.text(), "draft text");
        assert!(form.selected_file().is_some());
    }

    #[test]
    fn test_can_submit() {
        let mut form = FormController::new();
        assert!(!form.can_submit());

        form.set_text("  some text  ");
        assert!(form.can_submit());

        form.set_mode(InputMode::File);
        assert!(!form.can_submit());
        form.select_file("a.txt", vec![1]);
        assert!(form.can_submit());
    }

    #[test]
    fn test_short_text_fails_validation() {
        let mut form = FormController::new();
        form.set_text("too short");
        let err = form.begin_submit().unwrap_err();
        assert_eq!(
            err,
            ApiError::Validation(ValidationError::TextTooShort { len: 9 })
        );
        assert!(form.state().error().is_some());
    }

    #[test]
    fn test_missing_file_fails_validation() {
        let mut form = FormController::new();
        form.set_mode(InputMode::File);
        let err = form.begin_submit().unwrap_err();
        assert_eq!(err, ApiError::Validation(ValidationError::MissingInput));
    }

    #[test]
    fn test_submit_trims_text() {
        let mut form = FormController::new();
        let text = format!("  {}  ", "a".repeat(60));
        form.set_text(&text);
        let (_, request) = form.begin_submit().unwrap();
        assert_eq!(request.text.as_deref(), Some("a".repeat(60).as_str()));
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut form = FormController::new();
        form.set_text(&"a".repeat(60));
        let (id, _) = form.begin_submit().unwrap();

        form.reset();
        form.complete(id, Ok(AnalysisResult::default()));

        assert_eq!(form.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = FormController::new();
        form.set_text(&"a".repeat(60));
        let (id, _) = form.begin_submit().unwrap();
        form.complete(id, Ok(AnalysisResult::default()));
        assert!(form.state().result().is_some());

        form.reset();
        assert_eq!(form.state(), &SubmissionState::Idle);
        assert!(form.text().is_empty());
        assert!(form.selected_file().is_none());
    }
}
