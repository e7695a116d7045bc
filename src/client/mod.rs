//! Analysis client: submits article text or files to the remote analysis
//! backend and normalizes its response into the canonical result shape.
//!
//! The backend is reached through the [`AnalysisBackend`] trait so the form
//! controller and web server take an injected client object; tests substitute
//! a fake transport without any process-wide state.

mod error;
mod normalize;

pub use error::{ApiError, ValidationError};
pub use normalize::{merge_category, normalize, RawAnalysisResponse, RawEntities};

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::models::{AnalysisRequest, AnalysisResult};

/// Path of the backend's single analysis endpoint.
pub const ANALYZE_PATH: &str = "/analyze";

/// Request timeout. Generous because the backend runs an AI model per call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Fallback message when neither the server nor the transport supplied one.
const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Boundary to the remote analysis service.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Submit one analysis request. Exactly one of text or file must be set.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ApiError>;
}

/// HTTP implementation of [`AnalysisBackend`].
pub struct HttpAnalysisClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpAnalysisClient {
    /// Create a client against the configured backend base URL.
    pub fn new(settings: &Settings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        let endpoint = format!(
            "{}{}",
            settings.api_base_url.as_str().trim_end_matches('/'),
            ANALYZE_PATH
        );

        Self { endpoint, client }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisBackend for HttpAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ApiError> {
        let form = build_form(request)?;

        debug!(endpoint = %self.endpoint, "Submitting article for analysis");

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!("Analysis request failed: {}", e);
                map_transport_error(&e)
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| map_transport_error(&e))?;

        if !status.is_success() {
            return Err(map_error_response(status.as_u16(), &body));
        }

        if body.trim().is_empty() {
            return Err(ApiError::EmptyResponse);
        }

        let raw: RawAnalysisResponse = serde_json::from_str(&body).map_err(|e| {
            ApiError::transport(
                format!("invalid response from server: {e}"),
                Some(status.as_u16()),
            )
        })?;

        Ok(normalize(raw))
    }
}

/// Build the multipart submission. The file wins if both inputs are set;
/// neither set fails locally with `MissingInput` before any network activity.
fn build_form(request: &AnalysisRequest) -> Result<Form, ApiError> {
    if let Some(file) = &request.file {
        let mime = mime_guess::from_path(&file.filename).first_or_octet_stream();
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.filename.clone())
            .mime_str(mime.essence_str())
            .map_err(|e| ApiError::transport(e.to_string(), None))?;
        return Ok(Form::new().part("file", part));
    }

    if let Some(text) = &request.text {
        return Ok(Form::new().text("text", text.clone()));
    }

    Err(ValidationError::MissingInput.into())
}

/// Map a reqwest failure to the uniform error shape. A failure with no HTTP
/// response at all (connection refused, timeout) has no status code.
fn map_transport_error(error: &reqwest::Error) -> ApiError {
    let message = if error.is_timeout() {
        format!(
            "request timed out after {} seconds",
            REQUEST_TIMEOUT.as_secs()
        )
    } else {
        error.to_string()
    };
    ApiError::transport(message, error.status().map(|s| s.as_u16()))
}

/// Map a non-2xx response to the uniform error shape. Message priority:
/// server-supplied `detail` field, else the raw body, else a generic fallback.
fn map_error_response(status: u16, body: &str) -> ApiError {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
    }

    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.trim().is_empty());

    let message = match detail {
        Some(detail) => detail,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => format!("{GENERIC_ERROR_MESSAGE} (HTTP {status})"),
    };

    ApiError::transport(message, Some(status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalysisRequest;

    #[test]
    fn test_build_form_requires_input() {
        let err = build_form(&AnalysisRequest::default()).unwrap_err();
        assert_eq!(err, ApiError::Validation(ValidationError::MissingInput));

        assert!(build_form(&AnalysisRequest::from_text("some article text")).is_ok());
        assert!(build_form(&AnalysisRequest::from_file("a.pdf", vec![1, 2, 3])).is_ok());
    }

    #[test]
    fn test_file_wins_over_text() {
        let request = AnalysisRequest {
            text: Some("ignored".into()),
            file: Some(crate::models::FileUpload {
                filename: "a.txt".into(),
                bytes: b"body".to_vec(),
            }),
        };
        // Both set is tolerated; the file part is used.
        assert!(build_form(&request).is_ok());
    }

    #[test]
    fn test_map_error_response_prefers_detail() {
        let err = map_error_response(500, r#"{"detail": "model unavailable"}"#);
        assert_eq!(err, ApiError::transport("model unavailable", Some(500)));
    }

    #[test]
    fn test_map_error_response_falls_back_to_body() {
        let err = map_error_response(502, "Bad Gateway");
        assert_eq!(err, ApiError::transport("Bad Gateway", Some(502)));
    }

    #[test]
    fn test_map_error_response_generic_fallback() {
        let err = map_error_response(500, "");
        assert_eq!(
            err,
            ApiError::transport("An error occurred (HTTP 500)", Some(500))
        );

        // Empty detail field is treated as absent.
        let err = map_error_response(503, r#"{"detail": ""}"#);
        assert_eq!(err.status(), Some(503));
        assert!(err.to_string().contains("An error occurred"));
    }

    #[test]
    fn test_endpoint_trailing_slash() {
        let settings = Settings::with_base_url("http://localhost:9000/").unwrap();
        let client = HttpAnalysisClient::new(&settings);
        assert_eq!(client.endpoint(), "http://localhost:9000/analyze");
    }
}
