//! Request handlers for the web interface.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use tracing::warn;

use crate::client::ApiError;
use crate::form::{FormController, InputMode, SubmissionState};

use super::templates;
use super::AppState;

/// Health check endpoint for container orchestration.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// The single page: an empty submission form.
pub async fn index() -> Html<String> {
    Html(templates::base_template(&templates::analyze_form(
        "", "text",
    )))
}

/// Handle a browser form submission: extract the active input from the
/// multipart body, run it through the form controller, and render the
/// resulting page (results panel or error panel under the form).
pub async fn analyze(State(state): State<AppState>, mut multipart: Multipart) -> Html<String> {
    let mut form = FormController::new();
    let mut mode = "text".to_string();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("Malformed multipart submission: {}", e);
                let error = ApiError::transport(format!("invalid form submission: {e}"), None);
                return render_page(&form, &mode, Some(&error));
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("mode") => {
                if let Ok(value) = field.text().await {
                    mode = value;
                }
            }
            Some("text") => {
                if let Ok(value) = field.text().await {
                    form.set_text(&value);
                }
            }
            Some("file") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                match field.bytes().await {
                    // Browsers send an empty file part when nothing was
                    // selected; that is "no file", not a zero-byte upload.
                    Ok(bytes) if !bytes.is_empty() => {
                        form.select_file(filename, bytes.to_vec());
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!("Failed to read uploaded file: {}", e);
                        let error =
                            ApiError::transport(format!("failed to read uploaded file: {e}"), None);
                        return render_page(&form, &mode, Some(&error));
                    }
                }
            }
            _ => {}
        }
    }

    form.set_mode(if mode == "file" {
        InputMode::File
    } else {
        InputMode::Text
    });

    form.submit(state.backend.as_ref()).await;
    render_page(&form, &mode, None)
}

/// Compose the page from the form's state: form on top, then the loading,
/// error, or results panel.
fn render_page(form: &FormController, mode: &str, extra_error: Option<&ApiError>) -> Html<String> {
    let mut content = templates::analyze_form(form.text(), mode);

    if let Some(error) = extra_error {
        content.push('\n');
        content.push_str(&templates::error_panel(error));
    } else {
        match form.state() {
            SubmissionState::Succeeded(result) => {
                content.push('\n');
                content.push_str(&templates::results_panel(result));
            }
            SubmissionState::Failed(error) => {
                content.push('\n');
                content.push_str(&templates::error_panel(error));
            }
            SubmissionState::Idle | SubmissionState::Submitting => {}
        }
    }

    Html(templates::base_template(&content))
}
