//! HTML templates for the web interface.
//!
//! String-built templates: a page shell with inline styles and the small
//! amount of script the page needs (input-mode toggle, submit-state wiring,
//! copy-to-clipboard with a 2-second confirmation).

use crate::client::ApiError;
use crate::form::{MAX_TEXT_CHARS, MIN_TEXT_CHARS};
use crate::models::AnalysisResult;
use crate::utils::html_escape;

const STYLES: &str = r#"
    body { font-family: system-ui, sans-serif; background: #eef2f9; margin: 0; color: #1a202c; }
    main { max-width: 860px; margin: 0 auto; padding: 2rem 1rem; }
    h1 { text-align: center; margin-bottom: 0.25rem; }
    .tagline { text-align: center; color: #4a5568; margin-bottom: 2rem; }
    .card { background: #fff; border: 1px solid #e2e8f0; border-radius: 8px; padding: 1.5rem; margin-bottom: 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
    .mode-toggle button { padding: 0.5rem 1rem; border: 1px solid #cbd5e0; background: #f7fafc; cursor: pointer; }
    .mode-toggle button.active { background: #3182ce; color: #fff; border-color: #3182ce; }
    textarea { width: 100%; min-height: 12rem; margin-top: 1rem; padding: 0.75rem; border: 1px solid #cbd5e0; border-radius: 6px; font: inherit; box-sizing: border-box; }
    .submit-row { text-align: center; margin-top: 1rem; }
    button[type=submit] { padding: 0.75rem 2rem; background: #3182ce; color: #fff; border: 0; border-radius: 6px; font-weight: 600; cursor: pointer; }
    button[type=submit]:disabled { background: #a0aec0; cursor: not-allowed; }
    .error-panel { background: #fff5f5; border: 1px solid #feb2b2; border-radius: 6px; padding: 1rem; color: #c53030; }
    .section-header { display: flex; justify-content: space-between; align-items: center; border-bottom: 1px solid #e2e8f0; padding-bottom: 0.5rem; margin-bottom: 0.75rem; }
    .count { color: #718096; font-weight: 400; font-size: 0.9rem; }
    .chips { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .chip { padding: 0.2rem 0.75rem; border-radius: 999px; background: #f0fff4; border: 1px solid #c6f6d5; color: #276749; font-size: 0.9rem; }
    .placeholder { color: #718096; font-style: italic; }
    .summary-text { white-space: pre-wrap; line-height: 1.6; }
    .copy-btn { padding: 0.25rem 0.75rem; border: 1px solid #cbd5e0; border-radius: 6px; background: #f7fafc; cursor: pointer; font-size: 0.85rem; }
    .spinner { display: none; text-align: center; color: #4a5568; margin-top: 1rem; }
    #file-section { margin-top: 1rem; }
"#;

const SCRIPT: &str = r#"
    function setMode(mode) {
        document.getElementById('mode-field').value = mode;
        document.getElementById('text-section').style.display = mode === 'text' ? '' : 'none';
        document.getElementById('file-section').style.display = mode === 'file' ? '' : 'none';
        document.getElementById('mode-text').classList.toggle('active', mode === 'text');
        document.getElementById('mode-file').classList.toggle('active', mode === 'file');
    }

    document.getElementById('analyze-form').addEventListener('submit', function () {
        var btn = document.getElementById('submit-btn');
        btn.disabled = true;
        btn.textContent = 'Analyzing...';
        document.getElementById('spinner').style.display = 'block';
    });

    document.querySelectorAll('.copy-btn').forEach(function (btn) {
        btn.addEventListener('click', async function () {
            try {
                await navigator.clipboard.writeText(btn.dataset.copy);
                btn.textContent = 'Copied!';
                setTimeout(function () { btn.textContent = 'Copy'; }, 2000);
            } catch (err) {
                // Best-effort affordance; never surfaced to the user.
                console.error('Failed to copy text: ', err);
            }
        });
    });
"#;

/// Base HTML page shell.
pub fn base_template(content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>articlens - News Article Analyzer</title>
    <style>{STYLES}</style>
</head>
<body>
    <main>
        <h1>News Article Analyzer</h1>
        <p class="tagline">Submit a news article to get an AI-powered summary and
        extracted countries, nationalities, people, and organizations.</p>
{content}
    </main>
    <script>{SCRIPT}</script>
</body>
</html>"#
    )
}

/// The submission form. `text` re-populates the textarea so "try again"
/// replays the last text submission; file inputs cannot be re-populated by
/// the browser and must be reselected.
pub fn analyze_form(text: &str, mode: &str) -> String {
    let (text_active, file_active, text_display, file_display) = if mode == "file" {
        ("", " class=\"active\"", " style=\"display:none\"", "")
    } else {
        (" class=\"active\"", "", "", " style=\"display:none\"")
    };

    format!(
        r#"        <div class="card">
            <div class="mode-toggle">
                <button type="button" id="mode-text"{text_active} onclick="setMode('text')">Text Input</button>
                <button type="button" id="mode-file"{file_active} onclick="setMode('file')">File Upload</button>
            </div>
            <form id="analyze-form" method="post" action="/analyze" enctype="multipart/form-data">
                <input type="hidden" id="mode-field" name="mode" value="{mode}">
                <div id="text-section"{text_display}>
                    <textarea name="text" maxlength="{MAX_TEXT_CHARS}"
                        placeholder="Paste your news article text here (at least {MIN_TEXT_CHARS} characters)...">{text}</textarea>
                </div>
                <div id="file-section"{file_display}>
                    <input type="file" name="file">
                </div>
                <div class="submit-row">
                    <button type="submit" id="submit-btn">Analyze Article</button>
                </div>
                <div class="spinner" id="spinner">Analyzing your article&hellip;</div>
            </form>
        </div>"#,
        mode = html_escape(mode),
        text = html_escape(text),
    )
}

/// Error panel with a retry action that re-submits the form.
pub fn error_panel(error: &ApiError) -> String {
    let status = match error.status() {
        Some(code) => format!(" (HTTP {code})"),
        None => String::new(),
    };
    format!(
        r#"        <div class="card error-panel">
            <strong>Analysis failed.</strong> {message}{status}
            <div class="submit-row">
                <button type="submit" form="analyze-form">Try again</button>
            </div>
        </div>"#,
        message = html_escape(&error.to_string()),
    )
}

/// Results panel: summary section plus one chip group per entity category,
/// each with a count and a copy-to-clipboard button.
pub fn results_panel(result: &AnalysisResult) -> String {
    let summary_body = if result.summary.is_empty() {
        r#"<p class="placeholder">No summary generated</p>"#.to_string()
    } else {
        format!(
            r#"<p class="summary-text">{}</p>"#,
            html_escape(&result.summary)
        )
    };

    let mut out = format!(
        r#"        <div class="card">
            <div class="section-header">
                <h3>Article Summary</h3>
                <button type="button" class="copy-btn" data-copy="{copy}">Copy</button>
            </div>
            {summary_body}
        </div>"#,
        copy = html_escape(&result.summary),
    );

    for (label, items) in result.entities.categories() {
        out.push('\n');
        out.push_str(&entity_section(label, items));
    }

    out
}

fn entity_section(label: &str, items: &[String]) -> String {
    let body = if items.is_empty() {
        r#"<p class="placeholder">none detected</p>"#.to_string()
    } else {
        let chips: Vec<String> = items
            .iter()
            .map(|item| format!(r#"<span class="chip">{}</span>"#, html_escape(item)))
            .collect();
        format!(r#"<div class="chips">{}</div>"#, chips.join(""))
    };

    format!(
        r#"        <div class="card">
            <div class="section-header">
                <h3>{label} <span class="count">({count} found)</span></h3>
                <button type="button" class="copy-btn" data-copy="{copy}">Copy</button>
            </div>
            {body}
        </div>"#,
        label = html_escape(label),
        count = items.len(),
        copy = html_escape(&items.join(", ")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeopoliticalEntities;

    #[test]
    fn test_form_escapes_text() {
        let html = analyze_form("<script>alert(1)</script>", "text");
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_results_panel_chips_and_placeholders() {
        let result = AnalysisResult {
            summary: "S".into(),
            entities: GeopoliticalEntities {
                nationalities: vec!["French".into()],
                ..Default::default()
            },
        };
        let html = results_panel(&result);
        assert!(html.contains(r#"<span class="chip">French</span>"#));
        assert!(html.contains("(1 found)"));
        assert!(html.contains("(0 found)"));
        assert!(html.contains("none detected"));
    }

    #[test]
    fn test_results_panel_empty_summary() {
        let html = results_panel(&AnalysisResult::default());
        assert!(html.contains("No summary generated"));
    }

    #[test]
    fn test_error_panel_includes_status() {
        let html = error_panel(&ApiError::transport("model unavailable", Some(500)));
        assert!(html.contains("model unavailable"));
        assert!(html.contains("HTTP 500"));
        assert!(html.contains("Try again"));
    }
}
