//! Terminal presentation for analysis results and errors.
//!
//! Pure functions of the data: no network calls, no validation, no state.
//! The summary is printed verbatim, preserving whitespace and newlines.

use console::style;

use crate::client::ApiError;
use crate::models::AnalysisResult;

/// Render a full analysis result: summary section plus one labeled group
/// per entity category.
pub fn render_result(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", style("Article Summary").bold()));
    out.push_str(&format!("{}\n", "-".repeat(50)));
    if result.summary.is_empty() {
        out.push_str(&format!("{}\n", style("No summary generated").dim().italic()));
    } else {
        out.push_str(&format!("{}\n", result.summary));
    }

    for (label, items) in result.entities.categories() {
        out.push('\n');
        out.push_str(&render_entity_group(label, items));
    }

    out
}

/// Render one entity category as a labeled, counted group of chips.
/// An empty category gets an explicit placeholder, never a bare heading.
pub fn render_entity_group(label: &str, items: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        style(label).bold().cyan(),
        style(format!("({} found)", items.len())).dim()
    ));

    if items.is_empty() {
        out.push_str(&format!("  {}\n", style("none detected").dim().italic()));
    } else {
        let chips: Vec<String> = items
            .iter()
            .map(|item| format!("[{}]", style(item).green()))
            .collect();
        out.push_str(&format!("  {}\n", chips.join(" ")));
    }

    out
}

/// Render an error panel. The message is surfaced verbatim; a status code is
/// appended when the failure came with an HTTP response.
pub fn render_error(error: &ApiError) -> String {
    let status = match error.status() {
        Some(code) => format!(" (HTTP {code})"),
        None => String::new(),
    };
    format!(
        "{} {}{}\n  {}\n",
        style("✗").red(),
        error,
        style(status).dim(),
        style("Re-run the command to try again.").dim()
    )
}
