//! Article analysis command.

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::client::HttpAnalysisClient;
use crate::config::Settings;
use crate::form::{FormController, InputMode, SubmissionState};
use crate::render;

/// Submit an article (text, file, or stdin) and print the analysis.
pub async fn cmd_analyze(
    settings: &Settings,
    text: Option<String>,
    file: Option<PathBuf>,
    stdin: bool,
) -> anyhow::Result<()> {
    let client = HttpAnalysisClient::new(settings);
    let mut form = FormController::new();

    if let Some(path) = file {
        let bytes = std::fs::read(&path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        form.set_mode(InputMode::File);
        form.select_file(filename, bytes);
    } else {
        let input = match text {
            Some(text) => text,
            None if stdin => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
            None => anyhow::bail!("provide article text, --file, or --stdin"),
        };
        form.set_mode(InputMode::Text);
        form.set_text(&input);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("Analyzing your article...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    form.submit(&client).await;

    spinner.finish_and_clear();

    match form.state() {
        SubmissionState::Succeeded(result) => {
            print!("{}", render::render_result(result));
            println!(
                "\n{} {} entities extracted",
                style("✓").green(),
                result.entities.total()
            );
            Ok(())
        }
        SubmissionState::Failed(error) => {
            eprint!("{}", render::render_error(error));
            Err(anyhow::anyhow!("analysis failed"))
        }
        // submit() always leaves the form in a terminal state.
        SubmissionState::Idle | SubmissionState::Submitting => {
            Err(anyhow::anyhow!("analysis did not complete"))
        }
    }
}
