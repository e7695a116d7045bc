//! CLI parser and command dispatch.

mod analyze;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Settings, API_BASE_URL_ENV};

#[derive(Parser)]
#[command(name = "articlens")]
#[command(about = "Front end for AI-powered news article analysis")]
#[command(version)]
pub struct Cli {
    /// Analysis backend base URL
    #[arg(long, global = true, env = API_BASE_URL_ENV)]
    api_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Submit an article for analysis and print the result
    Analyze {
        /// Article text (omit to use --file or --stdin)
        text: Option<String>,

        /// Read the article from a file and upload it
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Read the article text from standard input
        #[arg(long, conflicts_with_all = ["text", "file"])]
        stdin: bool,
    },

    /// Serve the web interface
    Serve {
        /// Host to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(short, long, default_value = "3030")]
        port: u16,
    },
}

/// Parse arguments and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.api_url {
        Some(url) => Settings::with_base_url(url)?,
        None => Settings::from_env()?,
    };

    match cli.command {
        Commands::Analyze { text, file, stdin } => {
            analyze::cmd_analyze(&settings, text, file, stdin).await
        }
        Commands::Serve { host, port } => serve::cmd_serve(&settings, &host, port).await,
    }
}
