//! Web interface command.

use console::style;

use crate::config::Settings;

/// Start the web server.
pub async fn cmd_serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    println!(
        "{} Analysis backend: {}",
        style("→").cyan(),
        settings.api_base_url
    );
    println!(
        "{} Starting articlens at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings, host, port).await
}
