//! Web interface: a single page for submitting an article and viewing the
//! analysis, served locally and forwarding submissions to the remote backend.

mod handlers;
mod routes;
pub mod templates;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::client::{AnalysisBackend, HttpAnalysisClient};
use crate::config::Settings;

/// Shared state for the web server. The backend is injected so tests can
/// run the router against a fake transport.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn AnalysisBackend>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            backend: Arc::new(HttpAnalysisClient::new(settings)),
        }
    }

    pub fn with_backend(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self { backend }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
