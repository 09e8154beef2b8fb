//! HTTP request surface.
//!
//! `GET /api/insight?system=tropical|sidereal&debug=true|false` returns the
//! daily summary, optionally embellished by a narrative generator.
//! `GET /health` answers `ok`.

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError};
pub use routes::{AppState, InsightQuery, InsightResponse, router};

use std::sync::Arc;

use gochara_core::SnapshotProvider;
use gochara_narrative::NarrativeGenerator;
use tokio::net::TcpListener;
use tracing::info;

/// Bind and serve until the process is stopped.
pub async fn run_server<P, G>(
    config: ServerConfig,
    provider: P,
    narrator: Option<G>,
) -> Result<(), ServerError>
where
    P: SnapshotProvider + 'static,
    G: NarrativeGenerator + 'static,
{
    config.validate()?;
    let addr = config.socket_addr();
    let state = Arc::new(AppState::new(provider, narrator, &config));
    if state.narrator.is_none() {
        info!("no narrative credential; responses carry the summary only");
    }

    let listener = TcpListener::bind(addr).await?;
    info!("gochara server ready at http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
