//! # brandrag-server
//!
//! The HTTP surface of the marketing-content generation backend: owner-scoped
//! CRUD for guidelines and campaign uploads, scrape endpoints, chunk search,
//! and the retrieval-augmented generation endpoint.

pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

use crate::config::AppConfig;
use crate::router::create_router;
use crate::state::build_app_state;
use tracing::info;

/// Builds the application state and serves the router on `listener` until
/// the process exits.
pub async fn run(listener: tokio::net::TcpListener, config: AppConfig) -> anyhow::Result<()> {
    let app_state = build_app_state(config).await?;
    let app = create_router(app_state);

    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
