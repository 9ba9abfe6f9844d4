//! Server startup.

use crate::config::ServerConfig;
use crate::discovery;
use crate::page::Page;
use crate::routes::{self, AppState};
use anyhow::Result;
use noughts_core::SharedSession;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, instrument};

/// Binds the configured address and serves the game until the process exits.
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: ServerConfig) -> Result<()> {
    let page = Page::load(config.page().as_deref())?;
    let state = AppState::new(SharedSession::new(), page);

    let listener = TcpListener::bind((config.host().as_str(), *config.port())).await?;
    let local = listener.local_addr()?;
    info!(%local, "Server ready");

    if *config.discovery() {
        discovery::announce(
            config.host().clone(),
            local.port(),
            Duration::from_millis(*config.probe_timeout_ms()),
        );
    }

    axum::serve(listener, routes::router(state)).await?;
    Ok(())
}
