//! noughts - unified CLI
//!
//! Runs the game server or the terminal client.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts_server::{PollingClient, ServerConfig, play, serve};
use std::time::Duration;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            no_discovery,
        } => run_server(config, host, port, no_discovery).await,
        Command::Play {
            server_url,
            poll_ms,
        } => run_client(server_url, poll_ms).await,
    }
}

/// Run the game server
async fn run_server(
    config: Option<std::path::PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    no_discovery: bool,
) -> Result<()> {
    initialize_tracing("info,noughts_server=debug,noughts_core=debug");
    let config = ServerConfig::load(config.as_deref())?.with_overrides(host, port, no_discovery);
    info!(?config, "Starting noughts server");
    serve(config).await
}

/// Run the terminal client
async fn run_client(server_url: String, poll_ms: u64) -> Result<()> {
    initialize_tracing("warn");
    let client = PollingClient::new(server_url);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let outcome = play::run(&client, Duration::from_millis(poll_ms), stdin, &mut stdout).await?;
    info!(%outcome, "Game finished");
    Ok(())
}

fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
