//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// noughts - shared tic-tac-toe over a polling HTTP API
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe served over HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the game server
    Serve {
        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Skip probing for a reachable network address
        #[arg(long)]
        no_discovery: bool,
    },

    /// Join a running server from the terminal
    Play {
        /// Game server URL
        #[arg(long, default_value = "http://localhost:4440")]
        server_url: String,

        /// Polling interval in milliseconds
        #[arg(long, default_value = "500")]
        poll_ms: u64,
    },
}
