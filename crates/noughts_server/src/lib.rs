//! Polling HTTP server and terminal client for a shared tic-tac-toe game.
//!
//! # Architecture
//!
//! - **Routes**: the `GET`-only polling API over one [`noughts_core::SharedSession`]
//! - **Config**: defaults, TOML file and command-line overrides
//! - **Discovery**: best-effort logging of a reachable network address
//! - **Client**: [`PollingClient`] and the terminal [`play`] loop
//!
//! # Example
//!
//! ```no_run
//! use noughts_server::{ServerConfig, serve};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::default().with_overrides(None, Some(4440), true);
//! serve(config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod config;
pub mod discovery;
mod page;
pub mod play;
mod routes;
mod server;
pub mod wire;

pub use client::{ClientError, MoveReply, PollingClient};
pub use config::{ConfigError, ServerConfig};
pub use page::{DEFAULT_PAGE, Page};
pub use routes::{AppState, Rejected, router};
pub use server::serve;
