//! HTTP client for the polling API.

use crate::wire;
use derive_more::{Display, Error};
use noughts_core::{Board, Mark, Outcome, Role};
use reqwest::StatusCode;
use tracing::{debug, error, instrument};

/// Server's answer to a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveReply {
    /// The mark was placed.
    Accepted,
    /// The server refused the move; carries its reason.
    Rejected(String),
}

/// Client for one game server.
#[derive(Debug, Clone)]
pub struct PollingClient {
    base_url: String,
    http: reqwest::Client,
}

impl PollingClient {
    /// Creates a client for the server at `base_url` (e.g. `http://localhost:4440`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Server this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        Ok(self.http.get(url).send().await?)
    }

    async fn get_code(&self, path: &str) -> Result<u8, ClientError> {
        let response = self.get(path).await?.error_for_status()?;
        let text = response.text().await?;
        text.trim()
            .parse()
            .map_err(|_| ClientError::new(format!("Unexpected reply from {}: {:?}", path, text)))
    }

    /// Claims the next free role.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn claim_role(&self) -> Result<Role, ClientError> {
        Ok(Role::from_code(self.get_code("/player").await?))
    }

    /// Fetches the board.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn board(&self) -> Result<Board, ClientError> {
        let codes: Vec<u8> = self.get("/json").await?.error_for_status()?.json().await?;
        wire::decode_board(&codes)
            .ok_or_else(|| ClientError::new(format!("Malformed board: {:?}", codes)))
    }

    /// Fetches the outcome.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn status(&self) -> Result<Outcome, ClientError> {
        let code = self.get_code("/status").await?;
        Outcome::from_code(code).ok_or_else(|| ClientError::new(format!("Unknown status code {}", code)))
    }

    /// Fetches the mark whose turn it is.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn turn(&self) -> Result<Mark, ClientError> {
        let code = self.get_code("/turn").await?;
        Mark::from_code(code).ok_or_else(|| ClientError::new(format!("Unknown turn code {}", code)))
    }

    /// Asks to place `role`'s mark at the 1-based `position`.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn place(&self, role: Role, position: u8) -> Result<MoveReply, ClientError> {
        let response = self.get(&format!("/place/{}/{}", role.code(), position)).await?;
        match response.status() {
            StatusCode::OK => Ok(MoveReply::Accepted),
            StatusCode::BAD_REQUEST => Ok(MoveReply::Rejected(response.text().await?)),
            other => Err(ClientError::new(format!("Unexpected status {} for move", other))),
        }
    }

    /// Resets the game and frees both roles.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn reset(&self) -> Result<(), ClientError> {
        self.get("/reset").await?.error_for_status()?;
        Ok(())
    }

    /// Asks the server to write the board to its log.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn print(&self) -> Result<(), ClientError> {
        self.get("/print").await?.error_for_status()?;
        Ok(())
    }
}

/// Client error.
#[derive(Debug, Clone, Display, Error)]
#[display("Client error: {} at {}:{}", message, file, line)]
pub struct ClientError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ClientError {
    /// Creates a new client error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        error!(error_message = %message, "Client error created");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("HTTP error: {}", err))
    }
}
