//! The client page served at `/`.

use crate::config::ConfigError;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

/// Built-in browser client.
pub const DEFAULT_PAGE: &str = include_str!("../static/index.html");

/// HTML served at `/`, read once at startup.
#[derive(Debug, Clone)]
pub struct Page {
    html: Arc<str>,
}

impl Page {
    /// Uses the file at `path` when given, otherwise the built-in page.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let html = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read page {}: {}", path.display(), e))
        })?;
        info!(bytes = html.len(), "Loaded custom page");
        Ok(Self { html: html.into() })
    }

    /// Page contents.
    pub fn html(&self) -> &str {
        &self.html
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            html: DEFAULT_PAGE.into(),
        }
    }
}
