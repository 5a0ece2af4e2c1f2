//! Configuration management for the client.

use datagrid_engine::{RowCount, DEFAULT_PAGE_SIZE};
use std::env;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the paginated resource
    pub api_url: String,
    /// Rows requested per page
    pub page_size: RowCount,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var("GRID_API_URL").map_err(|_| ConfigError::MissingApiUrl)?;

        let page_size = match env::var("GRID_PAGE_SIZE") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPageSize)?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        Ok(Self { api_url, page_size })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GRID_API_URL environment variable is required")]
    MissingApiUrl,

    #[error("Invalid GRID_PAGE_SIZE value")]
    InvalidPageSize,
}
