//! Error types for swatch-core

use thiserror::Error;

/// Result type alias using swatch-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in swatch-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Remote listing failed (startup fetch)
    #[error("Remote list error: {0}")]
    RemoteList(String),

    /// Remote write failed (per-entry sync call)
    #[error("Remote write error: {0}")]
    RemoteWrite(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
