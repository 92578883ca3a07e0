//! Error types for the Unity MCP Server.

use thiserror::Error;

/// Main error type for Unity MCP operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Could not reach the editor
    #[error("Connection error: {0}")]
    Connection(String),

    /// Editor did not answer in time
    #[error("Timed out after {0}ms waiting for the Unity editor")]
    Timeout(u64),

    /// Editor received the command but rejected it.
    ///
    /// Displays the editor's own text unchanged.
    #[error("{0}")]
    Editor(String),

    /// Malformed or unexpected response envelope
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input or parameters (generic)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with custom message
    #[error("{0}")]
    Other(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
