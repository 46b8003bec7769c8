//! Error types for the CoLA interaction layer

use thiserror::Error;

/// Main error type for CoLA page interactions
#[derive(Error, Debug)]
pub enum ColaError {
    /// Durable key-value storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Site configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Date string was not an ISO date or RFC 3339 timestamp
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Result type alias using ColaError
pub type ColaResult<T> = Result<T, ColaError>;
