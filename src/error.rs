//! Error types for the form server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::PatternError;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// A field pattern does not compile
    #[error("{0}")]
    InvalidPattern(#[from] PatternError),
}

/// Errors that can occur while running the HTTP server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Failed to bind the listening socket
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    /// Other I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ServerError
pub type ServerResult<T> = Result<T, ServerError>;
