// --- File: crates/kickndji_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for Kickndji errors outside the request path.
///
/// Crate-specific errors convert into this through `From` impls in their own
/// crate, so the binary can propagate startup failures with `?`.
#[derive(Error, Debug)]
pub enum KickndjiError {
    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// Implemented by every error type that can reach an HTTP boundary.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

// Common error conversions
impl From<std::io::Error> for KickndjiError {
    fn from(err: std::io::Error) -> Self {
        KickndjiError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> KickndjiError {
    KickndjiError::ConfigError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> KickndjiError {
    KickndjiError::InternalError(message.to_string())
}
