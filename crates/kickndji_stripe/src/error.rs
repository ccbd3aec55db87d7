// --- File: crates/kickndji_stripe/src/error.rs ---
use kickndji_common::{config_error, internal_error, GatewayError, KickndjiError};
use thiserror::Error;

/// Stripe-specific error types.
#[derive(Error, Debug)]
pub enum StripeError {
    /// Error occurred during a Stripe API request
    #[error("Stripe API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Stripe did not answer within the configured timeout
    #[error("Stripe API request timed out")]
    Timeout,

    /// Error returned by the Stripe API
    #[error("Stripe API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error parsing Stripe API response
    #[error("Failed to parse Stripe API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete Stripe configuration
    #[error("Stripe configuration missing or incomplete: {0}")]
    ConfigError(String),

    /// Internal processing error
    #[error("Internal processing error: {0}")]
    InternalError(String),
}

impl StripeError {
    /// Classifies a reqwest failure, keeping timeouts apart from other transport errors.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            StripeError::Timeout
        } else {
            StripeError::RequestError(err)
        }
    }
}

/// Convert StripeError to the provider-neutral GatewayError
impl From<StripeError> for GatewayError {
    fn from(err: StripeError) -> Self {
        match err {
            StripeError::RequestError(e) => GatewayError::Transport(e.to_string()),
            StripeError::Timeout => GatewayError::Timeout,
            StripeError::ApiError {
                status_code,
                message,
            } => GatewayError::Rejected {
                status: status_code,
                message,
            },
            StripeError::ParseError(e) => GatewayError::InvalidResponse(e.to_string()),
            StripeError::ConfigError(msg) => GatewayError::Config(msg),
            StripeError::InternalError(msg) => GatewayError::InvalidResponse(msg),
        }
    }
}

/// Convert StripeError to KickndjiError.
///
/// Only gateway construction reaches this (missing key, client build failure).
impl From<StripeError> for KickndjiError {
    fn from(err: StripeError) -> Self {
        match err {
            StripeError::ConfigError(msg) => config_error(format!("Stripe: {}", msg)),
            other => internal_error(format!("Stripe: {}", other)),
        }
    }
}
