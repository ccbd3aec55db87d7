// --- File: crates/kickndji_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! The checkout handler only talks to the payment provider through
//! [`PaymentGateway`], so it can be exercised in tests with an in-memory
//! implementation instead of the real provider.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

use crate::error::HttpStatusCode;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A trait for hosted-checkout payment providers.
pub trait PaymentGateway: Send + Sync {
    /// Create a checkout session and return where to send the buyer.
    fn create_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> BoxFuture<'_, CheckoutSession, GatewayError>;
}

/// Billing mode of a checkout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutMode {
    /// One-off payment.
    Payment,
}

impl CheckoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutMode::Payment => "payment",
        }
    }
}

/// One priced entry of a checkout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutLineItem {
    pub currency: String,
    /// Price per unit in minor currency units (cents).
    pub unit_amount: i64,
    pub product_name: String,
    pub description: Option<String>,
    pub quantity: u32,
}

/// Everything the provider needs to open a checkout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSessionRequest {
    pub payment_method_types: Vec<String>,
    pub mode: CheckoutMode,
    pub customer_email: Option<String>,
    pub client_reference_id: Option<String>,
    pub metadata: BTreeMap<String, String>,
    pub line_items: Vec<CheckoutLineItem>,
    pub success_url: String,
    pub cancel_url: String,
}

/// A created checkout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    /// Provider-hosted page the buyer is redirected to.
    pub url: String,
}

/// Failure of a [`PaymentGateway`] call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The provider answered and refused the request.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The provider did not answer in time.
    #[error("payment provider timed out")]
    Timeout,

    /// The provider could not be reached.
    #[error("payment provider unreachable: {0}")]
    Transport(String),

    /// The provider answered with something we could not use.
    #[error("invalid payment provider response: {0}")]
    InvalidResponse(String),

    /// The gateway is not configured (e.g. missing credentials).
    #[error("payment gateway misconfigured: {0}")]
    Config(String),
}

impl GatewayError {
    /// Whether retrying the same request later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatewayError::Timeout | GatewayError::Transport(_))
    }
}

impl HttpStatusCode for GatewayError {
    fn status_code(&self) -> u16 {
        match self {
            GatewayError::Timeout => 504,
            GatewayError::Rejected { .. }
            | GatewayError::Transport(_)
            | GatewayError::InvalidResponse(_)
            | GatewayError::Config(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(GatewayError::Timeout.is_retryable());
        assert!(GatewayError::Transport("connection reset".into()).is_retryable());
        assert!(!GatewayError::Config("no key".into()).is_retryable());
        assert!(!GatewayError::Rejected {
            status: 400,
            message: "bad".into()
        }
        .is_retryable());
    }

    #[test]
    fn test_rejection_displays_provider_message_only() {
        let err = GatewayError::Rejected {
            status: 402,
            message: "Your card was declined.".into(),
        };
        assert_eq!(err.to_string(), "Your card was declined.");
        assert_eq!(err.status_code(), 500);
        assert_eq!(GatewayError::Timeout.status_code(), 504);
    }

    #[test]
    fn test_mode_wire_name() {
        assert_eq!(CheckoutMode::Payment.as_str(), "payment");
    }
}
