// --- File: crates/kickndji_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{config_error, internal_error, HttpStatusCode, KickndjiError};

// Re-export HTTP utilities for easier access
pub use http::{
    client::create_client,
    json_response, text_response,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};

pub use services::{
    BoxFuture, CheckoutLineItem, CheckoutMode, CheckoutSession, CheckoutSessionRequest,
    GatewayError, PaymentGateway,
};
