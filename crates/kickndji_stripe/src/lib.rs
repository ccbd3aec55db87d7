// --- File: crates/kickndji_stripe/src/lib.rs ---

pub mod error;
pub mod logic;
pub mod service;

pub use error::StripeError; // Re-export the error type
pub use service::StripeGateway; // Re-export the payment gateway
