// --- File: crates/kickndji_checkout/src/lib.rs ---

pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod models;
pub mod routes;

// Re-export for main backend
pub use error::CheckoutError;
pub use handlers::CheckoutState;
pub use logic::CheckoutSettings;
pub use models::{BookingPayload, BookingRequest, CreateCheckoutResponse, Quote, Role};
pub use routes::routes;
