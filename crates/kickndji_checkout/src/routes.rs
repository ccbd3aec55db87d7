// --- File: crates/kickndji_checkout/src/routes.rs ---

use crate::handlers::{create_checkout_handler, CheckoutState};
use crate::logic::CheckoutSettings;
use axum::{routing::any, Router};
use kickndji_common::PaymentGateway;
use kickndji_config::AppConfig;
use std::sync::Arc;

/// Path of the checkout endpoint, relative to where the router is nested.
pub const CREATE_CHECKOUT_PATH: &str = "/create-checkout";

/// Creates a router containing the checkout endpoint.
pub fn routes(config: &AppConfig, gateway: Arc<dyn PaymentGateway>) -> Router {
    let checkout_state = Arc::new(CheckoutState {
        gateway,
        settings: CheckoutSettings::from_config(&config.checkout),
    });

    Router::new()
        .route(CREATE_CHECKOUT_PATH, any(create_checkout_handler))
        .with_state(checkout_state)
}
