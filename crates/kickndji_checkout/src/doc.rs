// --- File: crates/kickndji_checkout/src/doc.rs ---
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::models::{BookingPayload, CreateCheckoutResponse, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::create_checkout_handler),
    components(schemas(BookingPayload, CreateCheckoutResponse, ErrorResponse)),
    tags((name = "Checkout", description = "Camera rental checkout via Stripe"))
)]
pub struct CheckoutApiDoc;
