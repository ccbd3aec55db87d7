// --- File: crates/kickndji_checkout/src/handlers.rs ---
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use kickndji_common::{json_response, PaymentGateway};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::CheckoutError;
use crate::logic::{create_checkout, parse_booking, CheckoutSettings};
use crate::models::CreateCheckoutResponse;

// --- State for Checkout Handlers ---
#[derive(Clone)]
pub struct CheckoutState {
    pub gateway: Arc<dyn PaymentGateway>,
    pub settings: CheckoutSettings,
}

/// Axum handler turning a booking form into a checkout redirect URL.
///
/// Registered for every method so that non-POST requests get the same
/// 405 response (with CORS headers) instead of axum's default.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/create-checkout",
    request_body = crate::models::BookingPayload,
    responses(
        (status = 200, description = "Checkout session created", body = CreateCheckoutResponse),
        (status = 400, description = "Missing or invalid booking fields", body = crate::models::ErrorResponse),
        (status = 405, description = "Method Not Allowed", content_type = "text/plain"),
        (status = 500, description = "Payment provider error", body = crate::models::ErrorResponse),
        (status = 504, description = "Payment provider timed out", body = crate::models::ErrorResponse)
    ),
    tag = "Checkout"
))]
pub async fn create_checkout_handler(
    State(state): State<Arc<CheckoutState>>,
    method: Method,
    body: Bytes,
) -> Response {
    if method != Method::POST {
        info!("[Checkout] Rejected {} request", method);
        return CheckoutError::MethodNotAllowed.into_response();
    }

    let result = match parse_booking(&body) {
        Ok(booking) => create_checkout(state.gateway.as_ref(), &state.settings, &booking).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(session) => json_response(StatusCode::OK, &CreateCheckoutResponse { url: session.url }),
        Err(err) => {
            log_checkout_error(&err);
            err.into_response()
        }
    }
}

fn log_checkout_error(err: &CheckoutError) {
    match err {
        CheckoutError::MethodNotAllowed => {}
        CheckoutError::Validation(message) => {
            info!("[Checkout] Booking rejected: {}", message);
        }
        CheckoutError::MalformedRequest(detail) => {
            warn!("[Checkout] Malformed booking body: {}", detail);
        }
        CheckoutError::Gateway(gateway_err) => {
            error!(
                "[Checkout] Payment gateway error (retryable: {}): {:?}",
                gateway_err.is_retryable(),
                gateway_err
            );
        }
    }
}
