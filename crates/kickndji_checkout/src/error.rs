// --- File: crates/kickndji_checkout/src/error.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use kickndji_common::{json_response, text_response, GatewayError, HttpStatusCode};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Shown when a required booking field is missing.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Alle verplichte velden moeten ingevuld zijn.";
/// Shown when `hours` is present but not a positive whole number.
pub const INVALID_HOURS_MESSAGE: &str = "Aantal uur moet een positief geheel getal zijn.";
/// Shown when the body is not a JSON booking object.
pub const MALFORMED_REQUEST_MESSAGE: &str = "Ongeldige aanvraag.";
/// Shown when the payment provider did not answer in time.
pub const GATEWAY_TIMEOUT_MESSAGE: &str =
    "De betaalprovider reageert niet. Probeer het later opnieuw.";
/// Shown for any other failure while creating the payment.
pub const GATEWAY_FAILURE_MESSAGE: &str = "Er is iets misgegaan bij het aanmaken van de betaling.";

const METHOD_NOT_ALLOWED_BODY: &str = "Method Not Allowed";

/// Everything that can end a checkout request early.
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Anything but POST
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// The booking is incomplete or inconsistent; the message is user-facing
    #[error("{0}")]
    Validation(String),

    /// The body could not be read as a booking
    #[error("malformed request body: {0}")]
    MalformedRequest(String),

    /// The payment provider call failed
    #[error("payment gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

impl CheckoutError {
    /// The message the caller gets to see.
    ///
    /// Provider rejections pass the provider's text through (it tells the
    /// buyer what went wrong); other gateway failures stay generic.
    pub fn public_message(&self) -> String {
        match self {
            CheckoutError::MethodNotAllowed => METHOD_NOT_ALLOWED_BODY.to_string(),
            CheckoutError::Validation(message) => message.clone(),
            CheckoutError::MalformedRequest(_) => MALFORMED_REQUEST_MESSAGE.to_string(),
            CheckoutError::Gateway(GatewayError::Rejected { message, .. }) => message.clone(),
            CheckoutError::Gateway(GatewayError::Timeout) => GATEWAY_TIMEOUT_MESSAGE.to_string(),
            CheckoutError::Gateway(_) => GATEWAY_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl HttpStatusCode for CheckoutError {
    fn status_code(&self) -> u16 {
        match self {
            CheckoutError::MethodNotAllowed => 405,
            CheckoutError::Validation(_) => 400,
            CheckoutError::MalformedRequest(_) => 400,
            CheckoutError::Gateway(err) => err.status_code(),
        }
    }
}

impl IntoResponse for CheckoutError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self {
            CheckoutError::MethodNotAllowed => text_response(status, METHOD_NOT_ALLOWED_BODY),
            other => json_response(
                status,
                &ErrorResponse {
                    error: other.public_message(),
                },
            ),
        }
    }
}
