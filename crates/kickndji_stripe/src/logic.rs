// --- File: crates/kickndji_stripe/src/logic.rs ---
use kickndji_common::{CheckoutSession, CheckoutSessionRequest};
use kickndji_config::Secret;
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info};

use crate::error::StripeError;

/// Path of the Checkout Sessions endpoint, relative to the API base.
pub const CHECKOUT_SESSIONS_PATH: &str = "/v1/checkout/sessions";

// Response FROM Stripe API when creating a session
#[derive(Deserialize, Debug)]
struct StripeCheckoutSessionApiResponse {
    pub id: String,
    pub url: Option<String>,
}

/// Flattens a session request into Stripe's bracketed form encoding.
///
/// Nested values become keys like `line_items[0][price_data][unit_amount]`;
/// lists are indexed explicitly.
pub fn build_form_body(request: &CheckoutSessionRequest) -> Vec<(String, String)> {
    let mut form_body: Vec<(String, String)> = Vec::new();

    for (i, method) in request.payment_method_types.iter().enumerate() {
        form_body.push((format!("payment_method_types[{}]", i), method.clone()));
    }
    form_body.push(("mode".to_string(), request.mode.as_str().to_string()));

    if let Some(email) = &request.customer_email {
        form_body.push(("customer_email".to_string(), email.clone()));
    }
    if let Some(client_ref_id) = &request.client_reference_id {
        form_body.push(("client_reference_id".to_string(), client_ref_id.clone()));
    }

    for (key, value) in &request.metadata {
        form_body.push((format!("metadata[{}]", key), value.clone()));
    }

    for (i, item) in request.line_items.iter().enumerate() {
        let price_data = format!("line_items[{}][price_data]", i);
        form_body.push((format!("{}[currency]", price_data), item.currency.clone()));
        form_body.push((
            format!("{}[unit_amount]", price_data),
            item.unit_amount.to_string(),
        ));
        form_body.push((
            format!("{}[product_data][name]", price_data),
            item.product_name.clone(),
        ));
        if let Some(description) = &item.description {
            form_body.push((
                format!("{}[product_data][description]", price_data),
                description.clone(),
            ));
        }
        form_body.push((
            format!("line_items[{}][quantity]", i),
            item.quantity.to_string(),
        ));
    }

    form_body.push(("success_url".to_string(), request.success_url.clone()));
    form_body.push(("cancel_url".to_string(), request.cancel_url.clone()));

    form_body
}

/// Pulls `error.message` out of a Stripe error body, falling back to the raw text.
pub fn extract_error_message(body_text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body_text) {
        Ok(json_body) => json_body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .unwrap_or(body_text)
            .to_string(),
        Err(_) => body_text.to_string(),
    }
}

/// Creates a Stripe Checkout Session.
pub async fn create_checkout_session(
    client: &Client,
    api_base: &str,
    secret_key: &Secret,
    request: &CheckoutSessionRequest,
) -> Result<CheckoutSession, StripeError> {
    let api_url = format!("{}{}", api_base.trim_end_matches('/'), CHECKOUT_SESSIONS_PATH);
    let form_body = build_form_body(request);

    info!("[Stripe Logic] Sending request to Stripe API: {}", api_url);

    let response = client
        .post(&api_url)
        .basic_auth(secret_key.expose(), None::<&str>)
        .form(&form_body)
        .send()
        .await
        .map_err(StripeError::from_reqwest)?;

    let status = response.status();
    let body_text = response.text().await.map_err(StripeError::from_reqwest)?;

    info!("[Stripe Logic] Stripe API response status: {}", status);

    if status.is_success() {
        let stripe_response: StripeCheckoutSessionApiResponse = serde_json::from_str(&body_text)?;
        match stripe_response.url {
            Some(url) => {
                info!(
                    "[Stripe Logic] Stripe Checkout Session {} created successfully.",
                    stripe_response.id
                );
                Ok(CheckoutSession {
                    id: stripe_response.id,
                    url,
                })
            }
            None => {
                error!(
                    "[Stripe Logic] Stripe response for session {} is missing the checkout URL",
                    stripe_response.id
                );
                Err(StripeError::InternalError(
                    "Stripe response missing checkout URL".to_string(),
                ))
            }
        }
    } else {
        let error_message = extract_error_message(&body_text);
        error!(
            "[Stripe Logic] Stripe API request failed with HTTP status: {}. Message: {}",
            status, error_message
        );
        Err(StripeError::ApiError {
            status_code: status.as_u16(),
            message: error_message,
        })
    }
}
