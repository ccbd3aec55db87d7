// --- File: crates/kickndji_checkout/src/logic.rs ---
use kickndji_common::{
    CheckoutLineItem, CheckoutMode, CheckoutSession, CheckoutSessionRequest, PaymentGateway,
};
use kickndji_config::CheckoutConfig;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::info;
use uuid::Uuid;

use crate::error::{CheckoutError, INVALID_HOURS_MESSAGE, REQUIRED_FIELDS_MESSAGE};
use crate::models::{BookingPayload, BookingRequest, Quote, Role};

/// Name of the rented product; the role label is appended.
pub const PRODUCT_NAME: &str = "DJI OSMO Pocket 3";

/// Stripe rejects longer `client_reference_id` values.
pub const MAX_CLIENT_REFERENCE_LEN: usize = 200;

const REFERENCE_SEPARATOR: &str = "|";

/// Resolved, immutable settings for building checkout sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSettings {
    pub site_url: String,
    pub currency: String,
    pub payment_method_types: Vec<String>,
}

impl CheckoutSettings {
    pub fn from_config(config: &CheckoutConfig) -> Self {
        Self {
            site_url: config.resolved_site_url(),
            currency: config.currency.to_lowercase(),
            payment_method_types: config.payment_method_types.clone(),
        }
    }

    /// `{CHECKOUT_SESSION_ID}` is filled in by Stripe on redirect.
    pub fn success_url(&self) -> String {
        format!("{}?success=true&session_id={{CHECKOUT_SESSION_ID}}", self.site_url)
    }

    pub fn cancel_url(&self) -> String {
        format!("{}?cancelled=true", self.site_url)
    }
}

// --- Validation ---

enum HoursInput {
    Missing,
    Invalid,
    Valid(u32),
}

/// Falsy values (absent, null, false, 0, "") count as missing.
fn classify_hours(value: Option<&Value>) -> HoursInput {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => HoursInput::Missing,
        Some(Value::Number(n)) => {
            if n.as_f64() == Some(0.0) {
                HoursInput::Missing
            } else if let Some(hours) = n.as_u64() {
                u32::try_from(hours).map_or(HoursInput::Invalid, HoursInput::Valid)
            } else {
                match n.as_f64() {
                    // whole numbers written as `2.0`
                    Some(f) if f > 0.0 && f.fract() == 0.0 && f <= f64::from(u32::MAX) => {
                        HoursInput::Valid(f as u32)
                    }
                    _ => HoursInput::Invalid,
                }
            }
        }
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                HoursInput::Missing
            } else {
                match s.parse::<u32>() {
                    Ok(hours) if hours > 0 => HoursInput::Valid(hours),
                    _ => HoursInput::Invalid,
                }
            }
        }
        Some(_) => HoursInput::Invalid,
    }
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Checks the submitted form and turns it into a [`BookingRequest`].
///
/// All required fields are checked before `hours` is interpreted, so a form
/// with a missing field always gets the "required fields" message.
pub fn validate_booking(payload: BookingPayload) -> Result<BookingRequest, CheckoutError> {
    let hours = classify_hours(payload.hours.as_ref());

    // Priced on the exact submitted value; only presence is checked trimmed
    let role = payload.role.filter(|role| !role.trim().is_empty());

    let (Some(name), Some(email), Some(role), Some(date), Some(start_time)) = (
        required(payload.name),
        required(payload.email),
        role,
        required(payload.date),
        required(payload.start_time),
    ) else {
        return Err(CheckoutError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    };

    let hours = match hours {
        HoursInput::Missing => {
            return Err(CheckoutError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))
        }
        HoursInput::Invalid => {
            return Err(CheckoutError::Validation(INVALID_HOURS_MESSAGE.to_string()))
        }
        HoursInput::Valid(hours) => hours,
    };

    Ok(BookingRequest {
        name,
        email,
        phone: required(payload.phone),
        role,
        date,
        start_time,
        hours,
    })
}

/// Parses a raw request body into a validated booking.
///
/// The body must be a JSON object; arrays would otherwise be accepted as
/// positional fields by the derived `Deserialize`.
pub fn parse_booking(body: &[u8]) -> Result<BookingRequest, CheckoutError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| CheckoutError::MalformedRequest(e.to_string()))?;
    if !value.is_object() {
        return Err(CheckoutError::MalformedRequest(
            "booking body is not a JSON object".to_string(),
        ));
    }
    let payload: BookingPayload = serde_json::from_value(value)
        .map_err(|e| CheckoutError::MalformedRequest(e.to_string()))?;
    validate_booking(payload)
}

// --- Client reference ---

fn escape_reference_part(part: &str) -> String {
    part.replace('%', "%25").replace(REFERENCE_SEPARATOR, "%7C")
}

#[cfg(test)]
fn unescape_reference_part(part: &str) -> String {
    let mut out = String::with_capacity(part.len());
    let mut rest = part;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if tail.starts_with("%25") {
            out.push('%');
            rest = &tail[3..];
        } else if tail.starts_with("%7C") {
            out.push_str(REFERENCE_SEPARATOR);
            rest = &tail[3..];
        } else {
            out.push('%');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Builds the reference that ties a checkout session back to the booking.
///
/// `name|role|date|startTime|<hours>h|phone`, each part escaped so a `|`
/// inside a field cannot shift the others. References over
/// [`MAX_CLIENT_REFERENCE_LEN`] are replaced by an opaque `booking_<uuid>`.
pub fn client_reference(booking: &BookingRequest) -> String {
    let hours = format!("{}h", booking.hours);
    let parts = [
        booking.name.as_str(),
        booking.role.as_str(),
        booking.date.as_str(),
        booking.start_time.as_str(),
        hours.as_str(),
        booking.phone.as_deref().unwrap_or(""),
    ];
    let reference = parts
        .iter()
        .map(|part| escape_reference_part(part))
        .collect::<Vec<_>>()
        .join(REFERENCE_SEPARATOR);

    if reference.chars().count() > MAX_CLIENT_REFERENCE_LEN {
        let opaque = format!("booking_{}", Uuid::new_v4().simple());
        info!(
            "[Checkout] Client reference too long ({} chars), using {}",
            reference.chars().count(),
            opaque
        );
        opaque
    } else {
        reference
    }
}

/// Splits a reference built by [`client_reference`] back into its six parts.
#[cfg(test)]
pub(crate) fn parse_client_reference(reference: &str) -> Option<Vec<String>> {
    let parts: Vec<String> = reference
        .split(REFERENCE_SEPARATOR)
        .map(unescape_reference_part)
        .collect();
    (parts.len() == 6).then_some(parts)
}

// --- Session request ---

/// Key/value bag stored on the checkout session.
pub fn booking_metadata(booking: &BookingRequest, quote: &Quote) -> BTreeMap<String, String> {
    let mut metadata = BTreeMap::new();
    metadata.insert("naam".to_string(), booking.name.clone());
    metadata.insert("email".to_string(), booking.email.clone());
    metadata.insert(
        "telefoon".to_string(),
        booking.phone.clone().unwrap_or_default(),
    );
    metadata.insert("rol".to_string(), booking.role.clone());
    metadata.insert("datum".to_string(), booking.date.clone());
    metadata.insert("starttijd".to_string(), booking.start_time.clone());
    metadata.insert("aantal_uur".to_string(), booking.hours.to_string());
    metadata.insert("totaalbedrag".to_string(), quote.total_display());
    metadata
}

/// Assembles the provider request for one booking.
pub fn build_session_request(
    booking: &BookingRequest,
    quote: &Quote,
    settings: &CheckoutSettings,
) -> CheckoutSessionRequest {
    let role_label = booking.role_kind().label();

    CheckoutSessionRequest {
        payment_method_types: settings.payment_method_types.clone(),
        mode: CheckoutMode::Payment,
        customer_email: Some(booking.email.clone()),
        client_reference_id: Some(client_reference(booking)),
        metadata: booking_metadata(booking, quote),
        line_items: vec![CheckoutLineItem {
            currency: settings.currency.clone(),
            unit_amount: quote.unit_amount,
            product_name: format!("{} — {}", PRODUCT_NAME, role_label),
            description: Some(format!(
                "Verhuur {} uur op {} vanaf {}",
                booking.hours, booking.date, booking.start_time
            )),
            quantity: quote.quantity,
        }],
        success_url: settings.success_url(),
        cancel_url: settings.cancel_url(),
    }
}

// --- Core Logic Function ---

/// Prices the booking and asks the gateway for a checkout session.
pub async fn create_checkout(
    gateway: &dyn PaymentGateway,
    settings: &CheckoutSettings,
    booking: &BookingRequest,
) -> Result<CheckoutSession, CheckoutError> {
    let role: Role = booking.role_kind();
    let quote = Quote::new(role, booking.hours);

    info!(
        "[Checkout] Creating checkout session: role={}, hours={}, total={} cents",
        role.label(),
        booking.hours,
        quote.total
    );

    let request = build_session_request(booking, &quote, settings);
    let session = gateway.create_session(request).await?;

    info!("[Checkout] Checkout session {} created", session.id);
    Ok(session)
}
