// --- File: crates/kickndji_checkout/src/models.rs ---
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- Data Structures ---

/// Booking form as posted by the front-end.
///
/// Every field is optional at this stage; presence is checked by
/// [`crate::logic::validate_booking`] so a missing field gives a
/// validation error rather than a parse error.
#[derive(Deserialize, Debug, Default, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookingPayload {
    #[cfg_attr(feature = "openapi", schema(example = "Jan"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "jan@example.nl"))]
    pub email: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "0612345678"))]
    pub phone: Option<String>,
    /// `docent` for instructors, anything else is billed as a student.
    #[cfg_attr(feature = "openapi", schema(example = "docent"))]
    pub role: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "2024-06-01"))]
    pub date: Option<String>,
    #[serde(rename = "startTime", alias = "start_time")]
    #[cfg_attr(feature = "openapi", schema(example = "10:00"))]
    pub start_time: Option<String>,
    /// Whole hours, as a number or a string of digits.
    #[cfg_attr(feature = "openapi", schema(value_type = Option<u32>, example = 2))]
    pub hours: Option<serde_json::Value>,
}

/// Who is renting; decides the hourly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Docent,
    Student,
}

impl Role {
    /// Only the exact value `docent` gets the instructor rate.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "docent" {
            Role::Docent
        } else {
            Role::Student
        }
    }

    /// Hourly price in cents.
    pub fn unit_amount(&self) -> i64 {
        match self {
            Role::Docent => 1000,
            Role::Student => 1500,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Docent => "Docent",
            Role::Student => "Leerling",
        }
    }
}

/// A validated booking. Lives for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Role exactly as submitted; decides the rate and goes into metadata.
    pub role: String,
    pub date: String,
    pub start_time: String,
    pub hours: u32,
}

impl BookingRequest {
    pub fn role_kind(&self) -> Role {
        Role::from_raw(&self.role)
    }
}

/// Price of a booking in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub unit_amount: i64,
    pub quantity: u32,
    pub total: i64,
}

impl Quote {
    pub fn new(role: Role, hours: u32) -> Self {
        let unit_amount = role.unit_amount();
        Self {
            unit_amount,
            quantity: hours,
            // u32 hours times a four-digit rate always fits in i64
            total: unit_amount * i64::from(hours),
        }
    }

    /// Total in euros with two decimals, e.g. `"20.00"`.
    pub fn total_display(&self) -> String {
        format!("{}.{:02}", self.total / 100, self.total % 100)
    }
}

/// Successful response body.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateCheckoutResponse {
    #[cfg_attr(
        feature = "openapi",
        schema(example = "https://checkout.stripe.com/c/pay/cs_test_a1...")
    )]
    pub url: String,
}

/// Error response body.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorResponse {
    #[cfg_attr(
        feature = "openapi",
        schema(example = "Alle verplichte velden moeten ingevuld zijn.")
    )]
    pub error: String,
}
