// --- File: crates/kickndji_config/src/models.rs ---

use serde::{Deserialize, Serialize};

/// Used when neither the config files nor the `URL` env var name a site.
pub const DEFAULT_SITE_URL: &str = "https://kickndji.netlify.app";

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8888
}

// --- Checkout Config ---
// Settings for the booking checkout flow. Prices are fixed in code, not here.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CheckoutConfig {
    /// Base URL the payment provider redirects back to. Overridden by `URL`.
    #[serde(default)]
    pub site_url: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_payment_method_types")]
    pub payment_method_types: Vec<String>,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            site_url: None,
            currency: default_currency(),
            payment_method_types: default_payment_method_types(),
        }
    }
}

impl CheckoutConfig {
    /// The configured site URL, or the hardcoded fallback when none (or an empty one) is set.
    pub fn resolved_site_url(&self) -> String {
        self.site_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_SITE_URL)
            .to_string()
    }
}

fn default_currency() -> String {
    "eur".to_string()
}

fn default_payment_method_types() -> Vec<String> {
    vec!["card".to_string(), "ideal".to_string()]
}

// --- Stripe Config ---
// Holds non-secret Stripe config. Secret key loaded directly from env var: STRIPE_SECRET_KEY
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StripeConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Upper bound for one call to the Stripe API.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_base() -> String {
    "https://api.stripe.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub checkout: CheckoutConfig,
    #[serde(default)]
    pub stripe: StripeConfig,
}
