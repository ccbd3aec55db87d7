use std::env;
use std::fmt;

use crate::env_vars::STRIPE_SECRET_ENV;
use crate::ensure_dotenv_loaded;

/// A credential that must never end up in logs or responses.
///
/// `Debug` is redacted; the value is only reachable through [`Secret::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Reads the Stripe secret key from the environment (after loading `.env`).
///
/// Returns `None` when the variable is unset or blank.
pub fn load_stripe_secret() -> Option<Secret> {
    ensure_dotenv_loaded();
    secret_from_value(env::var(STRIPE_SECRET_ENV).ok())
}

pub(crate) fn secret_from_value(value: Option<String>) -> Option<Secret> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(Secret::new)
}
