//! Environment variable names used by the Kickndji configuration.
//!
//! Structured settings come in through `<PREFIX>__SECTION__KEY` variables
//! (e.g. `KICKNDJI__SERVER__PORT`). Two variables keep the names the hosting
//! platform and Stripe tooling already use: `URL` and `STRIPE_SECRET_KEY`.

use std::env;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "KICKNDJI";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// Site base URL as set by the hosting platform.
pub const SITE_URL_ENV: &str = "URL";

/// Stripe API secret key.
pub const STRIPE_SECRET_ENV: &str = "STRIPE_SECRET_KEY";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// # Arguments
///
/// * `prefix` - The variable prefix (see [`get_config_prefix`])
/// * `path` - The configuration path (e.g., "server.port")
///
/// # Returns
///
/// The environment variable name (e.g., "KICKNDJI__SERVER__PORT")
pub fn config_path_to_env_var(prefix: &str, path: &str) -> String {
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}
