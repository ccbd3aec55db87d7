use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::Path;
use tracing::debug;

pub mod env_vars;
pub mod models;
pub mod secrets;
#[cfg(test)]
mod lib_test;

pub use models::*;
pub use secrets::{load_stripe_secret, Secret};

/// Loads the application configuration.
///
/// Sources, later ones winning:
/// 1. `<CONFIG_DIR>/default.{toml,yaml,json}` (optional)
/// 2. `<CONFIG_DIR>/<RUN_ENV>.{toml,yaml,json}` (optional)
/// 3. `<PREFIX>__SECTION__KEY` environment variables
/// 4. the `URL` environment variable for `checkout.site_url`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let config_dir = env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env_vars::get_config_prefix();

    let config = load_config_from(Path::new(&config_dir), &run_env, &prefix)?;
    let site_url = env::var(env_vars::SITE_URL_ENV).ok();
    Ok(apply_site_url_override(config, site_url))
}

/// Builds the layered configuration without touching `.env` or the `URL` override.
pub fn load_config_from(
    config_dir: &Path,
    run_env: &str,
    prefix: &str,
) -> Result<AppConfig, ConfigError> {
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);

    debug!("config: default_path: {}", default_path.display());
    debug!("config: env_path: {}", env_path.display());

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(prefix)
                .separator(env_vars::CONFIG_SEPARATOR)
                .try_parsing(true),
        );

    builder.build()?.try_deserialize()
}

/// Replaces `checkout.site_url` with the platform-provided site URL, if one is set.
pub fn apply_site_url_override(mut config: AppConfig, site_url: Option<String>) -> AppConfig {
    if let Some(url) = site_url.filter(|u| !u.trim().is_empty()) {
        config.checkout.site_url = Some(url);
    }
    config
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file defaults to `.env`; `DOTENV_OVERRIDE` names another one. Loading
/// happens once per process, a missing file is not an error.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = std::env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
