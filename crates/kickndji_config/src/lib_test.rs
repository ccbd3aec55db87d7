#[cfg(test)]
mod tests {
    use crate::env_vars::config_path_to_env_var;
    use crate::secrets::secret_from_value;
    use crate::{apply_site_url_override, load_config_from, AppConfig, DEFAULT_SITE_URL};
    use std::path::Path;

    #[test]
    fn test_defaults_without_any_source() {
        let config = load_config_from(Path::new("does-not-exist"), "test", "KICKNDJI_TEST_EMPTY")
            .expect("defaults should deserialize");

        assert_eq!(config.server.port, 8888);
        assert_eq!(config.checkout.currency, "eur");
        assert_eq!(config.checkout.payment_method_types, vec!["card", "ideal"]);
        assert_eq!(config.stripe.api_base, "https://api.stripe.com");
        assert_eq!(config.stripe.timeout_secs, 30);
        assert_eq!(config.checkout.resolved_site_url(), DEFAULT_SITE_URL);
    }

    #[test]
    fn test_env_source_overrides_defaults() {
        let prefix = "KICKNDJI_TEST_ENV";
        std::env::set_var(config_path_to_env_var(prefix, "server.port"), "9191");
        std::env::set_var(config_path_to_env_var(prefix, "stripe.timeout_secs"), "5");

        let config = load_config_from(Path::new("does-not-exist"), "test", prefix)
            .expect("env config should deserialize");

        assert_eq!(config.server.port, 9191);
        assert_eq!(config.stripe.timeout_secs, 5);
    }

    #[test]
    fn test_config_path_to_env_var() {
        assert_eq!(
            config_path_to_env_var("kickndji", "checkout.site_url"),
            "KICKNDJI__CHECKOUT__SITE_URL"
        );
    }

    #[test]
    fn test_site_url_override() {
        let config = apply_site_url_override(
            AppConfig::default(),
            Some("https://preview.example.nl".to_string()),
        );
        assert_eq!(config.checkout.resolved_site_url(), "https://preview.example.nl");

        // A blank URL leaves the fallback in place
        let config = apply_site_url_override(AppConfig::default(), Some("  ".to_string()));
        assert_eq!(config.checkout.resolved_site_url(), DEFAULT_SITE_URL);
    }

    #[test]
    fn test_secret_is_redacted_in_debug_output() {
        let secret = secret_from_value(Some("sk_test_123".to_string())).unwrap();
        assert_eq!(secret.expose(), "sk_test_123");
        assert_eq!(format!("{:?}", secret), "Secret(***)");
    }

    #[test]
    fn test_blank_secret_is_treated_as_missing() {
        assert!(secret_from_value(Some("   ".to_string())).is_none());
        assert!(secret_from_value(None).is_none());
    }
}
