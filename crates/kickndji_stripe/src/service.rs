use kickndji_common::{
    create_client, BoxFuture, CheckoutSession, CheckoutSessionRequest, GatewayError,
    PaymentGateway,
};
use kickndji_config::{load_stripe_secret, Secret, StripeConfig};
use reqwest::Client;

use crate::error::StripeError;
use crate::logic::create_checkout_session;

/// Stripe Checkout implementation of [`PaymentGateway`].
pub struct StripeGateway {
    client: Client,
    api_base: String,
    secret_key: Secret,
}

impl StripeGateway {
    /// Create a gateway with an explicit secret key.
    pub fn new(config: &StripeConfig, secret_key: Secret) -> Result<Self, StripeError> {
        let client = create_client(config.timeout_secs, true)?;
        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            secret_key,
        })
    }

    /// Create a gateway reading the secret key from `STRIPE_SECRET_KEY`.
    pub fn from_env(config: &StripeConfig) -> Result<Self, StripeError> {
        let secret_key = load_stripe_secret()
            .ok_or_else(|| StripeError::ConfigError("STRIPE_SECRET_KEY not set".to_string()))?;
        Self::new(config, secret_key)
    }
}

impl PaymentGateway for StripeGateway {
    fn create_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> BoxFuture<'_, CheckoutSession, GatewayError> {
        Box::pin(async move {
            create_checkout_session(&self.client, &self.api_base, &self.secret_key, &request)
                .await
                .map_err(GatewayError::from)
        })
    }
}
