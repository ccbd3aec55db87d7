// File: services/kickndji_backend/src/main.rs
use kickndji_backend::build_app;
use kickndji_common::{config_error, KickndjiError};
use kickndji_config::load_config;
use kickndji_stripe::StripeGateway;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), KickndjiError> {
    kickndji_common::init();

    let config = load_config().map_err(config_error)?;
    let gateway = Arc::new(StripeGateway::from_env(&config.stripe)?);
    let app = build_app(&config, gateway);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("Checkout endpoint at http://{}/api/create-checkout", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
