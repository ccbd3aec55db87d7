// File: services/kickndji_backend/src/lib.rs
use axum::{routing::get, Router};
use kickndji_checkout::routes as checkout_routes;
use kickndji_common::PaymentGateway;
use kickndji_config::AppConfig;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Prefix of the regular API.
pub const API_PREFIX: &str = "/api";

/// Prefix the front-end used while the endpoint ran as a Netlify function.
pub const NETLIFY_FUNCTIONS_PREFIX: &str = "/.netlify/functions";

async fn health() -> &'static str {
    "ok"
}

/// Builds the full application router around the given payment gateway.
pub fn build_app(config: &AppConfig, gateway: Arc<dyn PaymentGateway>) -> Router {
    let checkout_router = checkout_routes::routes(config, gateway);

    let api_router = Router::new()
        .route("/health", get(health))
        .merge(checkout_router.clone());

    #[allow(unused_mut)] // only mutated with the openapi feature
    let mut app = Router::new()
        .nest(API_PREFIX, api_router)
        .nest(NETLIFY_FUNCTIONS_PREFIX, checkout_router);

    #[cfg(feature = "openapi")]
    {
        use kickndji_checkout::doc::CheckoutApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Kick'n DJI API",
                version = "0.1.0",
                description = "Camera rental checkout API"
            ),
            servers((url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(CheckoutApiDoc::openapi());
        tracing::info!("Adding Swagger UI at /api/docs");

        app = app.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc));
    }

    app.layer(TraceLayer::new_for_http())
}
