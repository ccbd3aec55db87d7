// Exercises the checkout router end to end with a stand-in payment gateway.
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use kickndji_checkout::routes;
use kickndji_common::{
    BoxFuture, CheckoutSession, CheckoutSessionRequest, GatewayError, PaymentGateway,
};
use kickndji_config::AppConfig;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
struct RecordingGateway {
    requests: Mutex<Vec<CheckoutSessionRequest>>,
}

impl PaymentGateway for RecordingGateway {
    fn create_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> BoxFuture<'_, CheckoutSession, GatewayError> {
        self.requests.lock().unwrap().push(request);
        Box::pin(async {
            Ok(CheckoutSession {
                id: "cs_test_abc".to_string(),
                url: "https://checkout.stripe.com/c/pay/cs_test_abc".to_string(),
            })
        })
    }
}

fn app(gateway: Arc<RecordingGateway>) -> Router {
    routes(&AppConfig::default(), gateway)
}

fn post_json(body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/create-checkout")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_post_booking_returns_redirect_url() {
    let gateway = Arc::new(RecordingGateway::default());
    let response = app(gateway.clone())
        .oneshot(post_json(&json!({
            "name": "Jan",
            "email": "jan@x.nl",
            "phone": "0612345678",
            "role": "docent",
            "date": "2024-06-01",
            "startTime": "10:00",
            "hours": 2
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        read_json(response).await,
        json!({ "url": "https://checkout.stripe.com/c/pay/cs_test_abc" })
    );

    let requests = gateway.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].client_reference_id.as_deref(),
        Some("Jan|docent|2024-06-01|10:00|2h|0612345678")
    );
    assert_eq!(requests[0].metadata["telefoon"], "0612345678");
    assert_eq!(
        requests[0].cancel_url,
        "https://kickndji.netlify.app?cancelled=true"
    );
}

#[tokio::test]
async fn test_get_is_method_not_allowed_with_cors() {
    let gateway = Arc::new(RecordingGateway::default());
    let response = app(gateway.clone())
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/create-checkout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"Method Not Allowed");
    assert!(gateway.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_hours_reach_client_as_bad_request() {
    let gateway = Arc::new(RecordingGateway::default());
    let response = app(gateway.clone())
        .oneshot(post_json(&json!({
            "name": "Jan",
            "email": "jan@x.nl",
            "role": "leerling",
            "date": "2024-06-01",
            "startTime": "10:00",
            "hours": 1.5
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await,
        json!({ "error": "Aantal uur moet een positief geheel getal zijn." })
    );
    assert!(gateway.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_body_without_content_type_is_still_parsed() {
    let gateway = Arc::new(RecordingGateway::default());
    let body = json!({
        "name": "Jan",
        "email": "jan@x.nl",
        "role": "leerling",
        "date": "2024-06-01",
        "startTime": "10:00",
        "hours": "3"
    });
    let response = app(gateway.clone())
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/create-checkout")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let requests = gateway.requests.lock().unwrap();
    assert_eq!(requests[0].line_items[0].unit_amount, 1500);
    assert_eq!(requests[0].line_items[0].quantity, 3);
}
