//! Integration tests for the canned error-scenario and custom payment
//! endpoints.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use springboard_ledger::{BalanceStore, Profile, ProfileKind};
use springboard_mock_server::{create_router, AppState};
use tower::ServiceExt;

const GIFT_CARD_OPERATIONS: [&str; 4] = ["check_balance", "capture", "refund", "void"];
const CUSTOM_PAYMENT_OPERATIONS: [&str; 3] = ["capture", "refund", "void"];

fn app() -> (Router, AppState) {
    let state = AppState::new(
        BalanceStore::with_seed(ProfileKind::Numeric.default_seed()),
        Profile::numeric(),
    );
    (create_router(state.clone()), state)
}

async fn post(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(r#"{"number":"1","amount":10}"#))
                .unwrap(),
        )
        .await
        .expect("Failed to send request")
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body")
        .to_vec()
}

async fn assert_error_shapes(app: &Router, prefix: &str, operation: &str) {
    let response = post(app, &format!("{}/{}_error", prefix, operation)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body, json!({ "message": "Error example with message key" }));

    let response = post(app, &format!("{}/{}_error_json", prefix, operation)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body, json!({ "error": "Error example without message key" }));

    let response = post(app, &format!("{}/{}_error_text", prefix, operation)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"), "{}", content_type);
    assert_eq!(body_bytes(response).await, b"Error example is not JSON");
}

#[tokio::test]
async fn test_check_balance_error() {
    let (app, _) = app();
    let response = post(&app, "/gift_cards/check_balance_error").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body, json!({ "message": "Error example with message key" }));
}

#[tokio::test]
async fn test_gift_card_error_scenarios() {
    let (app, _) = app();
    for operation in GIFT_CARD_OPERATIONS {
        assert_error_shapes(&app, "/gift_cards", operation).await;
    }
}

#[tokio::test]
async fn test_custom_payment_error_scenarios() {
    let (app, _) = app();
    for operation in CUSTOM_PAYMENT_OPERATIONS {
        assert_error_shapes(&app, "/custom_payment", operation).await;
    }
}

#[tokio::test]
async fn test_custom_payment_success() {
    let (app, _) = app();
    for operation in CUSTOM_PAYMENT_OPERATIONS {
        let response = post(&app, &format!("/custom_payment/{}", operation)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body, json!({ "message": "Success" }));
    }
}

#[tokio::test]
async fn test_scenarios_do_not_touch_store() {
    let (app, state) = app();
    post(&app, "/gift_cards/capture_error").await;
    post(&app, "/gift_cards/refund_error_json").await;
    post(&app, "/custom_payment/capture").await;
    assert_eq!(state.balance("1").await, Some(bigdecimal::BigDecimal::from(10000)));
}

#[tokio::test]
async fn test_custom_payment_has_no_check_balance() {
    let (app, _) = app();
    let response = post(&app, "/custom_payment/check_balance_error").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
