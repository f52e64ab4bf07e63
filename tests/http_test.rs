mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use checkout_gateway::router;
use common::*;
use std::sync::Arc;
use tower::ServiceExt;

async fn post_json(
    provider: Arc<MockProvider>,
    uri: &str,
    body: &str,
) -> (StatusCode, serde_json::Value, String) {
    let app = router(app_state(provider));
    let response = app
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    let json = serde_json::from_str(&text).unwrap_or(serde_json::Value::Null);
    (status, json, text)
}

// ── create_order_returns_provider_order ────────────────────────────────────

#[tokio::test]
async fn create_order_returns_provider_order() {
    let provider = Arc::new(MockProvider::default());
    let (status, body, _) = post_json(
        provider.clone(),
        "/api/create-order",
        r#"{"amount": 500, "currency": "INR", "notes": {"name": "CollabX"}}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "order_mock_1");
    assert_eq!(body["amount"], 50000);
    assert_eq!(body["currency"], "INR");
    assert_eq!(body["entity"], "order");
    assert_eq!(body["notes"]["name"], "CollabX");
    assert_eq!(provider.received()[0].amount().value(), 50000);
}

// ── create_order_defaults_currency ─────────────────────────────────────────

#[tokio::test]
async fn create_order_defaults_currency() {
    let provider = Arc::new(MockProvider::default());
    let (status, body, _) = post_json(provider, "/api/create-order", r#"{"amount": 12}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currency"], "INR");
    assert_eq!(body["amount"], 1200);
}

// ── provider_failure_is_generic_500 ────────────────────────────────────────

#[tokio::test]
async fn provider_failure_is_generic_500() {
    let provider = Arc::new(MockProvider::failing(
        "Razorpay API returned 401: Authentication failed",
    ));
    let (status, body, text) =
        post_json(provider, "/api/create-order", r#"{"amount": 500}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({"error": "Failed to create order"}));
    assert!(!text.contains("Authentication"));
    assert!(!text.contains(TEST_SECRET));
}

// ── invalid_amount_is_generic_500 ──────────────────────────────────────────

#[tokio::test]
async fn invalid_amount_is_generic_500() {
    let provider = Arc::new(MockProvider::default());
    let (status, body, _) =
        post_json(provider.clone(), "/api/create-order", r#"{"amount": -5}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to create order");
    assert!(provider.received().is_empty());
}

// ── malformed_body_is_400 ──────────────────────────────────────────────────

#[tokio::test]
async fn malformed_body_is_400() {
    let provider = Arc::new(MockProvider::default());
    let (status, body, _) = post_json(provider, "/api/create-order", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
}

// ── wrong_shape_order_is_generic_500 ───────────────────────────────────────
// Valid JSON that is not an order fails like a provider rejection would.

#[tokio::test]
async fn wrong_shape_order_is_generic_500() {
    for body in [
        "{}",
        r#"{"amount": "500"}"#,
        r#"{"amount": 500, "notes": {"n": 1}}"#,
    ] {
        let provider = Arc::new(MockProvider::default());
        let (status, json, _) = post_json(provider.clone(), "/api/create-order", body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body {body}");
        assert_eq!(json, serde_json::json!({"error": "Failed to create order"}));
        assert!(provider.received().is_empty());
    }
}

// ── wrong_shape_verify_is_invalid_signature ────────────────────────────────

#[tokio::test]
async fn wrong_shape_verify_is_invalid_signature() {
    let (status, body, _) = post_json(
        Arc::new(MockProvider::default()),
        "/api/verify-payment",
        r#"{"razorpay_order_id": 42, "razorpay_payment_id": "pay_1", "razorpay_signature": "ab"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({"error": "Invalid signature"}));
}

// ── missing_content_type_is_400 ────────────────────────────────────────────

#[tokio::test]
async fn missing_content_type_is_400() {
    let app = router(app_state(Arc::new(MockProvider::default())));
    let response = app
        .oneshot(
            Request::post("/api/create-order")
                .body(Body::from(r#"{"amount": 500}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ── verify_good_signature_is_200 ───────────────────────────────────────────

#[tokio::test]
async fn verify_good_signature_is_200() {
    let sig = good_signature("order_http", "pay_http");
    let payload = serde_json::json!({
        "razorpay_order_id": "order_http",
        "razorpay_payment_id": "pay_http",
        "razorpay_signature": sig,
    });
    let (status, body, _) = post_json(
        Arc::new(MockProvider::default()),
        "/api/verify-payment",
        &payload.to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"success": true}));
}

// ── verify_bad_signature_is_400 ────────────────────────────────────────────

#[tokio::test]
async fn verify_bad_signature_is_400() {
    let payload = serde_json::json!({
        "razorpay_order_id": "order_http",
        "razorpay_payment_id": "pay_http",
        "razorpay_signature": "deadbeef",
    });
    let (status, body, _) = post_json(
        Arc::new(MockProvider::default()),
        "/api/verify-payment",
        &payload.to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({"error": "Invalid signature"}));
}

// ── verify_missing_fields_is_400 ───────────────────────────────────────────

#[tokio::test]
async fn verify_missing_fields_is_400() {
    let (status, body, _) = post_json(
        Arc::new(MockProvider::default()),
        "/api/verify-payment",
        r#"{"razorpay_order_id": "order_only"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid signature");
}

// ── verify_never_echoes_expected_signature ─────────────────────────────────

#[tokio::test]
async fn verify_never_echoes_expected_signature() {
    let expected = good_signature("order_leak", "pay_leak");
    let payload = serde_json::json!({
        "razorpay_order_id": "order_leak",
        "razorpay_payment_id": "pay_leak",
        "razorpay_signature": "0".repeat(64),
    });
    let (_, _, text) = post_json(
        Arc::new(MockProvider::default()),
        "/api/verify-payment",
        &payload.to_string(),
    )
    .await;
    assert!(!text.contains(&expected));
    assert!(!text.contains(TEST_SECRET));
}

// ── health_probe ───────────────────────────────────────────────────────────

#[tokio::test]
async fn health_probe() {
    let app = router(app_state(Arc::new(MockProvider::default())));
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
