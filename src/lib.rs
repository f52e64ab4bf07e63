pub mod adapters;
pub mod client;
pub mod config;
pub mod domain;
pub mod services;

use {
    axum::{
        Router,
        extract::DefaultBodyLimit,
        routing::{get, post},
    },
    domain::{provider::PaymentProvider, signature::KeySecret},
    std::{sync::Arc, time::Duration},
    tower_http::{cors::CorsLayer, timeout::TimeoutLayer},
};

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn PaymentProvider>,
    pub key_secret: KeySecret,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route(
            "/api/create-order",
            post(adapters::razorpay::create_order_handler),
        )
        .route(
            "/api/verify-payment",
            post(adapters::razorpay::verify_payment_handler),
        )
        .layer(DefaultBodyLimit::max(16 * 1024))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
