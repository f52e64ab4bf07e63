use crate::domain::error::GatewayError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const CREATE_ORDER_FAILED: &str = "Failed to create order";
pub const VERIFY_PAYMENT_FAILED: &str = "Failed to verify payment";
pub const INVALID_SIGNATURE: &str = "Invalid signature";
pub const INVALID_BODY: &str = "Invalid request body";

/// HTTP-facing failure. Internal causes are logged here and never sent to
/// the client.
pub enum ApiError {
    CreateOrder(GatewayError),
    VerifyPayment(GatewayError),
    InvalidSignature,
    BadRequest(JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::CreateOrder(GatewayError::Validation(msg)) => {
                tracing::warn!("create order rejected: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, CREATE_ORDER_FAILED)
            }
            Self::CreateOrder(err) => {
                tracing::error!("error creating order: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, CREATE_ORDER_FAILED)
            }
            Self::VerifyPayment(err) => {
                tracing::error!("error verifying payment: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, VERIFY_PAYMENT_FAILED)
            }
            Self::InvalidSignature => (StatusCode::BAD_REQUEST, INVALID_SIGNATURE),
            Self::BadRequest(rejection) => {
                tracing::warn!("unreadable request body: {rejection}");
                (StatusCode::BAD_REQUEST, INVALID_BODY)
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection)
    }
}
