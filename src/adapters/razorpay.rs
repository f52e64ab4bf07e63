use {
    crate::{
        AppState,
        adapters::api_errors::ApiError,
        domain::{
            error::GatewayError,
            order::{Order, OrderRequest},
        },
        services::checkout::{self, Verification},
    },
    axum::{
        Json,
        extract::{State, rejection::JsonRejection},
    },
    serde::Deserialize,
};

/// Fields the checkout widget hands back. Missing fields are treated as
/// empty, which never verifies.
#[derive(Debug, Default, Deserialize)]
pub struct VerifyPaymentRequest {
    #[serde(default)]
    pub razorpay_order_id: String,
    #[serde(default)]
    pub razorpay_payment_id: String,
    #[serde(default)]
    pub razorpay_signature: String,
}

#[tracing::instrument(name = "create_order", skip_all)]
pub async fn create_order_handler(
    State(state): State<AppState>,
    body: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    // Well-formed JSON of the wrong shape fails like any other bad order.
    let Json(request) = body.map_err(|rejection| match rejection {
        JsonRejection::JsonDataError(e) => {
            ApiError::CreateOrder(GatewayError::Validation(e.body_text()))
        }
        other => ApiError::from(other),
    })?;
    let order = checkout::create_order(&*state.provider, request)
        .await
        .map_err(ApiError::CreateOrder)?;
    Ok(Json(order))
}

#[tracing::instrument(
    name = "verify_payment",
    skip_all,
    fields(order_id = tracing::field::Empty, payment_id = tracing::field::Empty)
)]
pub async fn verify_payment_handler(
    State(state): State<AppState>,
    body: Result<Json<VerifyPaymentRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(req) = body.map_err(|rejection| match rejection {
        JsonRejection::JsonDataError(e) => {
            tracing::warn!("verify body has wrong shape: {}", e.body_text());
            ApiError::InvalidSignature
        }
        other => ApiError::from(other),
    })?;

    tracing::Span::current()
        .record("order_id", tracing::field::display(&req.razorpay_order_id))
        .record("payment_id", tracing::field::display(&req.razorpay_payment_id));

    let verdict = checkout::verify_payment(
        &state.key_secret,
        &req.razorpay_order_id,
        &req.razorpay_payment_id,
        &req.razorpay_signature,
    )
    .map_err(ApiError::VerifyPayment)?;

    match verdict {
        Verification::Authentic => {
            tracing::info!("payment signature verified");
            Ok(Json(serde_json::json!({ "success": true })))
        }
        Verification::Mismatch => {
            tracing::warn!("payment signature mismatch");
            Err(ApiError::InvalidSignature)
        }
    }
}
