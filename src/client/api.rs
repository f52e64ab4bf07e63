use {
    super::ClientError,
    crate::domain::order::Order,
    reqwest::StatusCode,
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateOrderParams {
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyPaymentParams {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VerifyBody {
    #[serde(default)]
    success: bool,
}

/// HTTP client for the gateway's `/api` endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` points at the `/api` prefix, e.g. `http://localhost:3000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn create_order(&self, params: &CreateOrderParams) -> Result<Order, ClientError> {
        let response = self
            .http
            .post(format!("{}/create-order", self.base_url))
            .json(params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "create order request failed");
                ClientError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(response, "Failed to create order").await;
            tracing::error!(%status, %message, "create order rejected");
            return Err(ClientError::Api { status, message });
        }

        response.json().await.map_err(ClientError::Network)
    }

    /// `Ok(false)` when the server says the signature is not authentic.
    pub async fn verify_payment(&self, params: &VerifyPaymentParams) -> Result<bool, ClientError> {
        let response = self
            .http
            .post(format!("{}/verify-payment", self.base_url))
            .json(params)
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            return Ok(false);
        }
        if !status.is_success() {
            let message = error_message(response, "Failed to verify payment").await;
            tracing::error!(%status, %message, "verify payment failed");
            return Err(ClientError::Api { status, message });
        }

        let body: VerifyBody = response.json().await.map_err(ClientError::Network)?;
        Ok(body.success)
    }
}

async fn error_message(response: reqwest::Response, fallback: &str) -> String {
    response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| fallback.to_string())
}
