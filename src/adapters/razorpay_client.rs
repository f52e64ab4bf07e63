use {
    crate::domain::{
        error::GatewayError,
        order::{NewOrder, Order},
        provider::PaymentProvider,
        signature::KeySecret,
    },
    std::{future::Future, pin::Pin, time::Duration},
};

/// Longest provider error body we keep for the server log.
const MAX_ERROR_BODY: usize = 512;

pub struct RazorpayProvider {
    http: reqwest::Client,
    api_base: String,
    key_id: String,
    key_secret: KeySecret,
}

impl RazorpayProvider {
    pub fn new(
        api_base: impl Into<String>,
        key_id: impl Into<String>,
        key_secret: KeySecret,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Provider(format!("http client: {e}")))?;
        Ok(Self {
            http,
            api_base: api_base.into(),
            key_id: key_id.into(),
            key_secret,
        })
    }
}

impl PaymentProvider for RazorpayProvider {
    fn create_order(
        &self,
        order: &NewOrder,
    ) -> Pin<Box<dyn Future<Output = Result<Order, GatewayError>> + Send + '_>> {
        let order = order.clone();
        Box::pin(async move { self.create_order_inner(&order).await })
    }
}

impl RazorpayProvider {
    async fn create_order_inner(&self, order: &NewOrder) -> Result<Order, GatewayError> {
        let url = format!("{}/orders", self.api_base);
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.key_id, Some(self.key_secret.expose()))
            .json(order)
            .send()
            .await
            .map_err(|e| GatewayError::Provider(format!("Razorpay API: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Provider(format!("Razorpay API body: {e}")))?;

        if !status.is_success() {
            let mut detail = body;
            detail.truncate(floor_char_boundary(&detail, MAX_ERROR_BODY));
            return Err(GatewayError::Provider(format!(
                "Razorpay API returned {status}: {detail}"
            )));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    (0..=max).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}
