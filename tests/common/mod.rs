#![allow(dead_code)]

use checkout_gateway::AppState;
use checkout_gateway::domain::error::GatewayError;
use checkout_gateway::domain::id::{OrderId, PaymentId};
use checkout_gateway::domain::order::{NewOrder, Order};
use checkout_gateway::domain::provider::PaymentProvider;
use checkout_gateway::domain::signature::{KeySecret, sign};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

pub const TEST_SECRET: &str = "test_secret_for_hmac";

pub fn secret() -> KeySecret {
    KeySecret::new(TEST_SECRET)
}

/// Signature the provider would issue for this pair under [`TEST_SECRET`].
pub fn good_signature(order_id: &str, payment_id: &str) -> String {
    sign(
        &secret(),
        &OrderId::new(order_id).unwrap(),
        &PaymentId::new(payment_id).unwrap(),
    )
    .unwrap()
}

/// In-memory provider: records every order it is asked to create and echoes
/// it back as a provider order, or fails with a fixed error.
#[derive(Default)]
pub struct MockProvider {
    pub received: Mutex<Vec<NewOrder>>,
    pub fail_with: Option<String>,
}

impl MockProvider {
    pub fn failing(message: &str) -> Self {
        Self {
            received: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn received(&self) -> Vec<NewOrder> {
        self.received.lock().unwrap().clone()
    }
}

impl PaymentProvider for MockProvider {
    fn create_order(
        &self,
        order: &NewOrder,
    ) -> Pin<Box<dyn Future<Output = Result<Order, GatewayError>> + Send + '_>> {
        let order = order.clone();
        Box::pin(async move {
            self.received.lock().unwrap().push(order.clone());
            if let Some(msg) = &self.fail_with {
                return Err(GatewayError::Provider(msg.clone()));
            }
            let mut extra = serde_json::Map::new();
            extra.insert("entity".into(), "order".into());
            extra.insert("status".into(), "created".into());
            extra.insert("receipt".into(), serde_json::json!(order.receipt()));
            extra.insert("notes".into(), serde_json::json!(order.notes()));
            Ok(Order {
                id: OrderId::new("order_mock_1").unwrap(),
                amount: order.amount().value(),
                currency: order.currency().as_str().to_string(),
                extra,
            })
        })
    }
}

pub fn app_state(provider: Arc<MockProvider>) -> AppState {
    AppState {
        provider,
        key_secret: secret(),
    }
}
