use {
    super::{
        ClientError,
        api::{ApiClient, CreateOrderParams, VerifyPaymentParams},
    },
    crate::domain::order::Order,
    serde::Deserialize,
    std::{
        collections::BTreeMap,
        future::Future,
        pin::Pin,
        sync::{
            Arc, Mutex,
            atomic::{AtomicBool, Ordering},
        },
    },
};

pub const DEFAULT_NAME: &str = "CollabX";
pub const DEFAULT_DESCRIPTION: &str = "Subscription Payment";
pub const RETRY_MESSAGE: &str = "Failed to create payment order. Please try again.";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The two gateway calls the trigger depends on.
pub trait OrderBackend: Send + Sync {
    fn create_order<'a>(
        &'a self,
        params: &'a CreateOrderParams,
    ) -> BoxFuture<'a, Result<Order, ClientError>>;

    fn verify_payment<'a>(
        &'a self,
        params: &'a VerifyPaymentParams,
    ) -> BoxFuture<'a, Result<bool, ClientError>>;
}

impl OrderBackend for ApiClient {
    fn create_order<'a>(
        &'a self,
        params: &'a CreateOrderParams,
    ) -> BoxFuture<'a, Result<Order, ClientError>> {
        Box::pin(ApiClient::create_order(self, params))
    }

    fn verify_payment<'a>(
        &'a self,
        params: &'a VerifyPaymentParams,
    ) -> BoxFuture<'a, Result<bool, ClientError>> {
        Box::pin(ApiClient::verify_payment(self, params))
    }
}

/// What the provider's hosted checkout is opened with.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOptions {
    pub key: String,
    pub amount: i64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub order_id: String,
}

/// Fields the widget passes to its completion handler, as delivered in its
/// JSON callback payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckoutResponse {
    pub razorpay_payment_id: String,
    pub razorpay_order_id: String,
    pub razorpay_signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Completed(CheckoutResponse),
    Dismissed,
}

/// Provider-hosted checkout. Resolves once the user pays or closes it.
pub trait CheckoutWidget: Send + Sync {
    fn open(&self, options: CheckoutOptions) -> BoxFuture<'_, CheckoutOutcome>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayRequest {
    pub amount: f64,
    pub currency: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl PayRequest {
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            currency: None,
            name: None,
            description: None,
        }
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Checkout result as reported by the widget. Nothing here is proven until
/// [`UnverifiedPayment::verify`] round-trips it through the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnverifiedPayment {
    order_id: String,
    payment_id: String,
    signature: String,
}

impl UnverifiedPayment {
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn payment_id(&self) -> &str {
        &self.payment_id
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Ask the server to recompute the signature. The only way to get a
    /// [`VerifiedPayment`].
    pub async fn verify(self, backend: &dyn OrderBackend) -> Result<VerifiedPayment, ClientError> {
        let params = VerifyPaymentParams {
            razorpay_order_id: self.order_id,
            razorpay_payment_id: self.payment_id,
            razorpay_signature: self.signature,
        };
        if !backend.verify_payment(&params).await? {
            tracing::warn!(order_id = %params.razorpay_order_id, "server rejected payment signature");
            return Err(ClientError::InvalidSignature);
        }
        Ok(VerifiedPayment {
            order_id: params.razorpay_order_id,
            payment_id: params.razorpay_payment_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedPayment {
    order_id: String,
    payment_id: String,
}

impl VerifiedPayment {
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn payment_id(&self) -> &str {
        &self.payment_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayOutcome {
    /// A previous `pay` is still in flight; nothing was done.
    Busy,
    /// Order creation failed; the message is also kept in [`PaymentTrigger::error`].
    Failed(String),
    /// The user closed the checkout.
    Cancelled,
    Completed(UnverifiedPayment),
}

struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Drives one checkout at a time: create order, open widget, hand back the
/// unverified result.
pub struct PaymentTrigger {
    backend: Arc<dyn OrderBackend>,
    widget: Arc<dyn CheckoutWidget>,
    key_id: String,
    loading: AtomicBool,
    error: Mutex<Option<String>>,
}

impl PaymentTrigger {
    /// `key_id` is the provider's public key id, never the secret.
    pub fn new(
        backend: Arc<dyn OrderBackend>,
        widget: Arc<dyn CheckoutWidget>,
        key_id: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            widget,
            key_id: key_id.into(),
            loading: AtomicBool::new(false),
            error: Mutex::new(None),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub fn error(&self) -> Option<String> {
        self.error
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_error(&self, message: Option<String>) {
        *self
            .error
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = message;
    }

    pub async fn pay(&self, request: PayRequest) -> PayOutcome {
        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("payment already in flight, ignoring");
            return PayOutcome::Busy;
        }
        let _guard = LoadingGuard(&self.loading);
        self.set_error(None);

        let name = request.name.unwrap_or_else(|| DEFAULT_NAME.to_string());
        let description = request
            .description
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        let params = CreateOrderParams {
            amount: request.amount,
            currency: request.currency,
            receipt: None,
            notes: Some(BTreeMap::from([
                ("name".to_string(), name.clone()),
                ("description".to_string(), description.clone()),
            ])),
        };

        let order = match self.backend.create_order(&params).await {
            Ok(order) => order,
            Err(e) => {
                tracing::error!(error = %e, "payment failed");
                self.set_error(Some(RETRY_MESSAGE.to_string()));
                return PayOutcome::Failed(RETRY_MESSAGE.to_string());
            }
        };

        let options = CheckoutOptions {
            key: self.key_id.clone(),
            amount: order.amount,
            currency: order.currency,
            name,
            description,
            order_id: order.id.into_inner(),
        };

        match self.widget.open(options).await {
            CheckoutOutcome::Completed(response) => {
                tracing::info!(
                    order_id = %response.razorpay_order_id,
                    payment_id = %response.razorpay_payment_id,
                    "checkout completed, awaiting verification"
                );
                PayOutcome::Completed(UnverifiedPayment {
                    order_id: response.razorpay_order_id,
                    payment_id: response.razorpay_payment_id,
                    signature: response.razorpay_signature,
                })
            }
            CheckoutOutcome::Dismissed => {
                tracing::info!("checkout dismissed");
                PayOutcome::Cancelled
            }
        }
    }
}
