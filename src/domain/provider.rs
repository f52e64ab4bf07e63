use {
    super::error::GatewayError,
    super::order::{NewOrder, Order},
    std::{future::Future, pin::Pin},
};

/// Outbound side of the order flow. Implemented by the Razorpay adapter and
/// by test doubles.
pub trait PaymentProvider: Send + Sync {
    fn create_order(
        &self,
        order: &NewOrder,
    ) -> Pin<Box<dyn Future<Output = Result<Order, GatewayError>> + Send + '_>>;
}
