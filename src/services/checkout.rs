use crate::domain::{
    error::GatewayError,
    id::{OrderId, PaymentId},
    order::{NewOrder, Order, OrderRequest},
    provider::PaymentProvider,
    signature::{KeySecret, PaymentCallback, verify},
};

/// Validate the request, convert to minor units and mint an order with the
/// provider. The provider's order comes back untouched.
pub async fn create_order(
    provider: &dyn PaymentProvider,
    request: OrderRequest,
) -> Result<Order, GatewayError> {
    let new_order = NewOrder::try_from(request)?;
    tracing::debug!(
        amount = %new_order.amount(),
        currency = %new_order.currency(),
        "requesting provider order"
    );
    let order = provider.create_order(&new_order).await?;
    tracing::info!(order_id = %order.id, amount = order.amount, "order created");
    Ok(order)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Authentic,
    Mismatch,
}

/// Recompute the signature for the reported pair. Malformed identifiers are
/// a mismatch, never an error: they cannot belong to a signed pair.
pub fn verify_payment(
    secret: &KeySecret,
    order_id: &str,
    payment_id: &str,
    signature: &str,
) -> Result<Verification, GatewayError> {
    let (order_id, payment_id) = match (OrderId::new(order_id), PaymentId::new(payment_id)) {
        (Ok(o), Ok(p)) => (o, p),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(error = %e, "rejecting malformed payment identifiers");
            return Ok(Verification::Mismatch);
        }
    };

    let callback = PaymentCallback {
        order_id,
        payment_id,
        signature: signature.to_string(),
    };

    if verify(secret, &callback)? {
        Ok(Verification::Authentic)
    } else {
        Ok(Verification::Mismatch)
    }
}
