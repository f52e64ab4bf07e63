use {
    super::error::GatewayError,
    super::id::{OrderId, PaymentId, SIGNATURE_SEPARATOR},
    hmac::{Hmac, Mac},
    sha2::Sha256,
    std::{fmt, sync::Arc},
};

type HmacSha256 = Hmac<Sha256>;

/// Shared credential with the provider. `Debug` never prints the value.
#[derive(Clone)]
pub struct KeySecret(Arc<str>);

impl KeySecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for KeySecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeySecret(***)")
    }
}

/// What the checkout widget reports after the user pays. Untrusted until
/// [`verify`] says otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentCallback {
    pub order_id: OrderId,
    pub payment_id: PaymentId,
    pub signature: String,
}

/// Lower-case hex HMAC-SHA256 of `message`.
pub fn hmac_sha256_hex(secret: &[u8], message: &[u8]) -> Result<String, GatewayError> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|e| GatewayError::Signature(format!("hmac key: {e}")))?;
    mac.update(message);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Signature the provider issues for an order/payment pair.
pub fn sign(
    secret: &KeySecret,
    order_id: &OrderId,
    payment_id: &PaymentId,
) -> Result<String, GatewayError> {
    let message = format!(
        "{}{SIGNATURE_SEPARATOR}{}",
        order_id.as_str(),
        payment_id.as_str()
    );
    hmac_sha256_hex(secret.expose().as_bytes(), message.as_bytes())
}

/// Recompute the signature and compare it to the reported one. `Ok(false)`
/// is a normal outcome; `Err` means the check itself could not run.
pub fn verify(secret: &KeySecret, callback: &PaymentCallback) -> Result<bool, GatewayError> {
    let expected = sign(secret, &callback.order_id, &callback.payment_id)?;
    Ok(constant_time_eq(
        expected.as_bytes(),
        callback.signature.as_bytes(),
    ))
}

/// Byte equality without an early exit on the first difference.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
