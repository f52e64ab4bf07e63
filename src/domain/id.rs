use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::error::GatewayError;

/// Separator between the two identifiers in the signed message.
pub const SIGNATURE_SEPARATOR: char = '|';

fn check_id(kind: &str, id: &str) -> Result<(), GatewayError> {
    if id.is_empty() {
        return Err(GatewayError::Validation(format!("{kind} must not be empty")));
    }
    if id.contains(SIGNATURE_SEPARATOR) {
        return Err(GatewayError::Validation(format!(
            "{kind} must not contain '{SIGNATURE_SEPARATOR}', got: {id}"
        )));
    }
    Ok(())
}

/// Provider order identifier (`order_xxx`).
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Result<Self, GatewayError> {
        let id = id.into();
        check_id("OrderId", &id)?;
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Provider payment identifier (`pay_xxx`).
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(String);

impl PaymentId {
    pub fn new(id: impl Into<String>) -> Result<Self, GatewayError> {
        let id = id.into();
        check_id("PaymentId", &id)?;
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
