//! Client side of the checkout flow.
//!
//! A completed checkout only yields an [`UnverifiedPayment`]. Integrators
//! must call [`UnverifiedPayment::verify`] before treating the payment as
//! real; the widget's success callback alone proves nothing.

pub mod api;
pub mod trigger;

pub use api::{ApiClient, CreateOrderParams, VerifyPaymentParams};
pub use trigger::{
    CheckoutOptions, CheckoutOutcome, CheckoutResponse, CheckoutWidget, OrderBackend, PayOutcome,
    PayRequest, PaymentTrigger, UnverifiedPayment, VerifiedPayment,
};

use {reqwest::StatusCode, thiserror::Error};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("payment signature is not authentic")]
    InvalidSignature,
}
