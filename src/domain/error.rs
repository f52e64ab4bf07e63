use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("validation: {0}")]
    Validation(String),

    #[error("provider: {0}")]
    Provider(String),

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("signature: {0}")]
    Signature(String),
}
