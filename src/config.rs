use {
    crate::domain::signature::KeySecret,
    std::{env, net::SocketAddr, time::Duration},
    thiserror::Error,
};

pub const DEFAULT_API_BASE: &str = "https://api.razorpay.com/v1";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub key_id: String,
    pub key_secret: KeySecret,
    pub api_base: String,
    pub bind_addr: SocketAddr,
    pub provider_timeout: Duration,
}

impl Config {
    /// Read the process environment. Credentials have no fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let key_id = required("RAZORPAY_KEY_ID")?;
        let key_secret = KeySecret::new(required("RAZORPAY_KEY_SECRET")?);

        let api_base = lookup("RAZORPAY_API_BASE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let provider_timeout = match lookup("PROVIDER_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::Invalid {
                        name: "PROVIDER_TIMEOUT_SECS",
                        reason: e.to_string(),
                    }
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        name: "PROVIDER_TIMEOUT_SECS",
                        reason: "must be greater than zero".into(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
        };

        Ok(Self {
            key_id,
            key_secret,
            api_base,
            bind_addr,
            provider_timeout,
        })
    }
}
