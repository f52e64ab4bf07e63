use {
    super::error::GatewayError,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Major-to-minor multiplier. Applied to every currency.
pub const MINOR_UNITS_PER_MAJOR: f64 = 100.0;

/// Largest integer an f64 holds exactly.
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

/// Amount in the smallest denomination (paise for INR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinorAmount(i64);

impl MinorAmount {
    pub fn new(minor: i64) -> Result<Self, GatewayError> {
        if minor <= 0 {
            return Err(GatewayError::Validation(format!(
                "amount must be positive, got: {minor}"
            )));
        }
        Ok(Self(minor))
    }

    /// Plain `major * 100`. A product that is not an exact integer is
    /// rejected rather than rounded.
    pub fn from_major(major: f64) -> Result<Self, GatewayError> {
        let minor = major * MINOR_UNITS_PER_MAJOR;
        if !minor.is_finite() || minor.fract() != 0.0 || minor.abs() > MAX_EXACT {
            return Err(GatewayError::Validation(format!(
                "amount {major} is not exact in minor units (got {minor})"
            )));
        }
        Self::new(minor as i64)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MinorAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ISO 4217 alphabetic code, upper case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub const DEFAULT: &'static str = "INR";

    pub fn inr() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::inr()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Currency {
    type Error = GatewayError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.len() != 3 || !s.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(GatewayError::Validation(format!(
                "currency must be a 3-letter ISO 4217 code, got: {s}"
            )));
        }
        Ok(Self(s.to_string()))
    }
}
