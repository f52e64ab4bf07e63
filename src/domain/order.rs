use {
    super::error::GatewayError,
    super::id::OrderId,
    super::money::{Currency, MinorAmount},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// Body of `POST /api/create-order`. `amount` is in major units.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRequest {
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub notes: Option<BTreeMap<String, String>>,
}

/// Validated order, in the shape the provider's order API takes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    amount: MinorAmount,
    currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    receipt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<BTreeMap<String, String>>,
}

impl NewOrder {
    pub fn amount(&self) -> MinorAmount {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn receipt(&self) -> Option<&str> {
        self.receipt.as_deref()
    }

    pub fn notes(&self) -> Option<&BTreeMap<String, String>> {
        self.notes.as_ref()
    }
}

impl TryFrom<OrderRequest> for NewOrder {
    type Error = GatewayError;

    fn try_from(req: OrderRequest) -> Result<Self, Self::Error> {
        let currency = match req.currency.as_deref() {
            Some(code) => Currency::try_from(code)?,
            None => Currency::default(),
        };
        Ok(Self {
            amount: MinorAmount::from_major(req.amount)?,
            currency,
            receipt: req.receipt,
            notes: req.notes,
        })
    }
}

/// Provider-issued order. Only `id`, `amount` and `currency` are required;
/// every other field is kept and re-emitted untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub amount: i64,
    pub currency: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
