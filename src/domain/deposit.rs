//! Deposit limits and deposit terms.

use rust_decimal::Decimal;
use serde_json::{json, Value};

use crate::error::DecodeError;
use crate::shared::document;

// ─── DepositLimit ────────────────────────────────────────────────────────────

/// Minimum and maximum deposit size for a currency.
///
/// `min <= max` is not enforced here; consumers own that check.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DepositLimit {
    pub min: Decimal,
    pub max: Decimal,
}

impl TryFrom<&Value> for DepositLimit {
    type Error = DecodeError;

    fn try_from(doc: &Value) -> Result<Self, Self::Error> {
        Ok(Self {
            min: document::decimal(doc, "min")?,
            max: document::decimal(doc, "max")?,
        })
    }
}

impl From<&DepositLimit> for Value {
    fn from(limit: &DepositLimit) -> Self {
        json!({
            "min": limit.min,
            "max": limit.max,
        })
    }
}

// ─── DepositInfo ─────────────────────────────────────────────────────────────

/// Deposit terms for a currency on an exchange.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepositInfo {
    pub limit: DepositLimit,
    pub fee: Decimal,
    pub currency: String,
    pub method: String,
}

impl TryFrom<&Value> for DepositInfo {
    type Error = DecodeError;

    fn try_from(doc: &Value) -> Result<Self, Self::Error> {
        Ok(Self {
            limit: DepositLimit::try_from(document::require(doc, "limit")?)?,
            fee: document::decimal(doc, "fee")?,
            currency: document::string(doc, "currency")?,
            method: document::string(doc, "method")?,
        })
    }
}

impl From<&DepositInfo> for Value {
    fn from(info: &DepositInfo) -> Self {
        json!({
            "limit": Value::from(&info.limit),
            "fee": info.fee,
            "currency": info.currency,
            "method": info.method,
        })
    }
}
