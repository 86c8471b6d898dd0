//! Exchange conversion terms keyed by currency pair.

use rust_decimal::Decimal;
use serde_json::{json, Value};

use crate::domain::deposit::DepositLimit;
use crate::error::DecodeError;
use crate::shared::{document, CurrencyPair};

/// Terms for converting one currency into another.
///
/// The wire format packs `pair` into a single `"BASE_QUOTE"` string. Decode
/// reverses it with the last-delimiter split, so a pair whose quote symbol
/// contains `_` does not round-trip, and a pair string with no delimiter
/// decodes to the empty pair rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeInfo {
    pub pair: CurrencyPair,
    pub limit: DepositLimit,
    pub rate: Decimal,
    pub miner_fee: Decimal,
}

impl TryFrom<&Value> for ExchangeInfo {
    type Error = DecodeError;

    fn try_from(doc: &Value) -> Result<Self, Self::Error> {
        Ok(Self {
            pair: CurrencyPair::from_delimited(&document::string(doc, "pair")?),
            limit: DepositLimit::try_from(document::require(doc, "limit")?)?,
            rate: document::decimal(doc, "rate")?,
            miner_fee: document::decimal(doc, "miner_fee")?,
        })
    }
}

impl From<&ExchangeInfo> for Value {
    fn from(info: &ExchangeInfo) -> Self {
        json!({
            "pair": info.pair.to_string(),
            "limit": Value::from(&info.limit),
            "rate": info.rate,
            "miner_fee": info.miner_fee,
        })
    }
}
