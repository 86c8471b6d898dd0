//! Market trading terms keyed by currency pair.

use rust_decimal::Decimal;
use serde_json::{json, Value};

use crate::domain::deposit::DepositLimit;
use crate::error::DecodeError;
use crate::shared::{document, CurrencyPair};

/// Trading terms for a market.
///
/// Shares the delimited-pair wire encoding with
/// [`ExchangeInfo`](crate::domain::exchange::ExchangeInfo): `pair` is a
/// single `"BASE_QUOTE"` string on the wire, split at the last `_` on
/// decode.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketInfo {
    pub pair: CurrencyPair,
    pub limit: DepositLimit,
    pub maker_fee: Decimal,
    pub taker_fee: Decimal,
}

impl TryFrom<&Value> for MarketInfo {
    type Error = DecodeError;

    fn try_from(doc: &Value) -> Result<Self, Self::Error> {
        Ok(Self {
            pair: CurrencyPair::from_delimited(&document::string(doc, "pair")?),
            limit: DepositLimit::try_from(document::require(doc, "limit")?)?,
            maker_fee: document::decimal(doc, "maker_fee")?,
            taker_fee: document::decimal(doc, "taker_fee")?,
        })
    }
}

impl From<&MarketInfo> for Value {
    fn from(info: &MarketInfo) -> Self {
        json!({
            "pair": info.pair.to_string(),
            "limit": Value::from(&info.limit),
            "taker_fee": info.taker_fee,
            "maker_fee": info.maker_fee,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn market_info_doc() -> Value {
        json!({
            "pair": "ETH_BTC",
            "limit": { "min": 0.25, "max": 100.0 },
            "taker_fee": 0.5,
            "maker_fee": 0.25,
        })
    }

    #[test]
    fn test_decodes_fees_and_pair() {
        let info = MarketInfo::try_from(&market_info_doc()).unwrap();
        assert_eq!(info.pair, CurrencyPair::new("ETH", "BTC"));
        assert_eq!(info.maker_fee, dec!(0.25));
        assert_eq!(info.taker_fee, dec!(0.5));
    }

    #[test]
    fn test_round_trips_for_delimiter_free_symbols() {
        let doc = market_info_doc();
        let info = MarketInfo::try_from(&doc).unwrap();
        assert_eq!(Value::from(&info), doc);
    }

    #[test]
    fn test_last_delimiter_split_is_lossy() {
        // "BTC_ETH_USD" was encoded from base "BTC_ETH"; the heuristic
        // recovers it only because the quote symbol is delimiter-free
        let mut doc = market_info_doc();
        doc["pair"] = json!("BTC_ETH_USD");
        let info = MarketInfo::try_from(&doc).unwrap();
        assert_eq!(info.pair.base(), "BTC_ETH");
        assert_eq!(info.pair.quote(), "USD");
    }

    #[test]
    fn test_reports_missing_maker_fee() {
        let mut doc = market_info_doc();
        doc.as_object_mut().unwrap().remove("maker_fee");
        assert_eq!(
            MarketInfo::try_from(&doc),
            Err(DecodeError::MissingField("maker_fee"))
        );
    }
}
