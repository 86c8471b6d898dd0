//! Placed-order bookkeeping.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::CurrencyPair;

/// An order as reported by an exchange.
///
/// `status` (open, closed, cancelled), `order_type` (limit and friends) and
/// `side` (buy/sell) are exchange-defined labels carried verbatim. The pair
/// is a direct structured field serialized in the array form, unlike the
/// delimited string `ExchangeInfo` and `MarketInfo` carry on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub status: String,
    pub order_type: String,
    pub side: String,
    pub pair: CurrencyPair,
    pub open_time: DateTime<Utc>,
    pub close_time: DateTime<Utc>,
    pub volume: Decimal,
    pub cost: Decimal,
    pub fee: Decimal,
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn order() -> Order {
        Order {
            status: "closed".to_string(),
            order_type: "limit".to_string(),
            side: "buy".to_string(),
            pair: CurrencyPair::new("btc", "usd"),
            open_time: Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap(),
            close_time: Utc.with_ymd_and_hms(2026, 5, 1, 9, 5, 0).unwrap(),
            volume: dec!(2.5),
            cost: dec!(106.25),
            fee: dec!(0.25),
            price: dec!(42.5),
        }
    }

    #[test]
    fn test_pair_serializes_as_array() {
        let doc = serde_json::to_value(order()).unwrap();
        assert_eq!(doc["pair"], json!(["BTC", "USD"]));
    }

    #[test]
    fn test_serde_round_trip() {
        let order = order();
        let encoded = serde_json::to_string(&order).unwrap();
        let decoded: Order = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, order);
    }
}
