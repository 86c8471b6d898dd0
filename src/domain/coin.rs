//! Listed-coin metadata.

use serde_json::{json, Value};

use crate::error::DecodeError;
use crate::shared::document;

/// A coin as listed by an exchange.
///
/// `status` is an opaque exchange-defined label (e.g. `"available"`); it is
/// carried verbatim, not interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coin {
    pub name: String,
    pub symbol: String,
    pub status: String,
}

impl TryFrom<&Value> for Coin {
    type Error = DecodeError;

    fn try_from(doc: &Value) -> Result<Self, Self::Error> {
        Ok(Self {
            name: document::string(doc, "name")?,
            symbol: document::string(doc, "symbol")?,
            status: document::string(doc, "status")?,
        })
    }
}

impl From<&Coin> for Value {
    fn from(coin: &Coin) -> Self {
        json!({
            "name": coin.name,
            "symbol": coin.symbol,
            "status": coin.status,
        })
    }
}
