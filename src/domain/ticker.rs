//! Price quotations and ticker snapshots.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single price observation: how much traded at what price, and when.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub price: Decimal,
    pub amount: Decimal,
    pub time: DateTime<Utc>,
}

/// Best bid and ask quotations for a pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub bid: Quotation,
    pub ask: Quotation,
}
