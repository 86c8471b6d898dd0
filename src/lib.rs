//! # Crosstrade SDK
//!
//! Core domain types for the Crosstrade exchange client, together with the
//! document codecs that map them to and from the JSON wire representation.
//!
//! ## Architecture
//!
//! The crate is organized in two layers:
//!
//! 1. **Shared** — [`shared::CurrencyPair`] and the document access helpers
//!    every codec reads fields through
//! 2. **Domain** — the exchange entities with their per-type encode/decode
//!    rules
//!
//! Decoding is strict: required fields and scalar types are enforced, and
//! failures surface as [`error::DecodeError`] carrying the offending field.
//! Encoding is total and never fails. Everything here is pure and
//! synchronous; concurrent callers need no coordination.
//!
//! The one deliberate looseness is the pair field of
//! [`domain::exchange::ExchangeInfo`] and [`domain::market::MarketInfo`]:
//! the wire packs a currency pair into a single `"BASE_QUOTE"` string, and
//! decode reverses it heuristically (split at the last `_`, empty pair when
//! there is none) because existing documents depend on exactly that
//! behavior.
//!
//! ## Quick Start
//!
//! ```rust
//! use crosstrade_sdk::prelude::*;
//! use serde_json::json;
//!
//! let doc = json!({
//!     "pair": "BTC_USD",
//!     "limit": { "min": 0.5, "max": 10.0 },
//!     "rate": 42.5,
//!     "miner_fee": 0.25,
//! });
//!
//! let info = ExchangeInfo::try_from(&doc)?;
//! assert_eq!(info.pair.to_string(), "BTC_USD");
//! # Ok::<(), crosstrade_sdk::error::DecodeError>(())
//! ```

/// Shared newtypes and document helpers.
pub mod shared;

/// Domain entities and their document codecs.
pub mod domain;

/// Typed decode failures.
pub mod error;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::domain::coin::Coin;
    pub use crate::domain::deposit::{DepositInfo, DepositLimit};
    pub use crate::domain::exchange::ExchangeInfo;
    pub use crate::domain::market::MarketInfo;
    pub use crate::domain::order::Order;
    pub use crate::domain::status::TransactionStatus;
    pub use crate::domain::ticker::{Quotation, Ticker};

    pub use crate::error::DecodeError;

    pub use crate::shared::{numeric_string, CurrencyPair, StringOrNull};
}
