//! Shared newtypes and document helpers used across all domain modules.
//!
//! [`CurrencyPair`] is the one identifier every pair-keyed entity shares.
//! Normalization lives in its constructor, so every decode path and every
//! direct construction inherits the same casing rules.

pub mod document;

pub use document::{numeric_string, StringOrNull};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DecodeError;

// ─── CurrencyPair ────────────────────────────────────────────────────────────

/// An ordered (base, quote) currency pair, e.g. `BTC_USD`.
///
/// Both components are stored upper-cased regardless of input case, so
/// equality and formatting are case-normalized. Order matters — `BTC_USD`
/// and `USD_BTC` are different pairs.
///
/// Two wire encodings exist, selected by the containing type rather than by
/// the pair itself:
///
/// - the **array form** `["BTC", "USD"]`, which is what the serde impls on
///   this type produce and accept;
/// - the **delimited form** `"BTC_USD"`, written with [`Display`] and read
///   back with [`CurrencyPair::from_delimited`] or
///   [`CurrencyPair::parse_delimited`].
///
/// [`Display`]: std::fmt::Display
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    base: String,
    quote: String,
}

impl CurrencyPair {
    /// Create a pair from base and quote symbols, upper-casing both.
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into().to_uppercase(),
            quote: quote.into().to_uppercase(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Lenient decode of the delimited form.
    ///
    /// Splits at the **last** `_`, since base symbols may themselves contain
    /// the delimiter; the split only reverses [`Display`] when the quote
    /// symbol is delimiter-free. A string with no `_` at all yields the
    /// empty pair — existing documents rely on this fallback, so it is not
    /// an error here.
    ///
    /// [`Display`]: std::fmt::Display
    pub fn from_delimited(s: &str) -> Self {
        match s.rfind('_') {
            Some(at) => Self::new(&s[..at], &s[at + 1..]),
            None => {
                tracing::debug!(pair = s, "pair string has no delimiter, defaulting to empty");
                Self::default()
            }
        }
    }

    /// Strict decode of the delimited form.
    ///
    /// Same split as [`CurrencyPair::from_delimited`], but a missing
    /// delimiter is reported as [`DecodeError::MalformedPair`] instead of
    /// defaulted.
    pub fn parse_delimited(s: &str) -> Result<Self, DecodeError> {
        match s.rfind('_') {
            Some(at) => Ok(Self::new(&s[..at], &s[at + 1..])),
            None => Err(DecodeError::MalformedPair(s.to_string())),
        }
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.base, self.quote)
    }
}

/// Serializes as the two-element array form, `["BASE", "QUOTE"]`.
impl Serialize for CurrencyPair {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (&self.base, &self.quote).serialize(serializer)
    }
}

/// Deserializes the two-element array form, upper-casing both components.
impl<'de> Deserialize<'de> for CurrencyPair {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (base, quote) = <(String, String)>::deserialize(deserializer)?;
        Ok(CurrencyPair::new(base, quote))
    }
}
