//! Document access helpers for the decode path.
//!
//! A *document* is a [`serde_json::Value`]: the recursive structure of null,
//! boolean, number, string, object, and array that forms the serialization
//! boundary. Composite decoders read named fields through these helpers so
//! that every failure carries the field name and the offending value's
//! rendered form.

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::DecodeError;

/// Look up a required field, failing with [`DecodeError::MissingField`].
pub fn require<'a>(doc: &'a Value, field: &'static str) -> Result<&'a Value, DecodeError> {
    doc.get(field).ok_or(DecodeError::MissingField(field))
}

/// Decode a required numeric field into a [`Decimal`].
///
/// Only JSON numbers are accepted; number-like strings are a mismatch. For
/// the string-or-null looseness some backends exhibit, see
/// [`numeric_string`].
pub fn decimal(doc: &Value, field: &'static str) -> Result<Decimal, DecodeError> {
    let value = require(doc, field)?;
    value
        .as_f64()
        .and_then(|n| Decimal::try_from(n).ok())
        .ok_or_else(|| type_mismatch(field, "a number", value))
}

/// Decode a required string field.
pub fn string(doc: &Value, field: &'static str) -> Result<String, DecodeError> {
    let value = require(doc, field)?;
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| type_mismatch(field, "a string", value))
}

fn type_mismatch(field: &'static str, expected: &'static str, value: &Value) -> DecodeError {
    DecodeError::TypeMismatch {
        field,
        expected,
        value: value.to_string(),
    }
}

// ─── StringOrNull ────────────────────────────────────────────────────────────

/// A field that upstream APIs send either as a string or as `null`.
///
/// Several exchange backends encode numeric zero as `null` and every other
/// number as a string. Decoding through this variant keeps that looseness in
/// one place instead of leaking dynamic typing into each call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringOrNull {
    Text(String),
    Null,
}

impl StringOrNull {
    /// Decode a required field that must be a string or `null`.
    pub fn decode(doc: &Value, field: &'static str) -> Result<Self, DecodeError> {
        match require(doc, field)? {
            Value::String(s) => Ok(StringOrNull::Text(s.clone())),
            Value::Null => Ok(StringOrNull::Null),
            other => Err(type_mismatch(field, "a string or null", other)),
        }
    }

    /// Collapse to a numeric-parseable string, mapping `Null` to `"0.0"`.
    pub fn numeric(self) -> String {
        match self {
            StringOrNull::Text(s) => s,
            StringOrNull::Null => String::from("0.0"),
        }
    }
}

/// Read a numeric-or-null field as a numeric-parseable string.
///
/// Strings pass through unchanged and `null` becomes `"0.0"`; any other
/// shape is a [`DecodeError::TypeMismatch`].
pub fn numeric_string(doc: &Value, field: &'static str) -> Result<String, DecodeError> {
    StringOrNull::decode(doc, field).map(StringOrNull::numeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_require_reports_missing_field() {
        let doc = json!({ "fee": 0.5 });
        assert_eq!(require(&doc, "rate"), Err(DecodeError::MissingField("rate")));
    }

    #[test]
    fn test_decimal_accepts_floats_and_integers() {
        let doc = json!({ "rate": 42.5, "count": 3 });
        assert_eq!(decimal(&doc, "rate").unwrap(), dec!(42.5));
        assert_eq!(decimal(&doc, "count").unwrap(), dec!(3));
    }

    #[test]
    fn test_decimal_rejects_number_like_strings() {
        let doc = json!({ "rate": "42.5" });
        assert_eq!(
            decimal(&doc, "rate"),
            Err(DecodeError::TypeMismatch {
                field: "rate",
                expected: "a number",
                value: "\"42.5\"".to_string(),
            })
        );
    }

    #[test]
    fn test_string_rejects_numbers() {
        let doc = json!({ "currency": 42 });
        assert!(matches!(
            string(&doc, "currency"),
            Err(DecodeError::TypeMismatch { field: "currency", .. })
        ));
    }

    #[test]
    fn test_numeric_string_passes_strings_through() {
        let doc = json!({ "fee": "1.23" });
        assert_eq!(numeric_string(&doc, "fee").unwrap(), "1.23");
    }

    #[test]
    fn test_numeric_string_maps_null_to_zero() {
        let doc = json!({ "fee": null });
        assert_eq!(numeric_string(&doc, "fee").unwrap(), "0.0");
    }

    #[test]
    fn test_numeric_string_rejects_bare_numbers() {
        let doc = json!({ "fee": 42 });
        assert_eq!(
            numeric_string(&doc, "fee"),
            Err(DecodeError::TypeMismatch {
                field: "fee",
                expected: "a string or null",
                value: "42".to_string(),
            })
        );
    }

    #[test]
    fn test_string_or_null_decode() {
        let doc = json!({ "a": "x", "b": null });
        assert_eq!(
            StringOrNull::decode(&doc, "a").unwrap(),
            StringOrNull::Text("x".to_string())
        );
        assert_eq!(StringOrNull::decode(&doc, "b").unwrap(), StringOrNull::Null);
        assert_eq!(
            StringOrNull::decode(&doc, "c"),
            Err(DecodeError::MissingField("c"))
        );
    }
}
