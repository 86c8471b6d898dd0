//! Typed failures for the document decode path.

use thiserror::Error;

/// Errors surfaced while decoding a document into a domain value.
///
/// Every variant names the offending field or carries the offending value's
/// rendered form, so callers can report failures without re-inspecting the
/// document. Encoding is total and has no error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` is not {expected}, got {value}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("pair string `{0}` has no `_` delimiter")]
    MalformedPair(String),
}
