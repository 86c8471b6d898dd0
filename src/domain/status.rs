//! Transaction lifecycle status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of a deposit or exchange transaction as reported upstream.
///
/// A closed enumeration: every member maps to exactly one lowercase wire
/// label and vice versa. Serialization emits the bare label string;
/// deserialization rejects anything outside the nine labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    // the misspelled label is what consumers already store; it is part of
    // the wire format
    #[serde(rename = "no_deposists")]
    NoDeposits,
    Initial,
    Received,
    Complete,
    Settled,
    Pending,
    Failed,
    Partial,
    Expired,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::NoDeposits => "no_deposists",
            TransactionStatus::Initial => "initial",
            TransactionStatus::Received => "received",
            TransactionStatus::Complete => "complete",
            TransactionStatus::Settled => "settled",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Partial => "partial",
            TransactionStatus::Expired => "expired",
        }
    }

    /// Parse a wire label. Unknown labels are `None`, never folded into
    /// [`TransactionStatus::Expired`].
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "no_deposists" => Some(TransactionStatus::NoDeposits),
            "initial" => Some(TransactionStatus::Initial),
            "received" => Some(TransactionStatus::Received),
            "complete" => Some(TransactionStatus::Complete),
            "settled" => Some(TransactionStatus::Settled),
            "pending" => Some(TransactionStatus::Pending),
            "failed" => Some(TransactionStatus::Failed),
            "partial" => Some(TransactionStatus::Partial),
            "expired" => Some(TransactionStatus::Expired),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
