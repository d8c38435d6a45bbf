use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a charge or refund.
///
/// Either produced by the gateway or synthesized by the processor on validation and
/// failure paths. Values are immutable once built.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct TransactionResult {
    pub success: bool,
    pub transaction_id: Option<String>,
    pub message: String,
}

impl TransactionResult {
    pub fn new(success: bool, transaction_id: Option<String>, message: impl Into<String>) -> Self {
        Self {
            success,
            transaction_id,
            message: message.into(),
        }
    }

    /// A failed result with no transaction id.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(false, None, message)
    }
}

/// Status label reported by the gateway's status lookup.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Completed => "COMPLETED",
            TransactionStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
