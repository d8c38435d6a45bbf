use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Charge,
    Refund,
    Status,
}

/// One requested operation, as read from a batch input.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Command {
    pub op: Operation,
    pub user: Option<String>,
    pub tx: Option<String>,
    pub amount: Option<Decimal>,
}

impl Command {
    pub fn user_id(&self) -> &str {
        self.user.as_deref().unwrap_or_default()
    }

    pub fn transaction_id(&self) -> &str {
        self.tx.as_deref().unwrap_or_default()
    }

    /// Missing amounts are treated as zero and so fail validation.
    pub fn amount(&self) -> Decimal {
        self.amount.unwrap_or(Decimal::ZERO)
    }
}

/// Flattened result of running a `Command`, ready to be written out.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Outcome {
    pub op: Operation,
    pub success: bool,
    pub tx: Option<String>,
    pub detail: String,
}
