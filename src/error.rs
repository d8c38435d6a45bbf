use thiserror::Error;

/// Failures reported by a payment gateway.
///
/// `Display` renders the gateway's original message untouched so that callers can embed it
/// into their own messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Transient infrastructure failure (timeouts, unreachable provider, ...).
    #[error("{0}")]
    Network(String),
    /// Charge-specific business failure.
    #[error("{0}")]
    Charge(String),
    /// Refund-specific business failure.
    #[error("{0}")]
    Refund(String),
    /// Any other failure kind. The processor never absorbs these.
    #[error("{0}")]
    Other(String),
}

/// Errors raised by `PaymentProcessor` to its caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessorError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    Unavailable(String),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
