use crate::domain::ports::{LoggerBox, PaymentGatewayBox};
use crate::domain::transaction::{TransactionResult, TransactionStatus};
use crate::error::{GatewayError, ProcessorError};
use rust_decimal::Decimal;

pub const INVALID_USER_ID: &str = "Invalid userId: field is empty.";
pub const INVALID_TRANSACTION_ID: &str = "Invalid transactionId: field is empty.";
pub const NON_POSITIVE_AMOUNT: &str = "Amount must be positive.";
pub const PAYMENT_SUCCEEDED: &str = "Payment processed successfully.";
pub const REFUND_SUCCEEDED: &str = "Refund processed successfully.";
pub const STATUS_UNAVAILABLE: &str = "Network error while fetching status.";

/// Validating façade over a payment gateway.
///
/// Charges and refunds report validation and gateway failures through the returned
/// `TransactionResult`; only failure kinds the operation does not handle come back as `Err`.
/// Status lookups report their failures as `Err` instead.
///
/// The processor holds no mutable state: each call is independent.
pub struct PaymentProcessor {
    gateway: PaymentGatewayBox,
    logger: LoggerBox,
}

impl PaymentProcessor {
    /// Creates a new `PaymentProcessor`.
    ///
    /// # Arguments
    ///
    /// * `gateway` - The payment provider every operation delegates to.
    /// * `logger` - The sink receiving one line per outcome.
    pub fn new(gateway: PaymentGatewayBox, logger: LoggerBox) -> Self {
        Self { gateway, logger }
    }

    /// Charges `amount` to `user_id`.
    ///
    /// Network and charge failures are absorbed into an unsuccessful result. Any other
    /// gateway failure is returned as `Err(ProcessorError::Gateway)`.
    pub async fn process_payment(
        &self,
        user_id: &str,
        amount: Decimal,
    ) -> Result<TransactionResult, ProcessorError> {
        if is_blank(user_id) {
            return Ok(self.reject(INVALID_USER_ID).await);
        }
        if amount <= Decimal::ZERO {
            return Ok(self.reject(NON_POSITIVE_AMOUNT).await);
        }

        match self.gateway.charge(user_id, amount).await {
            Ok(result) => {
                if result.success {
                    self.logger.log(PAYMENT_SUCCEEDED).await;
                } else {
                    let message = format!("Payment failed: {}", result.message);
                    self.logger.log(&message).await;
                }
                Ok(result)
            }
            Err(GatewayError::Network(message)) => {
                let message = format!("Network error: payment failed. {message}");
                Ok(self.reject(&message).await)
            }
            Err(GatewayError::Charge(message)) => {
                let message = format!("Payment error: {message}");
                Ok(self.reject(&message).await)
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Refunds the transaction identified by `transaction_id`.
    ///
    /// Network and refund failures are absorbed into an unsuccessful result. Any other
    /// gateway failure is returned as `Err(ProcessorError::Gateway)`.
    pub async fn refund_payment(
        &self,
        transaction_id: &str,
    ) -> Result<TransactionResult, ProcessorError> {
        if is_blank(transaction_id) {
            return Ok(self.reject(INVALID_TRANSACTION_ID).await);
        }

        match self.gateway.refund(transaction_id).await {
            Ok(result) => {
                if result.success {
                    self.logger.log(REFUND_SUCCEEDED).await;
                } else {
                    let message = format!("Refund failed: {}", result.message);
                    self.logger.log(&message).await;
                }
                Ok(result)
            }
            Err(GatewayError::Network(message)) => {
                let message = format!("Network error during refund: {message}");
                Ok(self.reject(&message).await)
            }
            Err(GatewayError::Refund(message)) => {
                let message = format!("Refund error: {message}");
                Ok(self.reject(&message).await)
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Looks up the gateway's status for `transaction_id`.
    ///
    /// A blank id fails with `InvalidArgument` before the gateway is called. A network failure
    /// is replaced by `Unavailable` with a fixed message and is not logged.
    pub async fn get_payment_status(
        &self,
        transaction_id: &str,
    ) -> Result<TransactionStatus, ProcessorError> {
        if is_blank(transaction_id) {
            return Err(ProcessorError::InvalidArgument(
                INVALID_TRANSACTION_ID.to_string(),
            ));
        }

        match self.gateway.get_status(transaction_id).await {
            Ok(status) => {
                self.logger.log(&format!("Payment status: {status}")).await;
                Ok(status)
            }
            Err(GatewayError::Network(_)) => {
                Err(ProcessorError::Unavailable(STATUS_UNAVAILABLE.to_string()))
            }
            Err(other) => Err(other.into()),
        }
    }

    async fn reject(&self, message: &str) -> TransactionResult {
        self.logger.log(message).await;
        TransactionResult::failure(message)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
