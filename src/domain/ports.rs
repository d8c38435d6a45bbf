use super::transaction::{TransactionResult, TransactionStatus};
use crate::error::GatewayError;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// External payment provider the processor delegates to.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(
        &self,
        user_id: &str,
        amount: Decimal,
    ) -> Result<TransactionResult, GatewayError>;
    async fn refund(&self, transaction_id: &str) -> Result<TransactionResult, GatewayError>;
    async fn get_status(&self, transaction_id: &str) -> Result<TransactionStatus, GatewayError>;
}

/// Sink for one human-readable line per significant event.
#[async_trait]
pub trait Logger: Send + Sync {
    async fn log(&self, message: &str);
}

pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type LoggerBox = Box<dyn Logger>;
