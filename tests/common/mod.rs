#![allow(dead_code)]

use async_trait::async_trait;
use payproc::application::processor::PaymentProcessor;
use payproc::domain::ports::PaymentGateway;
use payproc::domain::transaction::{TransactionResult, TransactionStatus};
use payproc::error::GatewayError;
use payproc::infrastructure::logging::RecordingLogger;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Gateway stub with fixed responses that counts how often each operation is called.
#[derive(Clone)]
pub struct StubPaymentGateway {
    pub charge_result: Result<TransactionResult, GatewayError>,
    pub refund_result: Result<TransactionResult, GatewayError>,
    pub status_result: Result<TransactionStatus, GatewayError>,
    pub charges: Arc<AtomicUsize>,
    pub refunds: Arc<AtomicUsize>,
    pub lookups: Arc<AtomicUsize>,
}

impl Default for StubPaymentGateway {
    fn default() -> Self {
        Self {
            charge_result: Err(GatewayError::Other("charge not configured".to_string())),
            refund_result: Err(GatewayError::Other("refund not configured".to_string())),
            status_result: Err(GatewayError::Other("status not configured".to_string())),
            charges: Arc::new(AtomicUsize::new(0)),
            refunds: Arc::new(AtomicUsize::new(0)),
            lookups: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl StubPaymentGateway {
    pub fn charges(&self) -> usize {
        self.charges.load(Ordering::SeqCst)
    }

    pub fn refunds(&self) -> usize {
        self.refunds.load(Ordering::SeqCst)
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentGateway for StubPaymentGateway {
    async fn charge(
        &self,
        _user_id: &str,
        _amount: Decimal,
    ) -> Result<TransactionResult, GatewayError> {
        self.charges.fetch_add(1, Ordering::SeqCst);
        self.charge_result.clone()
    }

    async fn refund(&self, _transaction_id: &str) -> Result<TransactionResult, GatewayError> {
        self.refunds.fetch_add(1, Ordering::SeqCst);
        self.refund_result.clone()
    }

    async fn get_status(&self, _transaction_id: &str) -> Result<TransactionStatus, GatewayError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.status_result.clone()
    }
}

pub fn processor_with(gateway: &StubPaymentGateway) -> (PaymentProcessor, RecordingLogger) {
    let logger = RecordingLogger::new();
    let processor = PaymentProcessor::new(Box::new(gateway.clone()), Box::new(logger.clone()));
    (processor, logger)
}
