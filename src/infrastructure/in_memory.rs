use crate::domain::ports::PaymentGateway;
use crate::domain::transaction::{TransactionResult, TransactionStatus};
use crate::error::GatewayError;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

const UNREACHABLE: &str = "Gateway unreachable.";

/// A refund only sets `refunded`: the reported status of a refunded charge stays
/// `COMPLETED`, since the status set has no refunded state.
#[derive(Debug, Clone)]
struct Charge {
    status: TransactionStatus,
    refunded: bool,
}

#[derive(Debug, Default)]
struct Ledger {
    next_id: u64,
    charges: HashMap<String, Charge>,
}

impl Ledger {
    fn record(&mut self, status: TransactionStatus) -> String {
        self.next_id += 1;
        let id = format!("txn-{}", self.next_id);
        self.charges.insert(
            id.clone(),
            Charge {
                status,
                refunded: false,
            },
        );
        id
    }
}

/// A deterministic in-memory payment gateway.
///
/// Issues sequential transaction ids (`txn-1`, `txn-2`, ...) and remembers every charge so
/// that refunds and status lookups behave like a provider would. Uses
/// `Arc<RwLock<..>>` so clones observe the same ledger.
#[derive(Debug, Default, Clone)]
pub struct InMemoryGateway {
    ledger: Arc<RwLock<Ledger>>,
    charge_limit: Option<Decimal>,
    offline: bool,
}

impl InMemoryGateway {
    /// Creates a gateway that accepts every charge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declines charges above `limit`.
    pub fn with_charge_limit(mut self, limit: Decimal) -> Self {
        self.charge_limit = Some(limit);
        self
    }

    /// Fails every call with a network failure.
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    fn ensure_reachable(&self) -> Result<(), GatewayError> {
        if self.offline {
            log::warn!("simulated gateway is offline");
            return Err(GatewayError::Network(UNREACHABLE.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PaymentGateway for InMemoryGateway {
    async fn charge(
        &self,
        user_id: &str,
        amount: Decimal,
    ) -> Result<TransactionResult, GatewayError> {
        self.ensure_reachable()?;
        let mut ledger = self.ledger.write().await;

        if self.charge_limit.is_some_and(|limit| amount > limit) {
            let id = ledger.record(TransactionStatus::Failed);
            log::debug!("declined charge {id} of {amount} for {user_id}");
            return Ok(TransactionResult::new(
                false,
                Some(id),
                "Charge declined: amount exceeds limit.",
            ));
        }

        let id = ledger.record(TransactionStatus::Completed);
        log::debug!("accepted charge {id} of {amount} for {user_id}");
        Ok(TransactionResult::new(true, Some(id), "Charge succeeded."))
    }

    async fn refund(&self, transaction_id: &str) -> Result<TransactionResult, GatewayError> {
        self.ensure_reachable()?;
        let mut ledger = self.ledger.write().await;

        let Some(charge) = ledger.charges.get_mut(transaction_id) else {
            return Err(GatewayError::Refund(format!(
                "Unknown transaction {transaction_id}."
            )));
        };
        if charge.refunded {
            return Err(GatewayError::Refund(format!(
                "Transaction {transaction_id} already refunded."
            )));
        }
        if charge.status != TransactionStatus::Completed {
            return Ok(TransactionResult::new(
                false,
                Some(transaction_id.to_string()),
                format!("Transaction {transaction_id} was not completed."),
            ));
        }

        charge.refunded = true;
        log::debug!("refunded {transaction_id}");
        Ok(TransactionResult::new(
            true,
            Some(transaction_id.to_string()),
            "Refund succeeded.",
        ))
    }

    async fn get_status(&self, transaction_id: &str) -> Result<TransactionStatus, GatewayError> {
        self.ensure_reachable()?;
        let ledger = self.ledger.read().await;

        ledger
            .charges
            .get(transaction_id)
            .map(|charge| charge.status)
            .ok_or_else(|| {
                GatewayError::Other(format!("Unknown transaction {transaction_id}."))
            })
    }
}
