use crate::application::processor::PaymentProcessor;
use crate::domain::command::{Command, Operation, Outcome};
use crate::domain::transaction::TransactionResult;
use crate::error::ProcessorError;

/// Runs a single command through the processor.
///
/// Status failures raised by the processor itself become unsuccessful outcomes. Gateway
/// failures the processor does not absorb are returned as `Err`.
pub async fn run_command(
    processor: &PaymentProcessor,
    command: Command,
) -> Result<Outcome, ProcessorError> {
    match command.op {
        Operation::Charge => {
            let result = processor
                .process_payment(command.user_id(), command.amount())
                .await?;
            Ok(from_result(Operation::Charge, result))
        }
        Operation::Refund => {
            let result = processor.refund_payment(command.transaction_id()).await?;
            Ok(from_result(Operation::Refund, result))
        }
        Operation::Status => {
            let tx = command.tx.clone();
            match processor
                .get_payment_status(command.transaction_id())
                .await
            {
                Ok(status) => Ok(Outcome {
                    op: Operation::Status,
                    success: true,
                    tx,
                    detail: status.to_string(),
                }),
                Err(e @ ProcessorError::Gateway(_)) => Err(e),
                Err(e) => Ok(Outcome {
                    op: Operation::Status,
                    success: false,
                    tx,
                    detail: e.to_string(),
                }),
            }
        }
    }
}

fn from_result(op: Operation, result: TransactionResult) -> Outcome {
    Outcome {
        op,
        success: result.success,
        tx: result.transaction_id,
        detail: result.message,
    }
}
