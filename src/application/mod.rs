//! Application layer orchestrating the payment flows.
//!
//! `PaymentProcessor` validates inputs, delegates to the injected gateway and reports every
//! outcome through the injected logger. `batch` drives the processor from a stream of
//! `Command`s.

pub mod batch;
pub mod processor;
