//! Validating payment processor.
//!
//! `PaymentProcessor` checks inputs, delegates charges, refunds and status lookups to an
//! injected `PaymentGateway`, and reports each outcome through an injected `Logger`.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
