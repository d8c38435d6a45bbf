//! Domain types and the capability contracts (ports) the processor depends on.

pub mod command;
pub mod ports;
pub mod transaction;
