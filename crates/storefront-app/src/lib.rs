//! Storefront application — wires the event dispatcher, handlers and order
//! persistence together for the `storefront` binary.

pub mod config;
pub mod error;
pub mod flow;
pub mod telemetry;
pub mod wiring;
