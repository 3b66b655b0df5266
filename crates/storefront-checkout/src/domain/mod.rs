//! Domain layer for the Checkout context.

pub mod aggregates;
pub mod repository;
