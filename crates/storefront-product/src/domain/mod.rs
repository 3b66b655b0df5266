//! Domain layer for the Product catalog context.

pub mod aggregates;
pub mod commands;
pub mod events;
