//! Domain layer for the Customer context.

pub mod aggregates;
pub mod commands;
pub mod events;
