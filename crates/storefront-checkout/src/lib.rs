//! Storefront — Checkout bounded context.
//!
//! Orders, their line items, and the repository contract used to persist
//! them.

pub mod domain;
pub mod in_memory;
