//! Storefront — Customer bounded context.
//!
//! Responsible for customer registration and address changes, and for the
//! log reactions to both.

pub mod application;
pub mod domain;
