//! Storefront — Product catalog bounded context.
//!
//! Owns product creation and the reaction that mails the catalog team when
//! a product is created.

pub mod application;
pub mod domain;
