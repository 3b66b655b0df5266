//! Storefront Order Store — PostgreSQL persistence for orders.

pub mod pg_order_repository;

/// Embedded schema migrations for the order tables.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");
