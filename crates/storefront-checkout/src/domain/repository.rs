//! Order repository abstraction.

use async_trait::async_trait;
use storefront_core::error::DomainError;
use uuid::Uuid;

use super::aggregates::Order;

/// Repository trait for storing and loading orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order with its items.
    async fn create(&self, order: &Order) -> Result<(), DomainError>;

    /// Load an order with its items. Returns `DomainError::OrderNotFound` when
    /// no order is stored under `id`.
    async fn find(&self, id: Uuid) -> Result<Order, DomainError>;

    /// Load every stored order.
    async fn find_all(&self) -> Result<Vec<Order>, DomainError>;

    /// Overwrite a stored order and replace its items. Returns
    /// `DomainError::OrderNotFound` when no order is stored under `order.id`.
    async fn update(&self, order: &Order) -> Result<(), DomainError>;
}
