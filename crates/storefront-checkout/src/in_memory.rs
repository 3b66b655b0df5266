//! In-memory `OrderRepository` for tests and database-less runs.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use storefront_core::error::DomainError;
use tracing::debug;
use uuid::Uuid;

use crate::domain::aggregates::Order;
use crate::domain::repository::OrderRepository;

/// Stores orders in a map guarded by a mutex.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<BTreeMap<Uuid, Order>>,
}

impl InMemoryOrderRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<Uuid, Order>>, DomainError> {
        self.orders
            .lock()
            .map_err(|_| DomainError::Infrastructure("order store lock poisoned".into()))
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: &Order) -> Result<(), DomainError> {
        let mut orders = self.lock()?;
        if orders.contains_key(&order.id) {
            return Err(DomainError::Validation(format!(
                "order {} already exists",
                order.id
            )));
        }
        debug!(order_id = %order.id, "storing order");
        orders.insert(order.id, order.clone());
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Order, DomainError> {
        self.lock()?
            .get(&id)
            .cloned()
            .ok_or(DomainError::OrderNotFound(id))
    }

    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.lock()?.values().cloned().collect())
    }

    async fn update(&self, order: &Order) -> Result<(), DomainError> {
        let mut orders = self.lock()?;
        let stored = orders
            .get_mut(&order.id)
            .ok_or(DomainError::OrderNotFound(order.id))?;
        *stored = order.clone();
        Ok(())
    }
}
