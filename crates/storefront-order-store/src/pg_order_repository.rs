//! `PostgreSQL` implementation of the `OrderRepository` trait.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use tracing::instrument;
use uuid::Uuid;

use storefront_checkout::domain::aggregates::{Order, OrderItem};
use storefront_checkout::domain::repository::OrderRepository;
use storefront_core::error::DomainError;

#[derive(Debug, FromRow)]
struct OrderRow {
    id: Uuid,
    customer_id: Uuid,
}

#[derive(Debug, FromRow)]
struct OrderItemRow {
    id: Uuid,
    order_id: Uuid,
    product_id: Uuid,
    name: String,
    price: f64,
    quantity: i32,
}

impl OrderItemRow {
    fn into_item(self) -> Result<OrderItem, DomainError> {
        let quantity = u32::try_from(self.quantity).map_err(|_| {
            DomainError::Infrastructure(format!(
                "stored item {} has invalid quantity {}",
                self.id, self.quantity
            ))
        })?;
        OrderItem::new(self.id, &self.name, self.price, self.product_id, quantity)
            .map_err(corrupt_row)
    }
}

fn infrastructure(err: sqlx::Error) -> DomainError {
    DomainError::Infrastructure(err.to_string())
}

fn corrupt_row(err: DomainError) -> DomainError {
    DomainError::Infrastructure(format!("stored order is invalid: {err}"))
}

fn to_i32(value: u64, what: &str) -> Result<i32, DomainError> {
    i32::try_from(value)
        .map_err(|_| DomainError::Validation(format!("{what} {value} is out of range")))
}

fn to_order(row: OrderRow, items: Vec<OrderItemRow>) -> Result<Order, DomainError> {
    let items = items
        .into_iter()
        .map(OrderItemRow::into_item)
        .collect::<Result<Vec<_>, _>>()?;
    Order::new(row.id, row.customer_id, items).map_err(corrupt_row)
}

/// Inserts the items of `order`, numbering them by position.
async fn insert_items(
    tx: &mut Transaction<'_, Postgres>,
    order: &Order,
) -> Result<(), DomainError> {
    for (position, item) in (0_u64..).zip(order.items()) {
        sqlx::query(
            "INSERT INTO order_items (id, order_id, position, product_id, name, price, quantity)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(item.id)
        .bind(order.id)
        .bind(to_i32(position, "item position")?)
        .bind(item.product_id)
        .bind(&item.name)
        .bind(item.price)
        .bind(to_i32(u64::from(item.quantity), "item quantity")?)
        .execute(&mut **tx)
        .await
        .map_err(infrastructure)?;
    }
    Ok(())
}

/// PostgreSQL-backed order repository.
#[derive(Debug, Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    /// Creates a new `PgOrderRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    async fn create(&self, order: &Order) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(infrastructure)?;

        sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES ($1, $2, $3)")
            .bind(order.id)
            .bind(order.customer_id())
            .bind(order.total())
            .execute(&mut *tx)
            .await
            .map_err(|e| match e.as_database_error() {
                Some(db) if db.is_unique_violation() => {
                    DomainError::Validation(format!("order {} already exists", order.id))
                }
                _ => infrastructure(e),
            })?;
        insert_items(&mut tx, order).await?;

        tx.commit().await.map_err(infrastructure)
    }

    #[instrument(skip(self))]
    async fn find(&self, id: Uuid) -> Result<Order, DomainError> {
        let row = sqlx::query_as::<_, OrderRow>("SELECT id, customer_id FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(infrastructure)?
            .ok_or(DomainError::OrderNotFound(id))?;

        let items = sqlx::query_as::<_, OrderItemRow>(
            "SELECT id, order_id, product_id, name, price, quantity
             FROM order_items WHERE order_id = $1 ORDER BY position",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(infrastructure)?;

        to_order(row, items)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        let rows = sqlx::query_as::<_, OrderRow>("SELECT id, customer_id FROM orders ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(infrastructure)?;

        let item_rows = sqlx::query_as::<_, OrderItemRow>(
            "SELECT id, order_id, product_id, name, price, quantity
             FROM order_items ORDER BY order_id, position",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(infrastructure)?;

        let mut items_by_order: HashMap<Uuid, Vec<OrderItemRow>> = HashMap::new();
        for item in item_rows {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        rows.into_iter()
            .map(|row| {
                let items = items_by_order.remove(&row.id).unwrap_or_default();
                to_order(row, items)
            })
            .collect()
    }

    #[instrument(skip(self, order), fields(order_id = %order.id))]
    async fn update(&self, order: &Order) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(infrastructure)?;

        let updated = sqlx::query("UPDATE orders SET customer_id = $2, total = $3 WHERE id = $1")
            .bind(order.id)
            .bind(order.customer_id())
            .bind(order.total())
            .execute(&mut *tx)
            .await
            .map_err(infrastructure)?;
        if updated.rows_affected() == 0 {
            return Err(DomainError::OrderNotFound(order.id));
        }

        sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(order.id)
            .execute(&mut *tx)
            .await
            .map_err(infrastructure)?;
        insert_items(&mut tx, order).await?;

        tx.commit().await.map_err(infrastructure)
    }
}
