//! Aggregate roots for the Checkout context.

use storefront_core::error::DomainError;
use uuid::Uuid;

/// A line of an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    /// Line identifier.
    pub id: Uuid,
    /// Product name at the time of ordering.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// The ordered product.
    pub product_id: Uuid,
    /// Number of units.
    pub quantity: u32,
}

impl OrderItem {
    /// Creates a line item.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the quantity is zero or the price
    /// is negative.
    pub fn new(
        id: Uuid,
        name: &str,
        price: f64,
        product_id: Uuid,
        quantity: u32,
    ) -> Result<Self, DomainError> {
        if quantity == 0 {
            return Err(DomainError::Validation(format!(
                "item {id}: quantity must be greater than zero"
            )));
        }
        if price.is_nan() || price < 0.0 {
            return Err(DomainError::Validation(format!(
                "item {id}: price must be non-negative, got {price}"
            )));
        }
        Ok(Self {
            id,
            name: name.to_owned(),
            price,
            product_id,
            quantity,
        })
    }

    /// Price times quantity.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// An order placed by a customer.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Order identifier.
    pub id: Uuid,
    customer_id: Uuid,
    items: Vec<OrderItem>,
}

impl Order {
    /// Creates an order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `items` is empty.
    pub fn new(id: Uuid, customer_id: Uuid, items: Vec<OrderItem>) -> Result<Self, DomainError> {
        if items.is_empty() {
            return Err(DomainError::Validation(format!(
                "order {id}: at least one item is required"
            )));
        }
        Ok(Self {
            id,
            customer_id,
            items,
        })
    }

    /// The ordering customer.
    #[must_use]
    pub fn customer_id(&self) -> Uuid {
        self.customer_id
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Appends a line item.
    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, quantity: u32) -> OrderItem {
        OrderItem::new(Uuid::new_v4(), "Item", price, Uuid::new_v4(), quantity).unwrap()
    }

    #[test]
    fn test_order_total_sums_item_totals() {
        let order = Order::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            vec![item(10.0, 2), item(5.5, 1)],
        )
        .unwrap();

        assert!((order.total() - 25.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_order_requires_at_least_one_item() {
        let result = Order::new(Uuid::new_v4(), Uuid::new_v4(), vec![]);

        match result.unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("at least one item")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_order_item_rejects_zero_quantity() {
        let result = OrderItem::new(Uuid::new_v4(), "Item", 1.0, Uuid::new_v4(), 0);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_add_item_increases_total() {
        let mut order = Order::new(Uuid::new_v4(), Uuid::new_v4(), vec![item(1.0, 1)]).unwrap();

        order.add_item(item(2.0, 3));

        assert_eq!(order.items().len(), 2);
        assert!((order.total() - 7.0).abs() < f64::EPSILON);
    }
}
