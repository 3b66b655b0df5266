//! The startup flow exercised by the binary: a product and a customer are
//! created, the customer moves, and an order for them is persisted.

use storefront_checkout::domain::aggregates::{Order, OrderItem};
use storefront_checkout::domain::repository::OrderRepository;
use storefront_core::clock::Clock;
use storefront_core::dispatcher::EventDispatcher;
use storefront_core::error::DomainError;
use storefront_customer::application::command_handlers::{
    handle_change_address, handle_create_customer,
};
use storefront_customer::domain::aggregates::Address;
use storefront_customer::domain::commands::{ChangeAddress, CreateCustomer};
use storefront_product::application::command_handlers::handle_create_product;
use storefront_product::domain::commands::CreateProduct;
use tracing::{info, instrument};
use uuid::Uuid;

/// Runs the flow under a single correlation ID and returns the stored order
/// as read back from `orders`.
///
/// # Errors
///
/// Returns the first validation, handler or repository failure.
#[instrument(skip_all, fields(correlation_id = %correlation_id))]
pub async fn run(
    correlation_id: Uuid,
    dispatcher: &EventDispatcher,
    clock: &dyn Clock,
    orders: &dyn OrderRepository,
) -> Result<Order, DomainError> {
    let product = handle_create_product(
        &CreateProduct {
            correlation_id,
            product_id: Uuid::new_v4(),
            name: "Product 1".into(),
            description: "Product 1 description".into(),
            price: 10.0,
        },
        clock,
        dispatcher,
    )?;

    let mut customer = handle_create_customer(
        &CreateCustomer {
            correlation_id,
            customer_id: Uuid::new_v4(),
            name: "Customer 1".into(),
        },
        clock,
        dispatcher,
    )?;

    handle_change_address(
        &ChangeAddress {
            correlation_id,
            address: Address::new("Any Street", 999, "AnyZip", "Any City")?,
        },
        &mut customer,
        clock,
        dispatcher,
    )?;

    let item = OrderItem::new(
        Uuid::new_v4(),
        product.name(),
        product.price(),
        product.id,
        2,
    )?;
    let order = Order::new(Uuid::new_v4(), customer.id, vec![item])?;
    orders.create(&order).await?;
    info!(order_id = %order.id, total = order.total(), "order stored");

    orders.find(order.id).await
}
