//! Command handlers for the Product catalog context.
//!
//! Each handler executes domain logic and then publishes the raised events
//! through the dispatcher before returning.

use storefront_core::clock::Clock;
use storefront_core::dispatcher::EventDispatcher;
use storefront_core::error::DomainError;
use tracing::instrument;

use crate::domain::aggregates::Product;
use crate::domain::commands::CreateProduct;

/// Handles the `CreateProduct` command: creates the product and notifies
/// every handler registered for its events.
///
/// # Errors
///
/// Returns `DomainError::Validation` for invalid product data, or the first
/// handler failure raised while publishing.
#[instrument(skip(command, clock, dispatcher), fields(product_id = %command.product_id))]
pub fn handle_create_product(
    command: &CreateProduct,
    clock: &dyn Clock,
    dispatcher: &EventDispatcher,
) -> Result<Product, DomainError> {
    let mut product = Product::create(
        command.product_id,
        &command.name,
        &command.description,
        command.price,
        command.correlation_id,
        clock,
    )?;

    for event in product.take_uncommitted_events() {
        dispatcher.notify(&event)?;
    }

    Ok(product)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use storefront_test_support::{FixedClock, RecordingHandler, fixed_now};
    use uuid::Uuid;

    use crate::domain::events::PRODUCT_CREATED_EVENT_TYPE;

    fn create_command() -> CreateProduct {
        CreateProduct {
            correlation_id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            name: "Product 1".into(),
            description: "Product 1 description".into(),
            price: 10.0,
        }
    }

    #[test]
    fn test_handle_create_product_notifies_registered_handlers() {
        // Arrange
        let command = create_command();
        let recorder = Arc::new(RecordingHandler::new("recorder"));
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(PRODUCT_CREATED_EVENT_TYPE, recorder.clone());

        // Act
        let product = handle_create_product(&command, &FixedClock(fixed_now()), &dispatcher)
            .unwrap();

        // Assert
        assert_eq!(product.id, command.product_id);
        assert!(product.uncommitted_events().is_empty());
        let received = recorder.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].event_type, PRODUCT_CREATED_EVENT_TYPE);
        assert_eq!(received[0].payload["name"], "Product 1");
        assert_eq!(
            received[0].payload["product_id"],
            command.product_id.to_string()
        );
    }

    #[test]
    fn test_handle_create_product_without_handlers_succeeds() {
        let dispatcher = EventDispatcher::new();

        let result = handle_create_product(&create_command(), &FixedClock::default(), &dispatcher);

        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_create_product_invalid_data_notifies_nobody() {
        // Arrange
        let mut command = create_command();
        command.price = -5.0;
        let recorder = Arc::new(RecordingHandler::new("recorder"));
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(PRODUCT_CREATED_EVENT_TYPE, recorder.clone());

        // Act
        let result = handle_create_product(&command, &FixedClock::default(), &dispatcher);

        // Assert
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(recorder.call_count(), 0);
    }
}
