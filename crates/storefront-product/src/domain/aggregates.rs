//! Aggregate roots for the Product catalog context.

use storefront_core::clock::Clock;
use storefront_core::error::DomainError;
use storefront_core::event::EventMetadata;
use uuid::Uuid;

use super::events::{ProductCreated, ProductEvent};

/// A product in the catalog.
#[derive(Debug)]
pub struct Product {
    /// Product identifier.
    pub id: Uuid,
    name: String,
    description: String,
    price: f64,
    /// Events raised but not yet published.
    uncommitted_events: Vec<ProductEvent>,
}

impl Product {
    /// Creates a product, recording a `ProductCreated` event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is blank or the price is
    /// negative or not a number.
    pub fn create(
        id: Uuid,
        name: &str,
        description: &str,
        price: f64,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation("product name is required".into()));
        }
        if price.is_nan() || price < 0.0 {
            return Err(DomainError::Validation(format!(
                "product price must be non-negative, got {price}"
            )));
        }

        let event = ProductEvent {
            metadata: EventMetadata::new(id, correlation_id, clock.now()),
            payload: ProductCreated {
                product_id: id,
                name: name.to_owned(),
                description: description.to_owned(),
                price,
            },
        };

        Ok(Self {
            id,
            name: name.to_owned(),
            description: description.to_owned(),
            price,
            uncommitted_events: vec![event],
        })
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the unit price.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns events raised since the last drain.
    #[must_use]
    pub fn uncommitted_events(&self) -> &[ProductEvent] {
        &self.uncommitted_events
    }

    /// Drains the raised events for publication.
    pub fn take_uncommitted_events(&mut self) -> Vec<ProductEvent> {
        std::mem::take(&mut self.uncommitted_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use storefront_core::event::DomainEvent;

    use crate::domain::events::PRODUCT_CREATED_EVENT_TYPE;

    #[derive(Debug)]
    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn test_create_product_records_product_created_event() {
        // Arrange
        let product_id = Uuid::new_v4();
        let correlation_id = Uuid::new_v4();
        let fixed_now = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        let clock = FixedClock(fixed_now);

        // Act
        let product = Product::create(
            product_id,
            "Product 1",
            "Product 1 description",
            10.0,
            correlation_id,
            &clock,
        )
        .unwrap();

        // Assert
        let events = product.uncommitted_events();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.event_type(), PRODUCT_CREATED_EVENT_TYPE);

        let meta = event.metadata();
        assert_eq!(meta.aggregate_id, product_id);
        assert_eq!(meta.correlation_id, correlation_id);
        assert_eq!(meta.occurred_at, fixed_now);

        assert_eq!(event.payload.name, "Product 1");
        assert_eq!(event.payload.description, "Product 1 description");
        assert!((event.payload.price - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_create_product_rejects_blank_name() {
        let clock = FixedClock(Utc::now());

        let result = Product::create(Uuid::new_v4(), "  ", "", 1.0, Uuid::new_v4(), &clock);

        match result.unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("name")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_create_product_rejects_negative_price() {
        let clock = FixedClock(Utc::now());

        let result = Product::create(Uuid::new_v4(), "Widget", "", -1.0, Uuid::new_v4(), &clock);

        match result.unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("-1")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_take_uncommitted_events_drains() {
        let clock = FixedClock(Utc::now());
        let mut product =
            Product::create(Uuid::new_v4(), "Widget", "", 1.0, Uuid::new_v4(), &clock).unwrap();

        let drained = product.take_uncommitted_events();

        assert_eq!(drained.len(), 1);
        assert!(product.uncommitted_events().is_empty());
    }
}
