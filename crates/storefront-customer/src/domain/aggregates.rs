//! Aggregate roots and value objects for the Customer context.

use std::fmt;

use serde::{Deserialize, Serialize};
use storefront_core::clock::Clock;
use storefront_core::error::DomainError;
use storefront_core::event::EventMetadata;
use uuid::Uuid;

use super::events::{AddressChanged, CustomerCreated, CustomerEvent, CustomerEventKind};

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    /// Creates an address.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if street, zip or city is blank.
    pub fn new(street: &str, number: u32, zip: &str, city: &str) -> Result<Self, DomainError> {
        for (field, value) in [("street", street), ("zip", zip), ("city", city)] {
            if value.trim().is_empty() {
                return Err(DomainError::Validation(format!("address {field} is required")));
            }
        }
        Ok(Self {
            street: street.to_owned(),
            number,
            zip: zip.to_owned(),
            city: city.to_owned(),
        })
    }

    /// Street name.
    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    /// House number.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Postal code.
    #[must_use]
    pub fn zip(&self) -> &str {
        &self.zip
    }

    /// City.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.number, self.street, self.city, self.zip)
    }
}

/// A registered customer.
#[derive(Debug)]
pub struct Customer {
    /// Customer identifier.
    pub id: Uuid,
    name: String,
    address: Option<Address>,
    /// Events raised but not yet published.
    uncommitted_events: Vec<CustomerEvent>,
}

impl Customer {
    /// Registers a customer, recording a `CustomerCreated` event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is blank.
    pub fn create(
        id: Uuid,
        name: &str,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation("customer name is required".into()));
        }

        let mut customer = Self {
            id,
            name: name.to_owned(),
            address: None,
            uncommitted_events: Vec::new(),
        };
        customer.record(
            CustomerEventKind::CustomerCreated(CustomerCreated {
                customer_id: id,
                name: name.to_owned(),
            }),
            correlation_id,
            clock,
        );
        Ok(customer)
    }

    /// Moves the customer to `address`, recording an `AddressChanged` event.
    pub fn change_address(&mut self, address: Address, correlation_id: Uuid, clock: &dyn Clock) {
        let formatted = address.to_string();
        self.address = Some(address);
        self.record(
            CustomerEventKind::AddressChanged(AddressChanged {
                customer_id: self.id,
                name: self.name.clone(),
                address: formatted,
            }),
            correlation_id,
            clock,
        );
    }

    fn record(&mut self, kind: CustomerEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        self.uncommitted_events.push(CustomerEvent {
            metadata: EventMetadata::new(self.id, correlation_id, clock.now()),
            kind,
        });
    }

    /// Customer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current address, if one has been set.
    #[must_use]
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Returns events raised since the last drain.
    #[must_use]
    pub fn uncommitted_events(&self) -> &[CustomerEvent] {
        &self.uncommitted_events
    }

    /// Drains the raised events for publication.
    pub fn take_uncommitted_events(&mut self) -> Vec<CustomerEvent> {
        std::mem::take(&mut self.uncommitted_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::event::DomainEvent;
    use storefront_test_support::{FixedClock, fixed_now};

    use crate::domain::events::{ADDRESS_CHANGED_EVENT_TYPE, CUSTOMER_CREATED_EVENT_TYPE};

    fn any_street() -> Address {
        Address::new("Any Street", 999, "AnyZip", "Any City").unwrap()
    }

    #[test]
    fn test_address_display_lists_number_street_city_zip() {
        assert_eq!(
            any_street().to_string(),
            "999, Any Street, Any City, AnyZip"
        );
    }

    #[test]
    fn test_address_rejects_blank_city() {
        let result = Address::new("Any Street", 1, "AnyZip", "");

        match result.unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("city")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_create_customer_records_customer_created_event() {
        // Arrange
        let customer_id = Uuid::new_v4();
        let correlation_id = Uuid::new_v4();
        let clock = FixedClock(fixed_now());

        // Act
        let customer = Customer::create(customer_id, "Customer 1", correlation_id, &clock).unwrap();

        // Assert
        let events = customer.uncommitted_events();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.event_type(), CUSTOMER_CREATED_EVENT_TYPE);
        assert_eq!(event.metadata().aggregate_id, customer_id);
        assert_eq!(event.metadata().correlation_id, correlation_id);
        assert_eq!(event.metadata().occurred_at, fixed_now());
        assert_eq!(
            event.kind,
            CustomerEventKind::CustomerCreated(CustomerCreated {
                customer_id,
                name: "Customer 1".into(),
            })
        );
    }

    #[test]
    fn test_create_customer_rejects_blank_name() {
        let result = Customer::create(Uuid::new_v4(), "", Uuid::new_v4(), &FixedClock::default());

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_change_address_records_address_changed_event() {
        // Arrange
        let customer_id = Uuid::new_v4();
        let clock = FixedClock::default();
        let mut customer = Customer::create(customer_id, "Cliente 2", Uuid::new_v4(), &clock).unwrap();
        customer.take_uncommitted_events();

        // Act
        customer.change_address(any_street(), Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(customer.address(), Some(&any_street()));
        let events = customer.uncommitted_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), ADDRESS_CHANGED_EVENT_TYPE);
        assert_eq!(
            events[0].to_payload(),
            serde_json::json!({
                "customer_id": customer_id,
                "name": "Cliente 2",
                "address": "999, Any Street, Any City, AnyZip"
            })
        );
    }
}
