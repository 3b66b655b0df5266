//! Domain events for the Customer context.

use storefront_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event type name for `CustomerCreated`.
pub const CUSTOMER_CREATED_EVENT_TYPE: &str = "CustomerCreatedEvent";
/// Event type name for `AddressChanged`.
pub const ADDRESS_CHANGED_EVENT_TYPE: &str = "AddressChangedEvent";

/// Emitted when a customer registers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreated {
    /// The customer identifier.
    pub customer_id: Uuid,
    /// Customer name.
    pub name: String,
}

/// Emitted when a customer's address changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressChanged {
    /// The customer identifier.
    pub customer_id: Uuid,
    /// Customer name.
    pub name: String,
    /// The new address, formatted for display.
    pub address: String,
}

/// Event payload variants for the Customer context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerEventKind {
    /// A customer has registered.
    CustomerCreated(CustomerCreated),
    /// A customer's address has changed.
    AddressChanged(AddressChanged),
}

/// Domain event envelope for the Customer context.
#[derive(Debug, Clone)]
pub struct CustomerEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: CustomerEventKind,
}

impl DomainEvent for CustomerEvent {
    fn event_type(&self) -> &str {
        match &self.kind {
            CustomerEventKind::CustomerCreated(_) => CUSTOMER_CREATED_EVENT_TYPE,
            CustomerEventKind::AddressChanged(_) => ADDRESS_CHANGED_EVENT_TYPE,
        }
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        let payload = match &self.kind {
            CustomerEventKind::CustomerCreated(payload) => serde_json::to_value(payload),
            CustomerEventKind::AddressChanged(payload) => serde_json::to_value(payload),
        };
        payload.expect("CustomerEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
