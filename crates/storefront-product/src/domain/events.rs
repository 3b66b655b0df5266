//! Domain events for the Product catalog context.

use storefront_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event type name for `ProductCreated`.
pub const PRODUCT_CREATED_EVENT_TYPE: &str = "ProductCreatedEvent";

/// Emitted when a product is added to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreated {
    /// The product identifier.
    pub product_id: Uuid,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Unit price.
    pub price: f64,
}

/// Domain event envelope for the Product catalog context.
#[derive(Debug, Clone)]
pub struct ProductEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub payload: ProductCreated,
}

impl DomainEvent for ProductEvent {
    fn event_type(&self) -> &str {
        PRODUCT_CREATED_EVENT_TYPE
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.payload).expect("ProductCreated serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
