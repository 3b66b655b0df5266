//! Test events — a `DomainEvent` carrying an arbitrary name and JSON payload.

use storefront_core::event::{DomainEvent, EventMetadata};
use uuid::Uuid;

use crate::clock::fixed_now;

/// An event whose type name and payload are chosen by the test.
#[derive(Debug, Clone)]
pub struct TestEvent {
    event_type: String,
    payload: serde_json::Value,
    metadata: EventMetadata,
}

impl TestEvent {
    /// Create an event of `event_type` carrying `payload`.
    #[must_use]
    pub fn new(event_type: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            event_type: event_type.into(),
            payload,
            metadata: EventMetadata::new(Uuid::new_v4(), Uuid::new_v4(), fixed_now()),
        }
    }
}

impl DomainEvent for TestEvent {
    fn event_type(&self) -> &str {
        &self.event_type
    }

    fn to_payload(&self) -> serde_json::Value {
        self.payload.clone()
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
