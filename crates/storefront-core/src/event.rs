//! Domain event abstractions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata attached to every domain event.
///
/// Informational only: the dispatcher routes on [`DomainEvent::event_type`]
/// and never inspects these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Entity this event is about.
    pub aggregate_id: Uuid,
    /// Correlation ID for tracing an operation through its effects.
    pub correlation_id: Uuid,
    /// When the business fact occurred.
    pub occurred_at: DateTime<Utc>,
}

impl EventMetadata {
    /// Builds metadata for a fresh event about `aggregate_id`.
    #[must_use]
    pub fn new(aggregate_id: Uuid, correlation_id: Uuid, occurred_at: DateTime<Utc>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            aggregate_id,
            correlation_id,
            occurred_at,
        }
    }
}

/// Trait that all domain events implement.
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Returns the event type name. This is the key handlers register under.
    fn event_type(&self) -> &str;

    /// Serializes the event payload to JSON.
    fn to_payload(&self) -> serde_json::Value;

    /// Returns the metadata for this event.
    fn metadata(&self) -> &EventMetadata;
}
