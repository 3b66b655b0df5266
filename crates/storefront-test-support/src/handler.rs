//! Test handlers — `EventHandler` implementations that record or fail.

use std::sync::{Arc, Mutex};

use storefront_core::error::DomainError;
use storefront_core::event::DomainEvent;
use storefront_core::handler::EventHandler;
use uuid::Uuid;

/// Shared log of handler labels, appended in invocation order. Lets a test
/// observe the relative order of several handlers.
pub type Journal = Arc<Mutex<Vec<String>>>;

/// What a `RecordingHandler` saw on one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedEvent {
    /// The event type name.
    pub event_type: String,
    /// The event identifier.
    pub event_id: Uuid,
    /// The event payload.
    pub payload: serde_json::Value,
}

/// A handler that records every event it receives and always succeeds.
#[derive(Debug)]
pub struct RecordingHandler {
    label: String,
    journal: Journal,
    received: Mutex<Vec<RecordedEvent>>,
}

impl RecordingHandler {
    /// Create a recording handler with its own private journal.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_journal(label, Journal::default())
    }

    /// Create a recording handler that also appends `label` to `journal`
    /// on every invocation.
    #[must_use]
    pub fn with_journal(label: impl Into<String>, journal: Journal) -> Self {
        Self {
            label: label.into(),
            journal,
            received: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all events received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn received(&self) -> Vec<RecordedEvent> {
        self.received.lock().unwrap().clone()
    }

    /// Returns how many times `handle` was called.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn call_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

impl EventHandler for RecordingHandler {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), DomainError> {
        self.journal.lock().unwrap().push(self.label.clone());
        self.received.lock().unwrap().push(RecordedEvent {
            event_type: event.event_type().to_owned(),
            event_id: event.metadata().event_id,
            payload: event.to_payload(),
        });
        Ok(())
    }
}

/// A handler that always fails with `DomainError::Handler`. Useful for
/// testing propagation out of `notify`.
#[derive(Debug)]
pub struct FailingHandler {
    label: String,
    journal: Journal,
}

impl FailingHandler {
    /// Create a failing handler that appends `label` to `journal` before
    /// failing.
    #[must_use]
    pub fn new(label: impl Into<String>, journal: Journal) -> Self {
        Self {
            label: label.into(),
            journal,
        }
    }
}

impl EventHandler for FailingHandler {
    fn handle(&self, _event: &dyn DomainEvent) -> Result<(), DomainError> {
        self.journal.lock().unwrap().push(self.label.clone());
        Err(DomainError::Handler {
            handler: self.label.clone(),
            message: "handler failure".into(),
        })
    }
}
