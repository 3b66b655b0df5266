//! In-process, synchronous event dispatcher.
//!
//! Handlers register under an event-type name; [`EventDispatcher::notify`]
//! runs every handler registered for the event's type, in registration
//! order, on the calling thread.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::DomainError;
use crate::event::DomainEvent;
use crate::handler::EventHandler;

/// A handler as held by the registry.
pub type SharedEventHandler = Arc<dyn EventHandler>;

/// Mapping from event-type name to the handlers registered for it.
pub type EventHandlerRegistry = HashMap<String, Vec<SharedEventHandler>>;

/// Broadcasts domain events to registered handlers.
///
/// Keys are created by [`register`](Self::register) and removed only by
/// [`unregister_all`](Self::unregister_all). Unregistering the last handler
/// of a type leaves the type present with an empty sequence.
#[derive(Debug, Default)]
pub struct EventDispatcher {
    event_handlers: EventHandlerRegistry,
}

impl EventDispatcher {
    /// Creates a dispatcher with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `handler` to the sequence for `event_type`.
    ///
    /// Registering the same handler twice means it runs twice per notify.
    pub fn register(&mut self, event_type: impl Into<String>, handler: SharedEventHandler) {
        let event_type = event_type.into();
        debug!(event_type = %event_type, handler = handler.name(), "registering event handler");
        self.event_handlers
            .entry(event_type)
            .or_default()
            .push(handler);
    }

    /// Removes the first occurrence of `handler` (by identity) from the
    /// sequence for `event_type`. Unknown types and handlers are ignored.
    pub fn unregister(&mut self, event_type: &str, handler: &SharedEventHandler) {
        let Some(handlers) = self.event_handlers.get_mut(event_type) else {
            return;
        };
        if let Some(index) = handlers.iter().position(|h| Arc::ptr_eq(h, handler)) {
            debug!(event_type, handler = handler.name(), "unregistering event handler");
            handlers.remove(index);
        }
    }

    /// Removes every event type and handler.
    pub fn unregister_all(&mut self) {
        debug!(
            event_types = self.event_handlers.len(),
            "unregistering all event handlers"
        );
        self.event_handlers.clear();
    }

    /// Invokes every handler registered for the event's type, in order.
    ///
    /// # Errors
    ///
    /// Returns the first handler failure. Handlers after the failing one are
    /// not invoked.
    pub fn notify(&self, event: &dyn DomainEvent) -> Result<(), DomainError> {
        let event_type = event.event_type();
        let Some(handlers) = self.event_handlers.get(event_type) else {
            debug!(event_type, "no handlers registered");
            return Ok(());
        };
        for handler in handlers {
            debug!(
                event_type,
                handler = handler.name(),
                event_id = %event.metadata().event_id,
                "dispatching event"
            );
            handler.handle(event)?;
        }
        Ok(())
    }

    /// Read-only view of the registry.
    #[must_use]
    pub fn event_handlers(&self) -> &EventHandlerRegistry {
        &self.event_handlers
    }

    /// Handlers registered for `event_type`, if the type is known.
    #[must_use]
    pub fn handlers_for(&self, event_type: &str) -> Option<&[SharedEventHandler]> {
        self.event_handlers.get(event_type).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dispatcher_has_empty_registry() {
        let dispatcher = EventDispatcher::new();

        assert!(dispatcher.event_handlers().is_empty());
    }

    #[test]
    fn test_handlers_for_unknown_event_type_is_none() {
        let dispatcher = EventDispatcher::new();

        assert!(dispatcher.handlers_for("NeverRegistered").is_none());
    }

    #[test]
    fn test_unregister_all_on_empty_dispatcher_is_noop() {
        let mut dispatcher = EventDispatcher::default();

        dispatcher.unregister_all();

        assert!(dispatcher.event_handlers().is_empty());
    }
}
