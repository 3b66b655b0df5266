//! Event handler abstraction.

use serde::de::DeserializeOwned;

use crate::error::DomainError;
use crate::event::DomainEvent;

/// A unit of reaction logic invoked when a matching event is dispatched.
pub trait EventHandler: Send + Sync + std::fmt::Debug {
    /// Reacts to `event`. Side effects (logging, mail, external state) must
    /// complete before this returns.
    ///
    /// # Errors
    ///
    /// Returns whatever failure the reaction produces. The dispatcher hands
    /// it back to the caller of `notify` untouched.
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), DomainError>;

    /// Name used in log fields and error messages.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Decodes the payload of `event` into the type a handler expects.
///
/// # Errors
///
/// Returns `DomainError::Handler` naming `handler` if the payload does not
/// match `T`.
pub fn decode_payload<T: DeserializeOwned>(
    handler: &dyn EventHandler,
    event: &dyn DomainEvent,
) -> Result<T, DomainError> {
    serde_json::from_value(event.to_payload()).map_err(|e| DomainError::Handler {
        handler: handler.name().to_owned(),
        message: format!("unexpected payload for {}: {e}", event.event_type()),
    })
}
