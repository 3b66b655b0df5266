//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No order is stored under the requested identifier.
    #[error("order not found: {0}")]
    OrderNotFound(Uuid),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),

    /// An event handler failed while reacting to an event.
    #[error("handler {handler} failed: {message}")]
    Handler {
        /// Name of the failing handler.
        handler: String,
        /// What went wrong.
        message: String,
    },
}
