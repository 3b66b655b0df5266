//! Event handlers reacting to Customer events. All of them only log.
//!
//! The handlers read fields straight from the payload and never reject it:
//! a missing field is logged as `unknown`.

use serde_json::Value;
use storefront_core::error::DomainError;
use storefront_core::event::DomainEvent;
use storefront_core::handler::EventHandler;
use tracing::info;

/// Renders the first of `keys` present in `payload`. Strings are rendered
/// without quotes.
fn field(payload: &Value, keys: &[&str]) -> String {
    match keys.iter().find_map(|key| payload.get(*key)) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "unknown".to_owned(),
        Some(other) => other.to_string(),
    }
}

/// First log reaction to `CustomerCreated`.
#[derive(Debug, Default)]
pub struct LogWhenCustomerIsCreatedHandler1;

impl LogWhenCustomerIsCreatedHandler1 {
    fn message(payload: &Value) -> String {
        format!(
            "first log entry for CustomerCreatedEvent: {} ({})",
            field(payload, &["name"]),
            field(payload, &["customer_id", "id"])
        )
    }
}

impl EventHandler for LogWhenCustomerIsCreatedHandler1 {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), DomainError> {
        info!(event_id = %event.metadata().event_id, "{}", Self::message(&event.to_payload()));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log_when_customer_is_created_1"
    }
}

/// Second log reaction to `CustomerCreated`.
#[derive(Debug, Default)]
pub struct LogWhenCustomerIsCreatedHandler2;

impl LogWhenCustomerIsCreatedHandler2 {
    fn message(payload: &Value) -> String {
        format!(
            "second log entry for CustomerCreatedEvent: {} ({})",
            field(payload, &["name"]),
            field(payload, &["customer_id", "id"])
        )
    }
}

impl EventHandler for LogWhenCustomerIsCreatedHandler2 {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), DomainError> {
        info!(event_id = %event.metadata().event_id, "{}", Self::message(&event.to_payload()));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log_when_customer_is_created_2"
    }
}

/// Logs the new address whenever a customer moves.
#[derive(Debug, Default)]
pub struct LogWhenAddressIsChangedHandler;

impl LogWhenAddressIsChangedHandler {
    fn message(payload: &Value) -> String {
        format!(
            "address of customer {}, {} changed to: {}",
            field(payload, &["customer_id", "id"]),
            field(payload, &["name"]),
            field(payload, &["address"])
        )
    }
}

impl EventHandler for LogWhenAddressIsChangedHandler {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), DomainError> {
        info!(event_id = %event.metadata().event_id, "{}", Self::message(&event.to_payload()));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log_when_address_is_changed"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use serde_json::json;
    use storefront_core::dispatcher::EventDispatcher;
    use storefront_test_support::{Journal, RecordingHandler, TestEvent};
    use uuid::Uuid;

    use crate::domain::events::{
        ADDRESS_CHANGED_EVENT_TYPE, AddressChanged, CUSTOMER_CREATED_EVENT_TYPE, CustomerCreated,
    };

    #[test]
    fn test_customer_created_messages_name_the_customer() {
        let payload = serde_json::to_value(CustomerCreated {
            customer_id: Uuid::nil(),
            name: "Customer 1".into(),
        })
        .unwrap();

        assert_eq!(
            LogWhenCustomerIsCreatedHandler1::message(&payload),
            "first log entry for CustomerCreatedEvent: Customer 1 (00000000-0000-0000-0000-000000000000)"
        );
        assert!(LogWhenCustomerIsCreatedHandler2::message(&payload).starts_with("second"));
    }

    #[test]
    fn test_customer_created_message_without_id_logs_unknown() {
        let message = LogWhenCustomerIsCreatedHandler1::message(&json!({ "name": "Customer 1" }));

        assert_eq!(
            message,
            "first log entry for CustomerCreatedEvent: Customer 1 (unknown)"
        );
    }

    #[test]
    fn test_address_changed_message_contains_new_address() {
        let payload = serde_json::to_value(AddressChanged {
            customer_id: Uuid::nil(),
            name: "Cliente 2".into(),
            address: "999, Any Street, Any City, AnyZip".into(),
        })
        .unwrap();

        let message = LogWhenAddressIsChangedHandler::message(&payload);

        assert_eq!(
            message,
            "address of customer 00000000-0000-0000-0000-000000000000, Cliente 2 changed to: 999, Any Street, Any City, AnyZip"
        );
    }

    #[test]
    fn test_address_changed_message_accepts_numeric_id() {
        let message = LogWhenAddressIsChangedHandler::message(&json!({
            "id": 1234,
            "name": "Cliente 2",
            "address": "999, Any Street, Any City, AnyZip"
        }));

        assert_eq!(
            message,
            "address of customer 1234, Cliente 2 changed to: 999, Any Street, Any City, AnyZip"
        );
    }

    #[test]
    fn test_notify_customer_created_runs_both_log_handlers() {
        // Arrange
        let journal = Journal::default();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(
            CUSTOMER_CREATED_EVENT_TYPE,
            Arc::new(LogWhenCustomerIsCreatedHandler1),
        );
        dispatcher.register(
            CUSTOMER_CREATED_EVENT_TYPE,
            Arc::new(LogWhenCustomerIsCreatedHandler2),
        );
        dispatcher.register(
            CUSTOMER_CREATED_EVENT_TYPE,
            Arc::new(RecordingHandler::with_journal("after", Arc::clone(&journal))),
        );
        let event = TestEvent::new(CUSTOMER_CREATED_EVENT_TYPE, json!({ "name": "Customer 1" }));

        // Act
        let result = dispatcher.notify(&event);

        // Assert
        assert!(result.is_ok());
        assert_eq!(*journal.lock().unwrap(), vec!["after"]);
    }

    #[test]
    fn test_notify_address_changed_runs_log_handler() {
        // Arrange
        let journal = Journal::default();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(
            ADDRESS_CHANGED_EVENT_TYPE,
            Arc::new(LogWhenAddressIsChangedHandler),
        );
        dispatcher.register(
            ADDRESS_CHANGED_EVENT_TYPE,
            Arc::new(RecordingHandler::with_journal("after", Arc::clone(&journal))),
        );
        let event = TestEvent::new(
            ADDRESS_CHANGED_EVENT_TYPE,
            json!({
                "id": 1234,
                "name": "Cliente 2",
                "address": "999, Any Street, Any City, AnyZip"
            }),
        );

        // Act
        let result = dispatcher.notify(&event);

        // Assert
        assert!(result.is_ok());
        assert_eq!(*journal.lock().unwrap(), vec!["after"]);
    }
}
