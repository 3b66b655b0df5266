//! Command handlers for the Customer context.
//!
//! Each handler executes domain logic and then publishes the raised events
//! through the dispatcher before returning.

use storefront_core::clock::Clock;
use storefront_core::dispatcher::EventDispatcher;
use storefront_core::error::DomainError;
use tracing::instrument;

use crate::domain::aggregates::Customer;
use crate::domain::commands::{ChangeAddress, CreateCustomer};

/// Drains the customer's raised events and notifies each in order.
///
/// Stops at the first handler failure; events after it are dropped.
fn publish_events(customer: &mut Customer, dispatcher: &EventDispatcher) -> Result<(), DomainError> {
    for event in customer.take_uncommitted_events() {
        dispatcher.notify(&event)?;
    }
    Ok(())
}

/// Handles the `CreateCustomer` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a blank name, or the first handler
/// failure raised while publishing.
#[instrument(skip(command, clock, dispatcher), fields(customer_id = %command.customer_id))]
pub fn handle_create_customer(
    command: &CreateCustomer,
    clock: &dyn Clock,
    dispatcher: &EventDispatcher,
) -> Result<Customer, DomainError> {
    let mut customer = Customer::create(
        command.customer_id,
        &command.name,
        command.correlation_id,
        clock,
    )?;
    publish_events(&mut customer, dispatcher)?;
    Ok(customer)
}

/// Handles the `ChangeAddress` command against an already loaded customer.
///
/// # Errors
///
/// Returns the first handler failure raised while publishing. The address
/// change itself is kept.
#[instrument(skip(command, customer, clock, dispatcher), fields(customer_id = %customer.id))]
pub fn handle_change_address(
    command: &ChangeAddress,
    customer: &mut Customer,
    clock: &dyn Clock,
    dispatcher: &EventDispatcher,
) -> Result<(), DomainError> {
    customer.change_address(command.address.clone(), command.correlation_id, clock);
    publish_events(customer, dispatcher)
}
