//! Commands for the Customer context.

use uuid::Uuid;

use super::aggregates::Address;

/// Command to register a customer.
#[derive(Debug, Clone)]
pub struct CreateCustomer {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The customer identifier.
    pub customer_id: Uuid,
    /// Customer name.
    pub name: String,
}

/// Command to move a customer to a new address.
#[derive(Debug, Clone)]
pub struct ChangeAddress {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The new address.
    pub address: Address,
}
