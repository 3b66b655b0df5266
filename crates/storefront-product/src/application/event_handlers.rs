//! Event handlers reacting to Product catalog events.

use serde::Deserialize;
use storefront_core::error::DomainError;
use storefront_core::event::DomainEvent;
use storefront_core::handler::{EventHandler, decode_payload};

use super::mailer::{Email, Mailer};

/// The part of a `ProductCreated` payload the email needs. Identifiers are
/// not required.
#[derive(Debug, Deserialize)]
struct CreatedProductSummary {
    name: String,
    #[serde(default)]
    description: String,
    price: f64,
}

/// Mails `recipient` whenever a product is created.
#[derive(Debug)]
pub struct SendEmailWhenProductIsCreatedHandler<M> {
    mailer: M,
    recipient: String,
}

impl<M: Mailer> SendEmailWhenProductIsCreatedHandler<M> {
    /// Creates the handler.
    #[must_use]
    pub fn new(mailer: M, recipient: impl Into<String>) -> Self {
        Self {
            mailer,
            recipient: recipient.into(),
        }
    }
}

impl<M: Mailer> EventHandler for SendEmailWhenProductIsCreatedHandler<M> {
    fn handle(&self, event: &dyn DomainEvent) -> Result<(), DomainError> {
        let created: CreatedProductSummary = decode_payload(self, event)?;
        let email = Email {
            to: self.recipient.clone(),
            subject: format!("New product: {}", created.name),
            body: format!(
                "{} ({}) was added to the catalog at {:.2}.",
                created.name, created.description, created.price
            ),
        };
        self.mailer.send(&email)
    }

    fn name(&self) -> &'static str {
        "send_email_when_product_is_created"
    }
}
