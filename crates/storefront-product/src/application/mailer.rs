//! Outbound mail port.

use storefront_core::error::DomainError;
use tracing::info;

/// A plain-text email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
}

/// Sends email synchronously.
pub trait Mailer: Send + Sync + std::fmt::Debug {
    /// Delivers `email`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if delivery fails.
    fn send(&self, email: &Email) -> Result<(), DomainError>;
}

/// Mailer that writes each email to the log instead of delivering it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMailer;

impl Mailer for TracingMailer {
    fn send(&self, email: &Email) -> Result<(), DomainError> {
        info!(to = %email.to, subject = %email.subject, body = %email.body, "sending email");
        Ok(())
    }
}
