//! Application layer for the Product catalog context.

pub mod command_handlers;
pub mod event_handlers;
pub mod mailer;
