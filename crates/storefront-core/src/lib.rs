//! Storefront Core — shared domain abstractions.
//!
//! This crate defines the event and handler traits every bounded context
//! depends on, together with the in-process [`dispatcher::EventDispatcher`]
//! that broadcasts domain events to registered handlers. It contains no
//! infrastructure code.

pub mod clock;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod handler;
