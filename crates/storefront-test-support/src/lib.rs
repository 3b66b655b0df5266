//! Shared test doubles and utilities for Storefront.

mod clock;
mod event;
mod handler;

pub use clock::{FixedClock, fixed_now};
pub use event::TestEvent;
pub use handler::{FailingHandler, Journal, RecordedEvent, RecordingHandler};
