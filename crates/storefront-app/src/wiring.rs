//! Registers the application's event handlers on a fresh dispatcher.

use std::sync::Arc;

use storefront_core::dispatcher::EventDispatcher;
use storefront_customer::application::event_handlers::{
    LogWhenAddressIsChangedHandler, LogWhenCustomerIsCreatedHandler1,
    LogWhenCustomerIsCreatedHandler2,
};
use storefront_customer::domain::events::{
    ADDRESS_CHANGED_EVENT_TYPE, CUSTOMER_CREATED_EVENT_TYPE,
};
use storefront_product::application::event_handlers::SendEmailWhenProductIsCreatedHandler;
use storefront_product::application::mailer::Mailer;
use storefront_product::domain::events::PRODUCT_CREATED_EVENT_TYPE;

/// Builds the dispatcher used for the lifetime of the process.
#[must_use]
pub fn build_dispatcher<M>(mailer: M, catalog_email: &str) -> EventDispatcher
where
    M: Mailer + 'static,
{
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(
        PRODUCT_CREATED_EVENT_TYPE,
        Arc::new(SendEmailWhenProductIsCreatedHandler::new(
            mailer,
            catalog_email,
        )),
    );
    dispatcher.register(
        CUSTOMER_CREATED_EVENT_TYPE,
        Arc::new(LogWhenCustomerIsCreatedHandler1),
    );
    dispatcher.register(
        CUSTOMER_CREATED_EVENT_TYPE,
        Arc::new(LogWhenCustomerIsCreatedHandler2),
    );
    dispatcher.register(
        ADDRESS_CHANGED_EVENT_TYPE,
        Arc::new(LogWhenAddressIsChangedHandler),
    );
    dispatcher
}
