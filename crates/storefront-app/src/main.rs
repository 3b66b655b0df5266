//! Storefront entry point.

use sqlx::postgres::PgPoolOptions;
use storefront_app::config::AppConfig;
use storefront_app::error::AppError;
use storefront_app::{flow, telemetry, wiring};
use storefront_checkout::domain::repository::OrderRepository;
use storefront_checkout::in_memory::InMemoryOrderRepository;
use storefront_core::clock::SystemClock;
use storefront_order_store::MIGRATOR;
use storefront_order_store::pg_order_repository::PgOrderRepository;
use storefront_product::application::mailer::TracingMailer;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    telemetry::init_tracing(config.log_format);

    tracing::info!("Starting Storefront");

    // One dispatcher for the whole process, passed by reference from here on.
    let dispatcher = wiring::build_dispatcher(TracingMailer, &config.catalog_email);

    let orders: Box<dyn OrderRepository> = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(url)
                .await?;
            MIGRATOR.run(&pool).await?;
            Box::new(PgOrderRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, keeping orders in memory");
            Box::new(InMemoryOrderRepository::new())
        }
    };

    let order = flow::run(Uuid::new_v4(), &dispatcher, &SystemClock, orders.as_ref()).await?;
    tracing::info!(order_id = %order.id, items = order.items().len(), "Storefront flow complete");

    Ok(())
}
