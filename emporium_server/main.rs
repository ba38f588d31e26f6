use std::sync::Arc;
use tracing::{error, info};

use emporium_app::{bus::AppBus, config::Config, services::ServiceRegistry};
use emporium_db::{
    establish_connection_pool, run_migrations, seed_delivery_methods,
    uow::PostgresUnitOfWorkProvider,
};
use emporium_types::{Result, errors::ApplicationError};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    let config = Arc::new(Config::from_env()?);
    let _log_guard = setup_logging(&config.log_dir);

    let _app_bus = match setup_app(config).await {
        Ok(bus) => bus,
        Err(e) => {
            error!("Startup failed: {e}");
            return Err(e);
        }
    };

    info!("Emporium persistence gateway ready, press Ctrl-C to stop");
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;
    info!("Shutting down");

    Ok(())
}

async fn setup_app(config: Arc<Config>) -> Result<Arc<AppBus>, ApplicationError> {
    let db_pool = establish_connection_pool(&config).await?;
    run_migrations(&db_pool).await?;

    let uow_provider = Arc::new(PostgresUnitOfWorkProvider::new(db_pool));
    match seed_delivery_methods(uow_provider.as_ref()).await? {
        true => info!("Delivery methods seeded."),
        false => info!("Delivery methods already present. Skipping seed."),
    }

    let services = ServiceRegistry::register(uow_provider);
    Ok(Arc::new(AppBus::new(config, services)))
}
