use tracing::info;

use emporium_app::uow::{UnitOfWork, UnitOfWorkProvider};
use emporium_domain::models::DeliveryMethod;
use emporium_types::errors::ApplicationError;

/// Inserts the default delivery methods when none exist yet. Returns whether
/// anything was written.
pub async fn seed_delivery_methods(
    provider: &dyn UnitOfWorkProvider,
) -> Result<bool, ApplicationError> {
    let uow = provider.open().await?;
    let result = seed_if_empty(&uow).await;
    uow.dispose().await?;
    result
}

async fn seed_if_empty(uow: &UnitOfWork) -> Result<bool, ApplicationError> {
    let repo = uow.repository::<DeliveryMethod>();
    if !repo.list_all().await?.is_empty() {
        return Ok(false);
    }

    for method in DeliveryMethod::defaults() {
        repo.add(&method).await?;
    }
    let written = uow.complete().await?;
    info!(written, "Default delivery methods seeded");
    Ok(true)
}
