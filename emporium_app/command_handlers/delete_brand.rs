use emporium_domain::models::Brand;
use emporium_types::Result;

use crate::{
    cqrs::{CommandHandler, RequestContext, commands::DeleteBrand},
    uow::UnitOfWork,
};

pub struct DeleteBrandCommandHandler {}

impl Default for DeleteBrandCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeleteBrandCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteBrand> for DeleteBrandCommandHandler {
    async fn handle(
        &self,
        command: DeleteBrand,
        uow: &UnitOfWork,
        _ctx: &RequestContext,
    ) -> Result<()> {
        let repo = uow.repository::<Brand>();
        let brand = repo.get_by_id(command.id).await?;
        repo.remove(brand.id).await
    }
}
