use emporium_domain::models::Brand;
use emporium_types::Result;

use crate::{
    cqrs::{CommandHandler, RequestContext, commands::CreateBrand},
    uow::UnitOfWork,
};

pub struct CreateBrandCommandHandler {}

impl Default for CreateBrandCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateBrandCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreateBrand> for CreateBrandCommandHandler {
    async fn handle(
        &self,
        command: CreateBrand,
        uow: &UnitOfWork,
        _ctx: &RequestContext,
    ) -> Result<()> {
        let brand = Brand {
            id: command.id,
            ..Brand::new(command.brand.brand_name, command.brand.description)
        };

        uow.repository::<Brand>().add(&brand).await
    }
}
