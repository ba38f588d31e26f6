use async_trait::async_trait;

use emporium_domain::models::Brand;
use emporium_types::errors::ApplicationError;

use crate::{
    cqrs::{Query, QueryHandler, RequestContext, queries::ListBrands},
    uow::UnitOfWork,
};

pub struct ListBrandsHandler {}

impl ListBrandsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListBrands> for ListBrandsHandler {
    async fn handle(
        &self,
        _query: ListBrands,
        uow: &UnitOfWork,
        _ctx: &RequestContext,
    ) -> Result<<ListBrands as Query>::Output, ApplicationError> {
        let mut brands = uow.repository::<Brand>().list_all().await?;
        brands.sort_by(|a, b| a.brand_name.cmp(&b.brand_name));
        Ok(brands)
    }
}
