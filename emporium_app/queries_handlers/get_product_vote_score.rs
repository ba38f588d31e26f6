use async_trait::async_trait;

use emporium_domain::models::Vote;
use emporium_types::errors::ApplicationError;

use crate::{
    cqrs::{Query, QueryHandler, RequestContext, queries::GetProductVoteScore},
    dto::VoteScore,
    repository::Filter,
    uow::UnitOfWork,
};

pub struct GetProductVoteScoreHandler {}

impl GetProductVoteScoreHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetProductVoteScore> for GetProductVoteScoreHandler {
    async fn handle(
        &self,
        query: GetProductVoteScore,
        uow: &UnitOfWork,
        _ctx: &RequestContext,
    ) -> Result<<GetProductVoteScore as Query>::Output, ApplicationError> {
        let votes = uow
            .repository::<Vote>()
            .find(&Filter::new().eq("product_id", query.product_id))
            .await?;

        let upvotes = votes.iter().filter(|v| v.value > 0).count() as u32;
        let downvotes = votes.iter().filter(|v| v.value < 0).count() as u32;

        Ok(VoteScore {
            product_id: query.product_id,
            upvotes,
            downvotes,
        })
    }
}
