use emporium_domain::models::Vote;
use emporium_types::Result;

use crate::{
    cqrs::{CommandHandler, RequestContext, commands::CastVote},
    repository::Filter,
    uow::UnitOfWork,
};

pub struct CastVoteCommandHandler {}

impl Default for CastVoteCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CastVoteCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CastVote> for CastVoteCommandHandler {
    async fn handle(
        &self,
        command: CastVote,
        uow: &UnitOfWork,
        ctx: &RequestContext,
    ) -> Result<()> {
        let user = ctx.require_user()?;
        let repo = uow.repository::<Vote>();

        // One vote per user and product: the new one replaces the old.
        let previous = repo
            .find(
                &Filter::new()
                    .eq("product_id", command.vote.product_id)
                    .eq("user_id", user.id),
            )
            .await?;
        for vote in previous {
            repo.remove(vote.id).await?;
        }

        let vote = Vote {
            id: command.id,
            ..Vote::new(command.vote.product_id, user.id, command.vote.value)
        };
        repo.add(&vote).await
    }
}
