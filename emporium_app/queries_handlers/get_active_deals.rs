use async_trait::async_trait;
use chrono::Utc;

use emporium_domain::models::Deal;
use emporium_types::errors::ApplicationError;

use crate::{
    cqrs::{Query, QueryHandler, RequestContext, queries::GetActiveDeals},
    uow::UnitOfWork,
};

pub struct GetActiveDealsHandler {}

impl GetActiveDealsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetActiveDeals> for GetActiveDealsHandler {
    async fn handle(
        &self,
        _query: GetActiveDeals,
        uow: &UnitOfWork,
        _ctx: &RequestContext,
    ) -> Result<<GetActiveDeals as Query>::Output, ApplicationError> {
        let now = Utc::now();
        let mut deals: Vec<Deal> = uow
            .repository::<Deal>()
            .list_all()
            .await?
            .into_iter()
            .filter(|d| d.is_active_at(now))
            .collect();
        deals.sort_by_key(|d| d.end_date);
        Ok(deals)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use emporium_domain::test_utils::{DealFactoryOptions, deal_factory};
    use emporium_types::Result;

    use super::*;
    use crate::test_utils::tests::{open_unit_of_work, request_context};

    #[tokio::test]
    async fn test_only_running_deals_are_returned() -> Result<()> {
        let (_, uow) = open_unit_of_work().await;
        let now = Utc::now();
        let running = deal_factory(DealFactoryOptions {
            name: Some("Running"),
            ..Default::default()
        });
        let expired = deal_factory(DealFactoryOptions {
            name: Some("Expired"),
            start_date: Some(now - Duration::days(10)),
            end_date: Some(now - Duration::days(3)),
            ..Default::default()
        });
        let upcoming = deal_factory(DealFactoryOptions {
            name: Some("Upcoming"),
            start_date: Some(now + Duration::days(1)),
            ..Default::default()
        });

        let repo = uow.repository::<Deal>();
        for deal in [&running, &expired, &upcoming] {
            repo.add(deal).await?;
        }
        uow.complete().await?;

        let deals = GetActiveDealsHandler::new()
            .handle(GetActiveDeals, &uow, &request_context(None))
            .await?;
        assert_eq!(deals, vec![running]);

        uow.dispose().await
    }
}
