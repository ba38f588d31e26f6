use std::sync::Arc;
use tracing::warn;

use emporium_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Command, CommandHandler, Query, QueryHandler, RequestContext},
    services::{RequestScope, ServiceRegistry},
    user_context::UserContext,
};

/// AppBus (Mediator)
/// This struct is the central entry point for all application logic.
/// It does not contain any business logic itself.
/// Its primary roles are:
/// 1. Managing Unit of Work (transaction) lifecycles.
/// 2. Dispatching Commands and Queries to the handler the caller picked.
pub struct AppBus {
    config: Arc<Config>,
    services: ServiceRegistry,
}

impl AppBus {
    pub fn new(config: Arc<Config>, services: ServiceRegistry) -> Self {
        Self { config, services }
    }

    /// Executes a command.
    /// A command is an operation that modifies the system state.
    /// This method:
    /// - Rejects the payload if its rule set fails, before touching storage.
    /// - Opens a scope and resolves the current user once.
    /// - Begins a transaction and passes the UoW to the handler.
    /// - Commits on success, rolls back on failure.
    /// - Disposes the UoW either way.
    pub async fn execute<C, H>(
        &self,
        cmd: C,
        handler: H,
        user_context: Arc<dyn UserContext>,
    ) -> Result<(), ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        cmd.validate().into_result()?;

        let scope = self.services.scope(user_context).await?;
        let result = self.run_command(cmd, handler, &scope).await;

        finish(scope, result).await
    }

    /// Executes a query.
    /// A query is an operation that reads system state and returns data.
    /// It runs without an explicit transaction and never commits.
    pub async fn query<Q, H>(
        &self,
        query: Q,
        handler: H,
        user_context: Arc<dyn UserContext>,
    ) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        let scope = self.services.scope(user_context).await?;
        let result = async {
            let ctx = RequestContext::new(self.config.clone(), scope.current_user().await?);
            handler.handle(query, &scope.uow, &ctx).await
        }
        .await;

        finish(scope, result).await
    }

    async fn run_command<C, H>(
        &self,
        cmd: C,
        handler: H,
        scope: &RequestScope,
    ) -> Result<(), ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        let ctx = RequestContext::new(self.config.clone(), scope.current_user().await?);
        let uow = &scope.uow;

        uow.begin_transaction().await?;

        match handler.handle(cmd, uow, &ctx).await {
            Ok(()) => {
                uow.commit_transaction().await?; // Commit on success
                Ok(())
            }
            Err(e) => {
                // Rollback on failure; the handler's error wins.
                if let Err(rollback_err) = uow.rollback_transaction().await {
                    warn!(error = %rollback_err, "Rollback after failed command also failed");
                }
                Err(e)
            }
        }
    }
}

/// Disposes the scope; an operation error takes precedence over a dispose
/// error.
async fn finish<T>(
    scope: RequestScope,
    result: Result<T, ApplicationError>,
) -> Result<T, ApplicationError> {
    let disposed = scope.finish().await;
    let output = result?;
    disposed?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::sync::Arc;
    use uuid::Uuid;

    use emporium_domain::models::Brand;
    use emporium_types::{
        Result,
        common::CurrentUser,
        errors::{AppError, ApplicationError},
    };

    use super::*;
    use crate::{
        command_handlers::CreateBrandCommandHandler,
        cqrs::{commands::CreateBrand, queries::GetBrandById},
        dto::BrandDto,
        queries_handlers::GetBrandByIdHandler,
        test_utils::tests::{InMemoryStore, InMemoryUnitOfWorkProvider},
        uow::UnitOfWork,
        user_context::ResolvedUserContext,
    };

    fn bus() -> (InMemoryStore, AppBus) {
        let store = InMemoryStore::new();
        let provider = Arc::new(InMemoryUnitOfWorkProvider::new(store.clone()));
        let config = Arc::new(Config::new("postgres://unused".to_string()));
        (store, AppBus::new(config, ServiceRegistry::register(provider)))
    }

    fn anonymous() -> Arc<dyn UserContext> {
        Arc::new(ResolvedUserContext::anonymous())
    }

    /// Writes a brand, then fails.
    struct FailingHandler;

    #[async_trait]
    impl CommandHandler<CreateBrand> for FailingHandler {
        async fn handle(
            &self,
            cmd: CreateBrand,
            uow: &UnitOfWork,
            ctx: &RequestContext,
        ) -> Result<()> {
            let brand = Brand {
                id: cmd.id,
                ..Brand::new(cmd.brand.brand_name, None)
            };
            uow.repository::<Brand>().add(&brand).await?;
            ctx.require_user()?;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_execute_commits_and_query_reads() -> Result<()> {
        let (store, bus) = bus();
        let id = Uuid::new_v4();
        let cmd = CreateBrand {
            id,
            brand: BrandDto {
                brand_name: "Acme".to_string(),
                description: None,
            },
        };

        bus.execute(cmd, CreateBrandCommandHandler::new(), anonymous())
            .await?;
        assert_eq!(store.count("brands"), 1);

        let brand = bus
            .query(GetBrandById { id }, GetBrandByIdHandler::new(), anonymous())
            .await?;
        assert_eq!(brand.brand_name, "Acme");
        Ok(())
    }

    #[tokio::test]
    async fn test_execute_rejects_invalid_payload() -> Result<()> {
        let (store, bus) = bus();
        let cmd = CreateBrand {
            id: Uuid::new_v4(),
            brand: BrandDto {
                brand_name: String::new(),
                description: None,
            },
        };

        let err = bus
            .execute(cmd, CreateBrandCommandHandler::new(), anonymous())
            .await
            .unwrap_err();

        let ApplicationError::Validation(errors) = err else {
            panic!("expected validation failure, got {err:?}");
        };
        assert!(errors.contains("brand_name", "Brand Name can't be blank."));
        assert_eq!(store.count("brands"), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_execute_rolls_back_failed_handler() -> Result<()> {
        let (store, bus) = bus();
        let cmd = CreateBrand {
            id: Uuid::new_v4(),
            brand: BrandDto {
                brand_name: "Acme".to_string(),
                description: None,
            },
        };

        let err = bus
            .execute(cmd.clone(), FailingHandler, anonymous())
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::App(AppError::Unauthenticated)));
        assert_eq!(store.count("brands"), 0);

        let user = CurrentUser::new(Uuid::new_v4(), "a@example.com".to_string());
        bus.execute(
            cmd,
            FailingHandler,
            Arc::new(ResolvedUserContext::authenticated(user)),
        )
        .await?;
        assert_eq!(store.count("brands"), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_query_not_found() -> Result<()> {
        let (_, bus) = bus();
        let err = bus
            .query(
                GetBrandById { id: Uuid::new_v4() },
                GetBrandByIdHandler::new(),
                anonymous(),
            )
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        Ok(())
    }
}
