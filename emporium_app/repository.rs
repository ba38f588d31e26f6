use uuid::Uuid;

use emporium_types::{
    entity::Entity,
    errors::{ApplicationError, DbError},
};

mod filter;

pub use filter::{Filter, FilterValue};

/// Data access for one entity type, bound to the unit of work that issued it.
///
/// Writes are staged in the unit of work and reach the store on commit (or
/// `complete`); reads see the staged state of the same unit of work.
#[async_trait::async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Stages a new entity.
    async fn add(&self, entity: &T) -> Result<(), ApplicationError>;

    /// Stages the new state of an existing entity.
    async fn update(&self, entity: &T) -> Result<(), ApplicationError>;

    /// Stages the removal of an entity.
    async fn remove(&self, id: Uuid) -> Result<(), ApplicationError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, ApplicationError>;

    /// Returns all entities whose fields equal every constraint in `filter`.
    async fn find(&self, filter: &Filter) -> Result<Vec<T>, ApplicationError>;

    async fn list_all(&self) -> Result<Vec<T>, ApplicationError>;

    /// Like `find_by_id`, but a missing entity is an error.
    async fn get_by_id(&self, id: Uuid) -> Result<T, ApplicationError> {
        self.find_by_id(id).await?.ok_or_else(|| {
            ApplicationError::Db(DbError::EntityNotFound {
                table: T::TABLE,
                id,
            })
        })
    }
}
