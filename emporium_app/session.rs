use serde_json::Value;
use uuid::Uuid;

use emporium_types::errors::ApplicationError;

use crate::{change_set::Change, repository::Filter};

/// The storage-engine side of a unit of work: one exclusive connection
/// (or equivalent) speaking in serialized records.
///
/// A session is owned by exactly one unit of work, which drives the
/// transaction calls in order; implementations don't need to guard against
/// nested `begin`.
#[async_trait::async_trait]
pub trait StorageSession: Send {
    async fn begin(&mut self) -> Result<(), ApplicationError>;

    async fn commit(&mut self) -> Result<(), ApplicationError>;

    async fn rollback(&mut self) -> Result<(), ApplicationError>;

    async fn fetch_by_id(
        &mut self,
        table: &'static str,
        id: Uuid,
    ) -> Result<Option<Value>, ApplicationError>;

    /// All records of `table`, restricted to `filter` when given.
    async fn fetch(
        &mut self,
        table: &'static str,
        filter: Option<&Filter>,
    ) -> Result<Vec<Value>, ApplicationError>;

    /// Writes one staged change. Updating or removing a missing record fails
    /// with `DbError::EntityNotFound`.
    async fn apply(&mut self, change: &Change) -> Result<(), ApplicationError>;

    /// Releases the underlying connection.
    async fn close(&mut self) -> Result<(), ApplicationError>;
}
