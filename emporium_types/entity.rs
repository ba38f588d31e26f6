use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

/// A persisted domain object.
///
/// Entities cross the storage seam in their serialized form: every field name
/// is also the name of a column in `TABLE`.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Table (or in-memory collection) holding this entity.
    const TABLE: &'static str;

    fn id(&self) -> Uuid;
}
