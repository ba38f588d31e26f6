#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use serde_json::Value;
    use std::{
        collections::{BTreeMap, HashMap},
        sync::{
            Arc, Mutex,
            atomic::{AtomicBool, Ordering},
        },
        time::Duration,
    };
    use uuid::Uuid;

    use emporium_types::{
        common::CurrentUser,
        errors::{ApplicationError, DbError},
    };

    use crate::{
        change_set::{Change, ChangeKind},
        config::Config,
        cqrs::RequestContext,
        repository::Filter,
        session::StorageSession,
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    type Tables = HashMap<&'static str, BTreeMap<Uuid, Value>>;

    /// Process-local stand-in for the database, shared by every session
    /// opened on it.
    #[derive(Default, Clone)]
    pub struct InMemoryStore {
        tables: Arc<Mutex<Tables>>,
        fail_next_commit: Arc<AtomicBool>,
        write_delay: Arc<Mutex<Option<Duration>>>,
    }

    impl InMemoryStore {
        pub fn new() -> Self {
            Default::default()
        }

        /// Makes the next commit on any session fail with `CommitRejected`.
        pub fn fail_next_commit(&self) {
            self.fail_next_commit.store(true, Ordering::SeqCst);
        }

        /// Every write on any session sleeps for `delay` first, leaving room
        /// to drop a commit halfway through its flush.
        pub fn delay_writes(&self, delay: Duration) {
            *self.write_delay.lock().unwrap() = Some(delay);
        }

        pub fn count(&self, table: &str) -> usize {
            self.tables
                .lock()
                .unwrap()
                .get(table)
                .map_or(0, BTreeMap::len)
        }
    }

    pub struct InMemorySession {
        store: InMemoryStore,
        // Private copy of the tables while a transaction is open.
        working: Option<Tables>,
    }

    impl InMemorySession {
        pub fn new(store: InMemoryStore) -> Self {
            Self {
                store,
                working: None,
            }
        }

        fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> R {
            match &self.working {
                Some(tables) => f(tables),
                None => f(&self.store.tables.lock().unwrap()),
            }
        }

        fn write<R>(&mut self, f: impl FnOnce(&mut Tables) -> R) -> R {
            match &mut self.working {
                Some(tables) => f(tables),
                None => f(&mut self.store.tables.lock().unwrap()),
            }
        }
    }

    #[async_trait]
    impl StorageSession for InMemorySession {
        async fn begin(&mut self) -> Result<(), ApplicationError> {
            self.working = Some(self.store.tables.lock().unwrap().clone());
            Ok(())
        }

        async fn commit(&mut self) -> Result<(), ApplicationError> {
            let Some(tables) = self.working.take() else {
                return Err(DbError::NoActiveTransaction.into());
            };
            if self.store.fail_next_commit.swap(false, Ordering::SeqCst) {
                return Err(DbError::CommitRejected("injected failure".to_string()).into());
            }
            *self.store.tables.lock().unwrap() = tables;
            Ok(())
        }

        async fn rollback(&mut self) -> Result<(), ApplicationError> {
            self.working = None;
            Ok(())
        }

        async fn fetch_by_id(
            &mut self,
            table: &'static str,
            id: Uuid,
        ) -> Result<Option<Value>, ApplicationError> {
            Ok(self.read(|tables| tables.get(table).and_then(|t| t.get(&id)).cloned()))
        }

        async fn fetch(
            &mut self,
            table: &'static str,
            filter: Option<&Filter>,
        ) -> Result<Vec<Value>, ApplicationError> {
            Ok(self.read(|tables| {
                tables
                    .get(table)
                    .map(|t| {
                        t.values()
                            .filter(|r| filter.is_none_or(|f| f.matches(r)))
                            .cloned()
                            .collect()
                    })
                    .unwrap_or_default()
            }))
        }

        async fn apply(&mut self, change: &Change) -> Result<(), ApplicationError> {
            let (table, id) = (change.table, change.id);
            let delay = *self.store.write_delay.lock().unwrap();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            self.write(|tables| -> Result<(), ApplicationError> {
                let rows = tables.entry(table).or_default();
                match &change.kind {
                    ChangeKind::Added(record) => {
                        if rows.contains_key(&id) {
                            return Err(DbError::DuplicateEntity { table, id }.into());
                        }
                        rows.insert(id, record.clone());
                    }
                    ChangeKind::Modified(record) => match rows.get_mut(&id) {
                        Some(row) => *row = record.clone(),
                        None => return Err(DbError::EntityNotFound { table, id }.into()),
                    },
                    ChangeKind::Removed => {
                        if rows.remove(&id).is_none() {
                            return Err(DbError::EntityNotFound { table, id }.into());
                        }
                    }
                }
                Ok(())
            })
        }

        async fn close(&mut self) -> Result<(), ApplicationError> {
            self.working = None;
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct InMemoryUnitOfWorkProvider {
        store: InMemoryStore,
    }

    impl InMemoryUnitOfWorkProvider {
        pub fn new(store: InMemoryStore) -> Self {
            Self { store }
        }

        pub fn store(&self) -> &InMemoryStore {
            &self.store
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for InMemoryUnitOfWorkProvider {
        async fn open(&self) -> Result<UnitOfWork, ApplicationError> {
            Ok(UnitOfWork::new(Box::new(InMemorySession::new(
                self.store.clone(),
            ))))
        }
    }

    pub fn test_user() -> CurrentUser {
        CurrentUser::new(Uuid::new_v4(), "buyer@example.com".to_string())
    }

    pub fn request_context(current_user: Option<CurrentUser>) -> RequestContext {
        let config = Config::new("postgres://localhost/emporium_test".to_string());
        RequestContext::new(Arc::new(config), current_user)
    }

    /// A unit of work over a fresh in-memory store.
    pub async fn open_unit_of_work() -> (InMemoryStore, UnitOfWork) {
        let provider = InMemoryUnitOfWorkProvider::default();
        let store = provider.store().clone();
        match provider.open().await {
            Ok(uow) => (store, uow),
            Err(e) => panic!("in-memory unit of work failed to open: {e}"),
        }
    }
}
