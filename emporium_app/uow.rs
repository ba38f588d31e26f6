use std::{
    any::{Any, TypeId},
    collections::HashMap,
    marker::PhantomData,
    sync::{Arc, Mutex as StdMutex, PoisonError},
};
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use emporium_types::{
    entity::Entity,
    errors::{ApplicationError, DbError},
};

use crate::{
    change_set::{ChangeKind, ChangeSet},
    repository::{Filter, Repository},
    session::StorageSession,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    Idle,
    Open,
    /// A commit or complete started writing and never finished, usually
    /// because its future was dropped. The next call rolls it back.
    Flushing,
}

/// State shared between a unit of work and the repositories it issued.
struct ScopeState {
    session: Box<dyn StorageSession>,
    state: TransactionState,
    changes: ChangeSet,
    disposed: bool,
}

impl ScopeState {
    fn ensure_live(&self) -> Result<(), DbError> {
        if self.disposed {
            return Err(DbError::UnitOfWorkDisposed);
        }
        Ok(())
    }

    /// Fails on a disposed scope. A scope left mid-flush is rolled back
    /// first, so nothing written by the interrupted flush survives.
    async fn ensure_ready(&mut self) -> Result<(), ApplicationError> {
        self.ensure_live()?;

        if self.state == TransactionState::Flushing {
            warn!("Previous commit was interrupted, rolling back its writes");
            self.abort().await;
            return Err(DbError::InterruptedCommit.into());
        }
        Ok(())
    }

    /// Writes every staged change through the session, stopping at the first
    /// failure, then commits. The change set is only cleared once the
    /// session has committed.
    async fn flush_and_commit(&mut self) -> Result<u64, ApplicationError> {
        for change in self.changes.iter() {
            self.session.apply(change).await?;
        }
        self.session.commit().await?;

        let written = self.changes.len() as u64;
        self.changes.clear();
        self.state = TransactionState::Idle;
        Ok(written)
    }

    /// Best effort: the original failure is what the caller needs to see.
    async fn abort(&mut self) {
        if let Err(e) = self.session.rollback().await {
            warn!(error = %e, "Rollback after failed flush also failed");
        }
        self.changes.clear();
        self.state = TransactionState::Idle;
    }
}

/// A Unit of Work (UoW) is one atomic boundary of change.
///
/// It hands out one repository per entity type, all sharing the same storage
/// session, and either persists everything they staged or nothing.
///
/// ```text
/// Idle --begin_transaction--> Open --commit/rollback--> Idle
///                               \--commit dropped mid-flush--> Flushing
/// ```
///
/// `complete` runs a short implicit transaction and is only valid when Idle.
/// A scope left in `Flushing` is rolled back by whatever touches it next,
/// which then fails with `DbError::InterruptedCommit`.
/// A UoW serves one logical operation at a time and must be disposed at the
/// end of it.
pub struct UnitOfWork {
    scope: Arc<Mutex<ScopeState>>,
    repositories: StdMutex<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl UnitOfWork {
    pub fn new(session: Box<dyn StorageSession>) -> Self {
        Self {
            scope: Arc::new(Mutex::new(ScopeState {
                session,
                state: TransactionState::Idle,
                changes: ChangeSet::new(),
                disposed: false,
            })),
            repositories: StdMutex::new(HashMap::new()),
        }
    }

    /// Returns the repository for `T`, building it on first use. Every call
    /// for the same `T` returns the same handle.
    pub fn repository<T: Entity>(&self) -> Arc<dyn Repository<T>> {
        let mut cache = self
            .repositories
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(repo) = cache
            .get(&TypeId::of::<T>())
            .and_then(|r| r.downcast_ref::<Arc<dyn Repository<T>>>())
        {
            return repo.clone();
        }

        let repo: Arc<dyn Repository<T>> = Arc::new(ScopedRepository::<T>::new(self.scope.clone()));
        cache.insert(TypeId::of::<T>(), Box::new(repo.clone()));
        repo
    }

    pub async fn begin_transaction(&self) -> Result<(), ApplicationError> {
        let mut scope = self.scope.lock().await;
        scope.ensure_ready().await?;

        if scope.state == TransactionState::Open {
            return Err(DbError::TransactionAlreadyOpen.into());
        }

        scope.session.begin().await?;
        scope.state = TransactionState::Open;
        debug!("Transaction opened");
        Ok(())
    }

    /// Persists every staged change and commits. On any failure the
    /// transaction is rolled back, staged changes are dropped and the error
    /// is returned. Returns the number of entities written.
    ///
    /// Dropping the returned future before it resolves leaves the scope in
    /// `Flushing`; nothing it wrote is ever committed.
    pub async fn commit_transaction(&self) -> Result<u64, ApplicationError> {
        let mut scope = self.scope.lock().await;
        scope.ensure_ready().await?;

        if scope.state != TransactionState::Open {
            return Err(DbError::NoActiveTransaction.into());
        }

        scope.state = TransactionState::Flushing;
        match scope.flush_and_commit().await {
            Ok(written) => {
                debug!(written, "Transaction committed");
                Ok(written)
            }
            Err(e) => {
                warn!(error = %e, "Commit failed, rolling back transaction");
                scope.abort().await;
                Err(e)
            }
        }
    }

    /// Discards staged changes and rolls back. Does nothing when no
    /// transaction is open.
    pub async fn rollback_transaction(&self) -> Result<(), ApplicationError> {
        let mut scope = self.scope.lock().await;
        scope.ensure_live()?;

        match scope.state {
            TransactionState::Idle => return Ok(()),
            TransactionState::Flushing => {
                scope.abort().await;
                debug!("Interrupted commit rolled back");
                return Ok(());
            }
            TransactionState::Open => {}
        }

        scope.changes.clear();
        scope.state = TransactionState::Idle;
        scope.session.rollback().await?;
        debug!("Transaction rolled back");
        Ok(())
    }

    /// Persists staged changes in one implicit transaction and returns the
    /// number of entities affected. Fails with
    /// `DbError::CompleteWithinTransaction` while an explicit transaction is
    /// open.
    pub async fn complete(&self) -> Result<u64, ApplicationError> {
        let mut scope = self.scope.lock().await;
        scope.ensure_ready().await?;

        if scope.state == TransactionState::Open {
            return Err(DbError::CompleteWithinTransaction.into());
        }
        if scope.changes.is_empty() {
            return Ok(0);
        }

        // Set before BEGIN: a future dropped while BEGIN is in flight may
        // still leave the session inside a transaction.
        scope.state = TransactionState::Flushing;
        let result = match scope.session.begin().await {
            Ok(()) => scope.flush_and_commit().await,
            Err(e) => Err(e),
        };

        match result {
            Ok(written) => {
                debug!(written, "Changes completed");
                Ok(written)
            }
            Err(e) => {
                warn!(error = %e, "Implicit transaction failed, rolling back");
                scope.abort().await;
                Err(e)
            }
        }
    }

    pub async fn transaction_state(&self) -> TransactionState {
        self.scope.lock().await.state
    }

    /// Number of staged, not yet persisted, entity changes.
    pub async fn pending_changes(&self) -> usize {
        self.scope.lock().await.changes.len()
    }

    /// Rolls back an open transaction, releases the session and invalidates
    /// every repository this unit of work issued.
    pub async fn dispose(self) -> Result<(), ApplicationError> {
        let mut scope = self.scope.lock().await;
        if scope.disposed {
            return Ok(());
        }
        scope.disposed = true;
        scope.changes.clear();

        let rolled_back = if scope.state != TransactionState::Idle {
            warn!("Disposing unit of work with an open transaction, rolling back");
            scope.state = TransactionState::Idle;
            scope.session.rollback().await
        } else {
            Ok(())
        };
        let closed = scope.session.close().await;
        drop(scope);

        self.repositories
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();

        rolled_back?;
        closed
    }
}

impl Drop for UnitOfWork {
    fn drop(&mut self) {
        if let Ok(scope) = self.scope.try_lock() {
            if !scope.disposed && scope.state != TransactionState::Idle {
                warn!("Unit of work dropped with an open transaction; it will not be committed");
            }
        }
    }
}

/// A factory for Unit of Work instances.
#[async_trait::async_trait]
pub trait UnitOfWorkProvider: Send + Sync {
    /// Opens a new Unit of Work on a fresh storage session.
    async fn open(&self) -> Result<UnitOfWork, ApplicationError>;
}

/// The generic repository handed out by [`UnitOfWork::repository`].
struct ScopedRepository<T> {
    scope: Arc<Mutex<ScopeState>>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> ScopedRepository<T> {
    fn new(scope: Arc<Mutex<ScopeState>>) -> Self {
        Self {
            scope,
            _entity: PhantomData,
        }
    }

    fn decode(records: Vec<serde_json::Value>) -> Result<Vec<T>, ApplicationError> {
        records
            .into_iter()
            .map(|r| serde_json::from_value(r).map_err(ApplicationError::from))
            .collect()
    }

    async fn fetch(&self, filter: Option<&Filter>) -> Result<Vec<T>, ApplicationError> {
        let mut guard = self.scope.lock().await;
        let scope = &mut *guard;
        scope.ensure_ready().await?;

        let records = scope.session.fetch(T::TABLE, filter).await?;
        Self::decode(scope.changes.overlay(T::TABLE, records, filter))
    }
}

#[async_trait::async_trait]
impl<T: Entity> Repository<T> for ScopedRepository<T> {
    async fn add(&self, entity: &T) -> Result<(), ApplicationError> {
        let record = serde_json::to_value(entity)?;
        let mut scope = self.scope.lock().await;
        scope.ensure_ready().await?;

        scope.changes.stage_add(T::TABLE, entity.id(), record)?;
        Ok(())
    }

    async fn update(&self, entity: &T) -> Result<(), ApplicationError> {
        let record = serde_json::to_value(entity)?;
        let mut scope = self.scope.lock().await;
        scope.ensure_ready().await?;

        scope.changes.stage_update(T::TABLE, entity.id(), record)?;
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<(), ApplicationError> {
        let mut scope = self.scope.lock().await;
        scope.ensure_ready().await?;

        scope.changes.stage_remove(T::TABLE, id);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, ApplicationError> {
        let mut guard = self.scope.lock().await;
        let scope = &mut *guard;
        scope.ensure_ready().await?;

        let record = match scope.changes.pending(T::TABLE, id).cloned() {
            Some(ChangeKind::Removed) => None,
            Some(ChangeKind::Added(staged) | ChangeKind::Modified(staged)) => Some(staged),
            None => scope.session.fetch_by_id(T::TABLE, id).await?,
        };

        Ok(record.map(serde_json::from_value).transpose()?)
    }

    async fn find(&self, filter: &Filter) -> Result<Vec<T>, ApplicationError> {
        self.fetch(Some(filter)).await
    }

    async fn list_all(&self) -> Result<Vec<T>, ApplicationError> {
        self.fetch(None).await
    }
}
