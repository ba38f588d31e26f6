use serde_json::Value;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use emporium_types::errors::DbError;

use crate::repository::Filter;

#[derive(Debug, Clone, PartialEq)]
pub enum ChangeKind {
    Added(Value),
    Modified(Value),
    Removed,
}

/// One staged write, already in its storage representation.
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    pub table: &'static str,
    pub id: Uuid,
    pub kind: ChangeKind,
}

/// Writes staged by the repositories of one unit of work, in the order they
/// were first staged. Holds at most one entry per (table, id).
#[derive(Debug, Default)]
pub struct ChangeSet {
    changes: Vec<Change>,
    // (table, id) -> position in `changes`.
    index: HashMap<(&'static str, Uuid), usize>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Change> {
        self.changes.iter()
    }

    pub fn clear(&mut self) {
        self.changes.clear();
        self.index.clear();
    }

    pub fn pending(&self, table: &'static str, id: Uuid) -> Option<&ChangeKind> {
        self.position(table, id).map(|i| &self.changes[i].kind)
    }

    pub fn stage_add(&mut self, table: &'static str, id: Uuid, value: Value) -> Result<(), DbError> {
        match self.position(table, id) {
            None => {
                self.push(Change {
                    table,
                    id,
                    kind: ChangeKind::Added(value),
                });
                Ok(())
            }
            Some(i) => match self.changes[i].kind {
                // The row still exists in the store, so re-adding it is an update.
                ChangeKind::Removed => {
                    self.changes[i].kind = ChangeKind::Modified(value);
                    Ok(())
                }
                ChangeKind::Added(_) | ChangeKind::Modified(_) => {
                    Err(DbError::DuplicateEntity { table, id })
                }
            },
        }
    }

    pub fn stage_update(
        &mut self,
        table: &'static str,
        id: Uuid,
        value: Value,
    ) -> Result<(), DbError> {
        match self.position(table, id) {
            None => {
                self.push(Change {
                    table,
                    id,
                    kind: ChangeKind::Modified(value),
                });
                Ok(())
            }
            Some(i) => {
                let change = &mut self.changes[i];
                change.kind = match change.kind {
                    ChangeKind::Added(_) => ChangeKind::Added(value),
                    ChangeKind::Modified(_) => ChangeKind::Modified(value),
                    ChangeKind::Removed => return Err(DbError::EntityNotFound { table, id }),
                };
                Ok(())
            }
        }
    }

    pub fn stage_remove(&mut self, table: &'static str, id: Uuid) {
        match self.position(table, id) {
            None => self.push(Change {
                table,
                id,
                kind: ChangeKind::Removed,
            }),
            Some(i) => match self.changes[i].kind {
                // Never reached the store: forget it entirely.
                ChangeKind::Added(_) => self.forget(i),
                ChangeKind::Modified(_) => self.changes[i].kind = ChangeKind::Removed,
                ChangeKind::Removed => {}
            },
        }
    }

    /// Merges staged writes for `table` into records read from the store.
    ///
    /// Removed records are dropped, modified ones replaced, and staged records
    /// the store did not return are appended when they match `filter`.
    pub fn overlay(
        &self,
        table: &'static str,
        records: Vec<Value>,
        filter: Option<&Filter>,
    ) -> Vec<Value> {
        let matches = |record: &Value| filter.is_none_or(|f| f.matches(record));
        let mut seen = HashSet::new();
        let mut merged = Vec::with_capacity(records.len());

        for record in records {
            let Some(id) = record_id(&record) else {
                merged.push(record);
                continue;
            };
            seen.insert(id);

            match self.pending(table, id) {
                None => merged.push(record),
                Some(ChangeKind::Removed) => {}
                Some(ChangeKind::Added(staged) | ChangeKind::Modified(staged)) => {
                    if matches(staged) {
                        merged.push(staged.clone());
                    }
                }
            }
        }

        for change in self.changes.iter().filter(|c| c.table == table) {
            if seen.contains(&change.id) {
                continue;
            }
            if let ChangeKind::Added(staged) | ChangeKind::Modified(staged) = &change.kind {
                if matches(staged) {
                    merged.push(staged.clone());
                }
            }
        }

        merged
    }

    fn position(&self, table: &'static str, id: Uuid) -> Option<usize> {
        self.index.get(&(table, id)).copied()
    }

    fn push(&mut self, change: Change) {
        self.index
            .insert((change.table, change.id), self.changes.len());
        self.changes.push(change);
    }

    /// Drops the entry at `i`, shifting the positions of later entries.
    fn forget(&mut self, i: usize) {
        let change = self.changes.remove(i);
        self.index.remove(&(change.table, change.id));
        for later in &self.changes[i..] {
            if let Some(position) = self.index.get_mut(&(later.table, later.id)) {
                *position -= 1;
            }
        }
    }
}

/// The `id` field of a serialized entity.
pub fn record_id(record: &Value) -> Option<Uuid> {
    record
        .get("id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
}
