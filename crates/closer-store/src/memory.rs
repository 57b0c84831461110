//! In-memory record store.
//!
//! Tables are created on first use and keep insertion order, so "the first
//! matching row" is deterministic. Every call is counted per table, and an
//! insert failure can be armed to exercise partial-write paths.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::{Filter, Record, RecordStore, StoreError};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CallCounts {
    pub selects: usize,
    pub inserts: usize,
    pub updates: usize,
}

#[derive(Default)]
struct Inner {
    tables: BTreeMap<String, Vec<Record>>,
    calls: BTreeMap<String, CallCounts>,
    inserts_before_failure: Option<usize>,
}

/// A [`RecordStore`] backed by in-process tables.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append rows to `table` without counting them as calls.
    pub fn seed(&self, table: &str, rows: impl IntoIterator<Item = Record>) {
        self.lock()
            .tables
            .entry(table.to_string())
            .or_default()
            .extend(rows);
    }

    /// Snapshot of every row in `table`.
    pub fn rows(&self, table: &str) -> Vec<Record> {
        self.lock().tables.get(table).cloned().unwrap_or_default()
    }

    pub fn calls(&self, table: &str) -> CallCounts {
        self.lock().calls.get(table).copied().unwrap_or_default()
    }

    /// Let `n` more inserts succeed, then fail every insert after them.
    pub fn fail_inserts_after(&self, n: usize) {
        self.lock().inserts_before_failure = Some(n);
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn select(
        &self,
        table: &str,
        filters: &[Filter],
        limit: Option<usize>,
    ) -> Result<Vec<Record>, StoreError> {
        let mut inner = self.lock();
        inner.calls.entry(table.to_string()).or_default().selects += 1;

        let rows = inner.tables.get(table).map(Vec::as_slice).unwrap_or_default();
        Ok(rows
            .iter()
            .filter(|row| filters.iter().all(|f| f.matches(row)))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn insert(&self, table: &str, record: Record) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner.calls.entry(table.to_string()).or_default().inserts += 1;

        if let Some(remaining) = inner.inserts_before_failure.as_mut() {
            if *remaining == 0 {
                return Err(StoreError::Api {
                    table: table.to_string(),
                    status: 503,
                    message: "injected insert failure".into(),
                });
            }
            *remaining -= 1;
        }

        inner
            .tables
            .entry(table.to_string())
            .or_default()
            .push(record);
        Ok(())
    }

    async fn update(
        &self,
        table: &str,
        filters: &[Filter],
        patch: Record,
    ) -> Result<usize, StoreError> {
        if filters.is_empty() {
            return Err(StoreError::UnfilteredUpdate(table.to_string()));
        }
        let mut inner = self.lock();
        inner.calls.entry(table.to_string()).or_default().updates += 1;

        let mut updated = 0;
        for row in inner.tables.entry(table.to_string()).or_default() {
            if filters.iter().all(|f| f.matches(row)) {
                row.extend(patch.clone());
                updated += 1;
            }
        }
        Ok(updated)
    }
}
