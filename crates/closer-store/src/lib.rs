//! # closer-store
//!
//! Record store access for Closer.
//!
//! The store is treated as a set of named tables of JSON records with three
//! operations: filtered select, insert, and filtered update. There are no
//! transactions across calls. [`RestStore`] talks to a PostgREST endpoint
//! (Supabase); [`MemoryStore`] keeps tables in memory for tests.

mod error;
mod filter;
mod http;
mod memory;
mod rest;

pub use error::StoreError;
pub use filter::Filter;
pub use memory::{CallCounts, MemoryStore};
pub use rest::RestStore;

use async_trait::async_trait;
use serde_json::{Map, Value};

/// One row, keyed by column name.
pub type Record = Map<String, Value>;

/// Filtered read, insert, and filtered update over named tables.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Rows of `table` matching every filter, at most `limit` of them.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport failure or rejection by the store.
    async fn select(
        &self,
        table: &str,
        filters: &[Filter],
        limit: Option<usize>,
    ) -> Result<Vec<Record>, StoreError>;

    /// Insert one row into `table`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport failure or constraint violation.
    async fn insert(&self, table: &str, record: Record) -> Result<(), StoreError>;

    /// Apply `patch` to every row of `table` matching all filters. Returns the
    /// number of rows updated.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnfilteredUpdate`] when `filters` is empty, and
    /// [`StoreError`] on transport failure or rejection by the store.
    async fn update(
        &self,
        table: &str,
        filters: &[Filter],
        patch: Record,
    ) -> Result<usize, StoreError>;
}
