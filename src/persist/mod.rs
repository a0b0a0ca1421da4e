//! Record store abstraction and its SQLite and in-memory implementations.

/// Non-durable store used by tests and benches.
pub mod memory;
/// SQLite-backed durable store.
pub mod sqlite;

use thiserror::Error;

use crate::{
    item::{ItemDraft, ItemRecord},
    types::ItemId,
};

/// Errors raised by a [`RecordStore`].
#[derive(Debug, Error)]
pub enum PersistError {
    /// Underlying SQLite failure.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// Insert rejected by a store-level uniqueness constraint.
    #[error("an item named {0:?} is already stored")]
    DuplicateName(String),
}

/// Result alias for store operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Options applied when a store is opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Enforce name uniqueness in the store itself, not only in the projection.
    pub unique_names: bool,
}

/// Durable owner of item data. Every mutation is committed before it returns.
pub trait RecordStore {
    /// Appends a new item and returns its freshly assigned id.
    fn insert(&mut self, draft: ItemDraft) -> PersistResult<ItemId>;
    /// Removes every item whose name matches exactly. Returns the removed count.
    fn delete_by_name(&mut self, name: &str) -> PersistResult<usize>;
    /// Removes every item. Returns the removed count.
    fn clear(&mut self) -> PersistResult<usize>;
    /// Returns all live items in insertion order.
    fn list_all(&self) -> PersistResult<Vec<ItemRecord>>;
}
