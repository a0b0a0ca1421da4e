//! In-memory item table with the same semantics as the SQLite store.

use hashbrown::HashMap;

use crate::{
    item::{ItemDraft, ItemRecord},
    types::ItemId,
};

use super::{PersistError, PersistResult, RecordStore, StoreConfig};

/// Non-durable [`RecordStore`]. Ids are monotonic and never reused.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: HashMap<ItemId, ItemRecord>,
    order: Vec<ItemId>,
    by_name: HashMap<String, Vec<ItemId>>,
    next_id: ItemId,
    config: StoreConfig,
}

impl MemoryRecordStore {
    /// Creates an empty store.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            next_id: 1,
            config,
            ..Self::default()
        }
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no item is stored.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn remove_ids(&mut self, ids: &[ItemId]) {
        for id in ids {
            self.records.remove(id);
        }
        self.order.retain(|id| !ids.contains(id));
    }
}

impl RecordStore for MemoryRecordStore {
    fn insert(&mut self, draft: ItemDraft) -> PersistResult<ItemId> {
        if self.config.unique_names && self.by_name.contains_key(&draft.name) {
            return Err(PersistError::DuplicateName(draft.name));
        }

        let id = self.next_id;
        self.next_id += 1;

        self.by_name.entry(draft.name.clone()).or_default().push(id);
        self.order.push(id);
        self.records.insert(
            id,
            ItemRecord {
                id,
                name: draft.name,
                quantity: draft.quantity,
            },
        );
        Ok(id)
    }

    fn delete_by_name(&mut self, name: &str) -> PersistResult<usize> {
        let Some(ids) = self.by_name.remove(name) else {
            return Ok(0);
        };
        self.remove_ids(&ids);
        Ok(ids.len())
    }

    fn clear(&mut self) -> PersistResult<usize> {
        let count = self.order.len();
        self.records.clear();
        self.order.clear();
        self.by_name.clear();
        Ok(count)
    }

    fn list_all(&self) -> PersistResult<Vec<ItemRecord>> {
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.records.get(id).cloned())
            .collect())
    }
}
