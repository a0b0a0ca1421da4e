//! Item domain record, draft, and projected row types.

use serde::{Deserialize, Serialize};

use crate::types::{ItemId, Quantity};

/// Fully materialized, persisted inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Store-assigned identifier.
    pub id: ItemId,
    /// Item name, unique among live items.
    pub name: String,
    /// Item quantity.
    pub quantity: Quantity,
}

/// Insert payload used to create a new [`ItemRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    /// Trimmed, non-empty item name.
    pub name: String,
    /// Parsed quantity.
    pub quantity: Quantity,
}

impl ItemDraft {
    /// Builds a draft from an already validated name and quantity.
    pub fn new(name: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// One row of the display projection. The identity key is never projected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedRow {
    /// Item name.
    pub name: String,
    /// Item quantity.
    pub quantity: Quantity,
}

impl From<ItemRecord> for ProjectedRow {
    fn from(value: ItemRecord) -> Self {
        Self {
            name: value.name,
            quantity: value.quantity,
        }
    }
}
