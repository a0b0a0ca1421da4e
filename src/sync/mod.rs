//! Validation, confirmation gating, and projection reconciliation.

/// User-action dispatch against a presentation collaborator.
pub mod controller;
/// Store-plus-projection synchronizer.
pub mod synchronizer;

use thiserror::Error;

use crate::{export::ExportError, persist::PersistError};

/// Prompt shown before deleting the selected item.
pub const CONFIRM_REMOVE: &str = "Are you sure you want to delete the selected item?";
/// Prompt shown before removing every item.
pub const CONFIRM_REMOVE_ALL: &str = "Are you sure you want to remove all items?";

/// Errors surfaced to the user for a single action.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Name or quantity was empty after trimming.
    #[error("item name and quantity are required")]
    IncompleteInput,
    /// Quantity text is not an integer.
    #[error("quantity {0:?} is not an integer")]
    InvalidQuantity(String),
    /// An item with this name is already in the projection.
    #[error("an item named {0:?} already exists")]
    DuplicateItem(String),
    /// Delete requested with no row selected.
    #[error("no item selected")]
    NoSelection,
    /// Writing the export file failed.
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
    /// The record store rejected or failed an operation.
    #[error("store failed: {0}")]
    Store(#[from] PersistError),
}

/// Result alias for synchronizer operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Confirmation of a completed action.
    Info,
    /// A rejected or failed action.
    Error,
}

/// Titled message handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
}

impl Notice {
    /// Informational notice.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Error notice.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl SyncError {
    /// User-facing title and message for this error.
    pub fn notice(&self) -> Notice {
        match self {
            Self::IncompleteInput => Notice::error(
                "Incomplete Information",
                "Please enter item name and quantity.",
            ),
            Self::InvalidQuantity(_) => {
                Notice::error("Invalid input", "Quantity must be an integer.")
            }
            Self::DuplicateItem(_) => Notice::error(
                "Duplicate Item",
                "An item with the same name already exists.",
            ),
            Self::NoSelection => {
                Notice::error("No Item Selected", "Please select an item to delete.")
            }
            Self::Export(err) => Notice::error(
                "Error",
                format!("Failed to save the list. Error: {err}"),
            ),
            Self::Store(err) => Notice::error("Database Error", err.to_string()),
        }
    }
}

/// Yes/no gate for destructive operations.
pub trait Confirm {
    /// Blocks until the user answers `prompt`. `true` means proceed.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Fixed answer, for scripted callers and `--yes`.
impl Confirm for bool {
    fn confirm(&mut self, _prompt: &str) -> bool {
        *self
    }
}

/// Result of a confirmation-gated mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The mutation ran and removed `affected` items.
    Applied {
        /// Items removed from the store.
        affected: usize,
    },
    /// The user declined; nothing changed.
    Declined,
}
