//! Process-level failures reported by the `stocklist` binary.

use thiserror::Error;

use crate::{config::ConfigError, persist::PersistError, sync::SyncError};

/// Conditions that stop the process before or after the action runs.
#[derive(Debug, Error)]
pub enum AppError {
    /// The config file could not be loaded.
    #[error("{0}")]
    Config(#[from] ConfigError),
    /// The database could not be opened or initialized.
    #[error("cannot open the inventory database: {0}")]
    Open(#[from] PersistError),
    /// The initial projection could not be loaded.
    #[error("cannot load the inventory: {0}")]
    Load(#[from] SyncError),
    /// Releasing the database at shutdown failed.
    #[error("cannot close the inventory database: {0}")]
    Close(#[source] PersistError),
}
