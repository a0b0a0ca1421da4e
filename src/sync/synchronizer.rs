use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    core::projection::{Projection, ProjectionState},
    export::{ExportConfig, xlsx},
    item::{ItemDraft, ProjectedRow},
    persist::{PersistError, RecordStore},
    types::Quantity,
};

use super::{CONFIRM_REMOVE, CONFIRM_REMOVE_ALL, Confirm, Outcome, SyncError, SyncResult};

/// Owns the record store and keeps the display projection in step with it.
///
/// Every successful mutation is followed immediately by a full reload, so
/// callers only ever observe a synced projection after an `Ok` return.
pub struct Synchronizer<S: RecordStore> {
    store: S,
    projection: Projection,
    export: ExportConfig,
}

impl<S: RecordStore> Synchronizer<S> {
    /// Takes ownership of `store` and loads the initial projection.
    pub fn new(store: S, export: ExportConfig) -> SyncResult<Self> {
        let mut sync = Self {
            store,
            projection: Projection::new(),
            export,
        };
        sync.reload_projection()?;
        Ok(sync)
    }

    /// Current projection.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Borrow of the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Releases the store, typically to close it at shutdown.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Validates and inserts a new item, then reloads the projection.
    pub fn add(&mut self, name: &str, quantity_text: &str) -> SyncResult<ProjectedRow> {
        let (name, quantity) = match self.validate(name, quantity_text) {
            Ok(valid) => valid,
            Err(err) => {
                warn!(%err, "add rejected");
                return Err(err);
            }
        };

        let draft = ItemDraft::new(name.clone(), quantity);
        match self.store.insert(draft) {
            Ok(id) => debug!(id, "insert committed"),
            Err(PersistError::DuplicateName(name)) => {
                warn!(%name, "store rejected duplicate name");
                self.projection.mark_stale();
                return Err(SyncError::DuplicateItem(name));
            }
            Err(err) => return Err(err.into()),
        }

        self.projection.mark_stale();
        self.reload_projection()?;
        info!(%name, quantity, "item added");
        Ok(ProjectedRow { name, quantity })
    }

    /// Deletes every item named `selected` once the user confirms.
    pub fn remove<C: Confirm + ?Sized>(
        &mut self,
        selected: Option<&str>,
        confirm: &mut C,
    ) -> SyncResult<Outcome> {
        let Some(name) = selected else {
            warn!("remove requested with no selection");
            return Err(SyncError::NoSelection);
        };

        if !confirm.confirm(CONFIRM_REMOVE) {
            debug!(name, "remove declined");
            return Ok(Outcome::Declined);
        }

        let affected = self.store.delete_by_name(name)?;
        self.projection.mark_stale();
        self.reload_projection()?;
        info!(name, affected, "item removed");
        Ok(Outcome::Applied { affected })
    }

    /// Deletes every item once the user confirms.
    pub fn remove_all<C: Confirm + ?Sized>(&mut self, confirm: &mut C) -> SyncResult<Outcome> {
        if !confirm.confirm(CONFIRM_REMOVE_ALL) {
            debug!("remove all declined");
            return Ok(Outcome::Declined);
        }

        let affected = self.store.clear()?;
        self.projection.mark_stale();
        self.reload_projection()?;
        info!(affected, "all items removed");
        Ok(Outcome::Applied { affected })
    }

    /// Replaces the projection with a fresh `list_all` result.
    pub fn reload_projection(&mut self) -> SyncResult<()> {
        let records = self.store.list_all()?;
        self.projection.replace_from(records);
        debug!(rows = self.projection.len(), "projection reloaded");
        Ok(())
    }

    /// Writes the current projection to `path`, enforcing the `.xlsx` extension.
    ///
    /// The store is not re-read; the file holds exactly what is displayed.
    pub fn export(&self, path: impl AsRef<Path>) -> SyncResult<PathBuf> {
        let path = xlsx::write_projection(self.projection.rows(), path, &self.export)
            .inspect_err(|err| warn!(%err, "export failed"))?;
        Ok(path)
    }

    fn validate(&mut self, name: &str, quantity_text: &str) -> SyncResult<(String, Quantity)> {
        let name = name.trim();
        let quantity_text = quantity_text.trim();
        if name.is_empty() || quantity_text.is_empty() {
            return Err(SyncError::IncompleteInput);
        }

        let quantity: Quantity = quantity_text
            .parse()
            .map_err(|_| SyncError::InvalidQuantity(quantity_text.to_string()))?;

        // A failed reload leaves the rows stale; refresh before trusting them.
        if self.projection.state() == ProjectionState::Stale {
            self.reload_projection()?;
        }

        if self.projection.contains_name(name) {
            return Err(SyncError::DuplicateItem(name.to_string()));
        }

        Ok((name.to_string(), quantity))
    }
}
