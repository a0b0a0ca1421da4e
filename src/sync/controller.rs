//! Maps discrete user actions onto the synchronizer.
//!
//! The presentation layer implements [`Presenter`]; the controller pulls
//! inputs from it, runs one action to completion, and pushes back notices
//! and the refreshed rows. No UI state is kept here.

use std::path::PathBuf;

use tracing::debug;

use crate::{item::ProjectedRow, persist::RecordStore};

use super::{Confirm, Notice, Outcome, SyncResult, synchronizer::Synchronizer};

/// Presentation collaborator contract.
pub trait Presenter: Confirm {
    /// Raw item name field text.
    fn name_input(&mut self) -> String;
    /// Raw quantity field text.
    fn quantity_input(&mut self) -> String;
    /// Empties both input fields.
    fn clear_inputs(&mut self);
    /// Name on the selected row, if exactly one row is selected.
    fn selected_name(&mut self) -> Option<String>;
    /// Shows a titled message.
    fn notify(&mut self, notice: Notice);
    /// Asks for an export destination. `None` means the dialog was cancelled.
    fn save_path(&mut self) -> Option<PathBuf>;
    /// Displays the current rows.
    fn render(&mut self, rows: &[ProjectedRow]);
}

/// Discrete user actions, one per button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// "Add Item".
    AddItem,
    /// "Delete Item".
    DeleteItem,
    /// "Remove All".
    RemoveAll,
    /// "Save List".
    SaveList,
    /// Redraw from the store without mutating.
    Refresh,
}

/// What a handled action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A new row was added.
    Added(ProjectedRow),
    /// Rows were removed.
    Removed {
        /// Items removed from the store.
        count: usize,
    },
    /// The user declined a confirmation.
    Declined,
    /// The projection was written to this file.
    Saved(PathBuf),
    /// The save dialog was cancelled.
    Cancelled,
    /// The projection was reloaded.
    Refreshed,
}

/// Single-threaded command handler over an owned [`Synchronizer`].
pub struct Controller<S: RecordStore> {
    sync: Synchronizer<S>,
}

impl<S: RecordStore> Controller<S> {
    /// Wraps a synchronizer.
    pub fn new(sync: Synchronizer<S>) -> Self {
        Self { sync }
    }

    /// Borrow of the synchronizer.
    pub fn synchronizer(&self) -> &Synchronizer<S> {
        &self.sync
    }

    /// Releases the synchronizer.
    pub fn into_inner(self) -> Synchronizer<S> {
        self.sync
    }

    /// Runs `action` to completion and renders the result.
    ///
    /// Errors are reported through [`Presenter::notify`] and also returned.
    pub fn handle<P: Presenter>(
        &mut self,
        action: UserAction,
        presenter: &mut P,
    ) -> SyncResult<ActionOutcome> {
        debug!(?action, "handling action");
        let res = self.dispatch(action, presenter);

        match &res {
            Ok(ActionOutcome::Added(_)) => presenter.clear_inputs(),
            Ok(ActionOutcome::Saved(_)) => {
                presenter.notify(Notice::info("Success", "List saved successfully."));
            }
            Ok(_) => {}
            Err(err) => presenter.notify(err.notice()),
        }

        presenter.render(self.sync.projection().rows());
        res
    }

    fn dispatch<P: Presenter>(
        &mut self,
        action: UserAction,
        presenter: &mut P,
    ) -> SyncResult<ActionOutcome> {
        match action {
            UserAction::AddItem => {
                let name = presenter.name_input();
                let quantity = presenter.quantity_input();
                self.sync.add(&name, &quantity).map(ActionOutcome::Added)
            }
            UserAction::DeleteItem => {
                let selected = presenter.selected_name();
                let outcome = self.sync.remove(selected.as_deref(), presenter)?;
                Ok(removal(outcome))
            }
            UserAction::RemoveAll => {
                let outcome = self.sync.remove_all(presenter)?;
                Ok(removal(outcome))
            }
            UserAction::SaveList => {
                let Some(path) = presenter.save_path() else {
                    return Ok(ActionOutcome::Cancelled);
                };
                self.sync.export(path).map(ActionOutcome::Saved)
            }
            UserAction::Refresh => {
                self.sync.reload_projection()?;
                Ok(ActionOutcome::Refreshed)
            }
        }
    }
}

fn removal(outcome: Outcome) -> ActionOutcome {
    match outcome {
        Outcome::Applied { affected } => ActionOutcome::Removed { count: affected },
        Outcome::Declined => ActionOutcome::Declined,
    }
}
