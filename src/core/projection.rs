use hashbrown::HashMap;

use crate::item::{ItemRecord, ProjectedRow};

/// Whether the projection reflects the store's latest contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionState {
    /// A mutation was committed and the rows have not been reloaded yet.
    #[default]
    Stale,
    /// Rows match the last `list_all` result.
    Synced,
}

/// Read-only `(name, quantity)` copy of the store, rebuilt in full after every mutation.
#[derive(Debug, Clone, Default)]
pub struct Projection {
    rows: Vec<ProjectedRow>,
    by_name: HashMap<String, Vec<usize>>,
    state: ProjectionState,
}

impl Projection {
    /// Creates an empty, stale projection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows in store order.
    pub fn rows(&self) -> &[ProjectedRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Current sync state.
    pub fn state(&self) -> ProjectionState {
        self.state
    }

    /// Exact, case-sensitive name lookup.
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Rows whose name matches exactly.
    pub fn rows_named(&self, name: &str) -> Vec<&ProjectedRow> {
        self.by_name
            .get(name)
            .map(|idxs| idxs.iter().map(|idx| &self.rows[*idx]).collect())
            .unwrap_or_default()
    }

    /// Discards all rows and rebuilds them from `records`, dropping ids.
    pub fn replace_from(&mut self, records: Vec<ItemRecord>) {
        self.rows.clear();
        self.by_name.clear();

        for (idx, rec) in records.into_iter().enumerate() {
            self.by_name.entry(rec.name.clone()).or_default().push(idx);
            self.rows.push(ProjectedRow::from(rec));
        }
        self.state = ProjectionState::Synced;
    }

    /// Flags the rows as out of date.
    pub fn mark_stale(&mut self) {
        self.state = ProjectionState::Stale;
    }
}
