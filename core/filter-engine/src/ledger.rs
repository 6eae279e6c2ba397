//! FILENAME: core/filter-engine/src/ledger.rs
//! PURPOSE: Session-scoped bookkeeping of checked and deleted rows.
//! CONTEXT: The ledger is independent of the active filters. Deletion is
//! permanent for the session: the only way back is `reset_all`, which the
//! session layer must invoke on "Clear All" and on dataset-variant
//! toggles. Invariant after every operation: the selected and deleted
//! sets are disjoint.

use catalog::RecordId;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Tracks which row ids are checked and which are hidden for the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowLedger {
    selected: FxHashSet<RecordId>,
    deleted: FxHashSet<RecordId>,
}

impl RowLedger {
    pub fn new() -> Self {
        RowLedger::default()
    }

    pub fn selected(&self) -> &FxHashSet<RecordId> {
        &self.selected
    }

    pub fn deleted(&self) -> &FxHashSet<RecordId> {
        &self.deleted
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn is_deleted(&self, id: &str) -> bool {
        self.deleted.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    /// Flips an id's membership in the selected set. Deleted ids cannot
    /// be selected.
    pub fn toggle_selected(&mut self, id: &str) {
        if self.deleted.contains(id) {
            return;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Replaces the selection with exactly the given ids. Callers pass
    /// the currently *visible* row ids, never the whole dataset. Deleted
    /// ids are filtered out to keep the sets disjoint.
    pub fn select_all<I>(&mut self, visible_ids: I)
    where
        I: IntoIterator<Item = RecordId>,
    {
        self.selected = visible_ids
            .into_iter()
            .filter(|id| !self.deleted.contains(id))
            .collect();
    }

    /// Empties the selected set.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Moves every selected id into the deleted set and empties the
    /// selection, in one step.
    pub fn delete_selected(&mut self) {
        self.deleted.extend(self.selected.drain());
    }

    /// Empties both sets. Required on "Clear All" and on dataset-variant
    /// toggles.
    pub fn reset_all(&mut self) {
        self.selected.clear();
        self.deleted.clear();
    }
}
