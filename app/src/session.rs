//! FILENAME: app/src/session.rs
// PURPOSE: The headless filter session - one user's table state.
// CONTEXT: Owns the dataset store, the draft and committed selections,
//          the row ledger, and the active dataset variant. Every UI
//          action of the filter module maps to one method here; the
//          engine itself stays pure and presentation-free.

use catalog::{Dataset, DatasetStore, DatasetVariant, FacetConfig, ScriptRecord};
use filter_engine::{apply, options_for, FacetOption, RowLedger, SelectionState};
use interchange::{to_delimited_text, InterchangeError};

/// One session over the script catalog.
pub struct FilterSession {
    store: DatasetStore,
    config: FacetConfig,
    variant: DatasetVariant,
    draft: SelectionState,
    committed: SelectionState,
    ledger: RowLedger,
}

impl FilterSession {
    /// Starts a session on the reduced variant with everything empty,
    /// matching the filter module's initial screen.
    pub fn new(store: DatasetStore, config: FacetConfig) -> Self {
        FilterSession {
            store,
            config,
            variant: DatasetVariant::WithoutScripts,
            draft: SelectionState::new(),
            committed: SelectionState::new(),
            ledger: RowLedger::new(),
        }
    }

    pub fn config(&self) -> &FacetConfig {
        &self.config
    }

    pub fn variant(&self) -> DatasetVariant {
        self.variant
    }

    pub fn ledger(&self) -> &RowLedger {
        &self.ledger
    }

    /// The dataset the table currently shows.
    pub fn dataset(&self) -> &Dataset {
        self.store.variant(self.variant)
    }

    /// Edits one facet's draft selection. Downstream facets are cleared
    /// inside the selection state; nothing is visible until "Apply".
    pub fn edit_facet<I>(&mut self, facet_id: &str, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.draft.set_facet(&self.config, facet_id, values);
    }

    /// Live preview of a facet's options under the current draft.
    pub fn facet_options(&self, facet_id: &str) -> Vec<FacetOption> {
        options_for(&self.config, &self.draft, self.dataset(), facet_id)
    }

    /// Commits the draft. The checked rows reset because the visible row
    /// set is about to change.
    pub fn apply_filters(&mut self) {
        self.committed = self.draft.clone();
        self.ledger.clear_selection();
    }

    /// "Clear All": empties draft, committed, and the whole ledger.
    pub fn clear_all(&mut self) {
        self.draft.clear();
        self.committed.clear();
        self.ledger.reset_all();
    }

    /// Switches the dataset variant. The ledger resets here - this is the
    /// required call site, the store itself never touches it.
    pub fn set_variant(&mut self, variant: DatasetVariant) {
        self.variant = variant;
        self.ledger.reset_all();
    }

    /// Flips between the two variants.
    pub fn toggle_variant(&mut self) {
        let next = match self.variant {
            DatasetVariant::WithScripts => DatasetVariant::WithoutScripts,
            DatasetVariant::WithoutScripts => DatasetVariant::WithScripts,
        };
        self.set_variant(next);
    }

    /// The committed, filtered rows minus deleted ones, dataset order.
    pub fn visible_rows(&self) -> Vec<&ScriptRecord> {
        apply(
            &self.config,
            &self.committed,
            self.dataset(),
            self.ledger.deleted(),
        )
    }

    pub fn toggle_selected(&mut self, id: &str) {
        self.ledger.toggle_selected(id);
    }

    /// Checks every currently visible row - and only those.
    pub fn select_all_visible(&mut self) {
        let visible: Vec<String> = self.visible_rows().iter().map(|r| r.id.clone()).collect();
        self.ledger.select_all(visible);
    }

    pub fn clear_selection(&mut self) {
        self.ledger.clear_selection();
    }

    pub fn delete_selected(&mut self) {
        self.ledger.delete_selected();
    }

    /// CSV of the committed filter result. Rows come from the full
    /// variant so exports always carry the script-detail columns.
    pub fn export_visible(&self) -> Result<String, InterchangeError> {
        let rows = apply(
            &self.config,
            &self.committed,
            self.store.full(),
            self.ledger.deleted(),
        );
        to_delimited_text(&rows)
    }

    /// CSV of the checked rows (full variant, deleted excluded).
    pub fn export_selected(&self) -> Result<String, InterchangeError> {
        let rows: Vec<&ScriptRecord> = self
            .store
            .full()
            .records()
            .iter()
            .filter(|r| self.ledger.is_selected(&r.id) && !self.ledger.is_deleted(&r.id))
            .collect();
        to_delimited_text(&rows)
    }
}
