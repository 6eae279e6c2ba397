//! FILENAME: core/filter-engine/src/selection.rs
//! PURPOSE: Per-facet selection state with cascade-clear semantics.
//! CONTEXT: Two instances live side by side in a session: the draft
//! (mutated by every facet edit) and the committed state (overwritten
//! only by "Apply"). Editing a facet unconditionally clears every facet
//! after it in the configured order, so stale downstream selections can
//! never refer to option values the new upstream constraint rules out.

use catalog::FacetConfig;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// One selectable option of a facet, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
}

impl FacetOption {
    /// Options are labeled by their raw value.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        FacetOption {
            label: value.clone(),
            value,
        }
    }
}

/// A mapping from facet id to the set of selected option values.
/// An absent or empty set means "no constraint" for that facet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    selections: FxHashMap<String, FxHashSet<String>>,
}

impl SelectionState {
    pub fn new() -> Self {
        SelectionState::default()
    }

    /// Replaces the selection of one facet and clears all of its
    /// dependents (every facet after it in `config`'s order).
    /// Facets unknown to the config are ignored.
    pub fn set_facet<I>(&mut self, config: &FacetConfig, facet_id: &str, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        if config.get(facet_id).is_none() {
            return;
        }

        let set: FxHashSet<String> = values.into_iter().collect();
        if set.is_empty() {
            self.selections.remove(facet_id);
        } else {
            self.selections.insert(facet_id.to_string(), set);
        }

        for dependent in config.dependents_of(facet_id) {
            self.selections.remove(&dependent.id);
        }
    }

    /// The selected values of a facet, if any.
    pub fn values_for(&self, facet_id: &str) -> Option<&FxHashSet<String>> {
        self.selections.get(facet_id)
    }

    /// True if the facet currently constrains rows.
    pub fn constrains(&self, facet_id: &str) -> bool {
        self.values_for(facet_id).map_or(false, |s| !s.is_empty())
    }

    /// Empties every facet's selection.
    pub fn clear(&mut self) {
        self.selections.clear();
    }

    /// True if no facet constrains anything.
    pub fn is_empty(&self) -> bool {
        self.selections.values().all(|s| s.is_empty())
    }
}
