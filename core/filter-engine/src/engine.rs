//! FILENAME: core/filter-engine/src/engine.rs
//! PURPOSE: The cascading filter calculations.
//! CONTEXT: Pure functions over the facet configuration, a dataset, and
//! selection state. `options_for` previews the valid options of one facet
//! under the *draft* selections of the facets before it; `apply` narrows
//! the dataset by *all* committed selections and drops deleted rows.
//! Neither operation can fail: empty option lists and empty result sets
//! are valid states.

use std::collections::BTreeSet;

use catalog::{Dataset, FacetConfig, FacetDefinition, RecordId, ScriptRecord};
use rustc_hash::FxHashSet;

use crate::selection::{FacetOption, SelectionState};

/// Whether a record passes one facet's selection.
///
/// A facet with no selected values is a no-op filter. Otherwise the
/// record's value for the facet's source field must be a member of the
/// selected set; a missing field never matches.
fn record_passes(record: &ScriptRecord, facet: &FacetDefinition, state: &SelectionState) -> bool {
    match state.values_for(&facet.id) {
        None => true,
        Some(selected) if selected.is_empty() => true,
        Some(selected) => record
            .value(&facet.source_field)
            .map_or(false, |v| selected.contains(v)),
    }
}

/// Computes the valid options for `facet_id` under the draft selections.
///
/// Only facets strictly before `facet_id` in the configured order narrow
/// the dataset; the facet itself and everything after it are skipped.
/// Distinct surviving values are returned sorted ascending, with empty
/// values dropped. Unknown facet ids yield an empty list.
pub fn options_for(
    config: &FacetConfig,
    draft: &SelectionState,
    dataset: &Dataset,
    facet_id: &str,
) -> Vec<FacetOption> {
    let target = match config.get(facet_id) {
        Some(facet) => facet,
        None => return Vec::new(),
    };
    let upstream = config.upstream_of(facet_id);

    let mut values: BTreeSet<&str> = BTreeSet::new();
    for record in dataset.records() {
        if !upstream.iter().all(|f| record_passes(record, f, draft)) {
            continue;
        }
        if let Some(value) = record.value(&target.source_field) {
            if !value.is_empty() {
                values.insert(value);
            }
        }
    }

    values.into_iter().map(FacetOption::new).collect()
}

/// Narrows the dataset by all committed selections, then drops rows whose
/// id is in `deleted`. Result order preserves dataset order.
pub fn apply<'a>(
    config: &FacetConfig,
    committed: &SelectionState,
    dataset: &'a Dataset,
    deleted: &FxHashSet<RecordId>,
) -> Vec<&'a ScriptRecord> {
    dataset
        .records()
        .iter()
        .filter(|record| {
            config
                .facets()
                .iter()
                .all(|f| record_passes(record, f, committed))
        })
        .filter(|record| !deleted.contains(&record.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{FacetDefinition, RawRow};

    fn config() -> FacetConfig {
        FacetConfig::new(vec![
            FacetDefinition::new("workstream", "Workstream", "Workstream"),
            FacetDefinition::new("country", "Country", "Country"),
        ])
    }

    fn raw(fields: &[(&str, &str)]) -> RawRow {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Two Manufacturing/USA rows and one Finance/Germany row.
    fn dataset() -> Dataset {
        Dataset::load(vec![
            raw(&[("Workstream", "Manufacturing"), ("Country", "USA")]),
            raw(&[("Workstream", "Manufacturing"), ("Country", "USA")]),
            raw(&[("Workstream", "Finance"), ("Country", "Germany")]),
        ])
    }

    fn selected(config: &FacetConfig, facet: &str, values: &[&str]) -> SelectionState {
        let mut state = SelectionState::new();
        state.set_facet(config, facet, values.iter().map(|v| v.to_string()));
        state
    }

    #[test]
    fn test_options_reflect_upstream_draft() {
        let config = config();
        let dataset = dataset();
        let draft = selected(&config, "workstream", &["Manufacturing"]);

        let options = options_for(&config, &draft, &dataset, "country");
        assert_eq!(options, vec![FacetOption::new("USA")]);
    }

    #[test]
    fn test_own_selection_does_not_narrow_own_options() {
        let config = config();
        let dataset = dataset();
        // Selecting a country must not hide the other countries from the
        // country facet itself.
        let draft = selected(&config, "country", &["Germany"]);

        let options = options_for(&config, &draft, &dataset, "country");
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["Germany", "USA"]);
    }

    #[test]
    fn test_later_facets_do_not_constrain_earlier_ones() {
        let config = config();
        let dataset = dataset();
        let draft = selected(&config, "country", &["Germany"]);

        let options = options_for(&config, &draft, &dataset, "workstream");
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["Finance", "Manufacturing"]);
    }

    #[test]
    fn test_options_drop_empty_values_and_sort() {
        let config = config();
        let dataset = Dataset::load(vec![
            raw(&[("Workstream", "Zeta")]),
            raw(&[("Workstream", "")]),
            raw(&[("Country", "USA")]), // Workstream field absent entirely
            raw(&[("Workstream", "Alpha")]),
        ]);

        let options = options_for(&config, &SelectionState::new(), &dataset, "workstream");
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_zero_options_is_a_valid_result() {
        let config = config();
        let dataset = dataset();
        let draft = selected(&config, "workstream", &["Logistics"]);
        assert!(options_for(&config, &draft, &dataset, "country").is_empty());
    }

    #[test]
    fn test_unknown_facet_yields_no_options() {
        let config = config();
        let dataset = dataset();
        assert!(options_for(&config, &SelectionState::new(), &dataset, "plant").is_empty());
    }

    #[test]
    fn test_apply_with_empty_selections_is_identity_minus_deleted() {
        let config = config();
        let dataset = dataset();
        let committed = SelectionState::new();

        let all = apply(&config, &committed, &dataset, &FxHashSet::default());
        assert_eq!(all.len(), 3);
        let ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);

        let mut deleted = FxHashSet::default();
        deleted.insert("2".to_string());
        let remaining = apply(&config, &committed, &dataset, &deleted);
        let ids: Vec<&str> = remaining.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let config = config();
        let dataset = dataset();
        let committed = selected(&config, "workstream", &["Manufacturing"]);
        let deleted = FxHashSet::default();

        let first = apply(&config, &committed, &dataset, &deleted);
        let second = apply(&config, &committed, &dataset, &deleted);
        assert_eq!(first, second);
    }

    #[test]
    fn test_apply_narrows_by_all_facets() {
        let config = config();
        let dataset = dataset();
        let mut committed = selected(&config, "workstream", &["Manufacturing"]);
        committed.set_facet(&config, "country", vec!["USA".to_string()]);

        let rows = apply(&config, &committed, &dataset, &FxHashSet::default());
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.value("Country") == Some("USA")));
    }

    #[test]
    fn test_deleted_rows_never_come_back() {
        let config = config();
        let dataset = dataset();
        let mut deleted = FxHashSet::default();
        deleted.insert("3".to_string());

        // Regardless of which selection is committed, id 3 stays hidden.
        for state in [
            SelectionState::new(),
            selected(&config, "workstream", &["Finance"]),
            selected(&config, "country", &["Germany"]),
        ] {
            let rows = apply(&config, &state, &dataset, &deleted);
            assert!(rows.iter().all(|r| r.id != "3"));
        }
    }
}
