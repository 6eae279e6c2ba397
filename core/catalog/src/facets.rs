//! FILENAME: core/catalog/src/facets.rs
//! PURPOSE: Facet configuration - the ordered list of filterable fields.
//! CONTEXT: Facet order is the cascade order: a facet's options are
//! constrained only by facets before it, and editing a facet clears every
//! facet after it. The dependents of a facet are therefore derived from
//! the order itself; an explicit dependency table is only accepted if it
//! agrees with the order (which also makes cycles impossible).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One filterable field exposed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetDefinition {
    /// Unique facet id (e.g., "plant-name").
    pub id: String,

    /// Display label (e.g., "Plant Name").
    pub label: String,

    /// The record field this facet filters on (e.g., "Plant_Name").
    pub source_field: String,
}

impl FacetDefinition {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        source_field: impl Into<String>,
    ) -> Self {
        FacetDefinition {
            id: id.into(),
            label: label.into(),
            source_field: source_field.into(),
        }
    }
}

/// Errors raised when validating an explicit dependency table against the
/// configured facet order.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FacetConfigError {
    #[error("unknown facet id in dependency table: {0}")]
    UnknownFacet(String),

    #[error("facet '{facet}' must list exactly the facets after it; expected {expected:?}, got {got:?}")]
    OrderMismatch {
        facet: String,
        expected: Vec<String>,
        got: Vec<String>,
    },
}

/// The ordered facet configuration. Static process-wide data, built once
/// at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetConfig {
    facets: Vec<FacetDefinition>,
}

impl FacetConfig {
    pub fn new(facets: Vec<FacetDefinition>) -> Self {
        FacetConfig { facets }
    }

    /// The seven-facet configuration of the SAP script catalog.
    pub fn sap_scripts() -> Self {
        FacetConfig::new(vec![
            FacetDefinition::new("workstream", "Workstream", "Workstream"),
            FacetDefinition::new("country", "Country", "Country"),
            FacetDefinition::new("region", "Region", "Region"),
            FacetDefinition::new("plant-name", "Plant Name", "Plant_Name"),
            FacetDefinition::new("plant-number", "Plant Number", "Plant_Number"),
            FacetDefinition::new("company-code", "Company Code", "Company_Code"),
            FacetDefinition::new("interface", "Interface", "Interface"),
        ])
    }

    /// All facets in cascade order.
    pub fn facets(&self) -> &[FacetDefinition] {
        &self.facets
    }

    /// Looks up a facet by id.
    pub fn get(&self, facet_id: &str) -> Option<&FacetDefinition> {
        self.facets.iter().find(|f| f.id == facet_id)
    }

    /// Position of a facet in the cascade order.
    pub fn position(&self, facet_id: &str) -> Option<usize> {
        self.facets.iter().position(|f| f.id == facet_id)
    }

    /// The dependents of a facet: exactly the facets after it in order.
    /// Unknown ids have no dependents.
    pub fn dependents_of(&self, facet_id: &str) -> &[FacetDefinition] {
        match self.position(facet_id) {
            Some(pos) => &self.facets[pos + 1..],
            None => &[],
        }
    }

    /// The facets strictly before the given one, in order. Unknown ids
    /// yield an empty slice.
    pub fn upstream_of(&self, facet_id: &str) -> &[FacetDefinition] {
        match self.position(facet_id) {
            Some(pos) => &self.facets[..pos],
            None => &[],
        }
    }

    /// Builds the full dependency table implied by the facet order.
    pub fn dependency_table(&self) -> HashMap<String, Vec<String>> {
        self.facets
            .iter()
            .map(|f| {
                let deps = self
                    .dependents_of(&f.id)
                    .iter()
                    .map(|d| d.id.clone())
                    .collect();
                (f.id.clone(), deps)
            })
            .collect()
    }

    /// Checks an explicit dependency table for consistency with the facet
    /// order. Every listed facet must exist and its dependents must be
    /// exactly the facets after it.
    pub fn validate_dependency_table(
        &self,
        table: &HashMap<String, Vec<String>>,
    ) -> Result<(), FacetConfigError> {
        for (facet_id, listed) in table {
            if self.position(facet_id).is_none() {
                return Err(FacetConfigError::UnknownFacet(facet_id.clone()));
            }
            let expected: Vec<String> = self
                .dependents_of(facet_id)
                .iter()
                .map(|d| d.id.clone())
                .collect();
            if listed != &expected {
                return Err(FacetConfigError::OrderMismatch {
                    facet: facet_id.clone(),
                    expected,
                    got: listed.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> FacetConfig {
        FacetConfig::new(vec![
            FacetDefinition::new("a", "A", "A"),
            FacetDefinition::new("b", "B", "B"),
            FacetDefinition::new("c", "C", "C"),
        ])
    }

    #[test]
    fn test_dependents_are_facets_after() {
        let config = abc();
        let deps: Vec<&str> = config
            .dependents_of("a")
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(deps, vec!["b", "c"]);
        assert!(config.dependents_of("c").is_empty());
        assert!(config.dependents_of("missing").is_empty());
    }

    #[test]
    fn test_upstream_is_facets_before() {
        let config = abc();
        let ups: Vec<&str> = config
            .upstream_of("c")
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(ups, vec!["a", "b"]);
        assert!(config.upstream_of("a").is_empty());
    }

    #[test]
    fn test_dependency_table_round_trips_validation() {
        let config = FacetConfig::sap_scripts();
        let table = config.dependency_table();
        assert!(config.validate_dependency_table(&table).is_ok());
        // Matches the catalog's published dependency policy.
        assert_eq!(
            table.get("company-code"),
            Some(&vec!["interface".to_string()])
        );
    }

    #[test]
    fn test_validation_rejects_disagreeing_table() {
        let config = abc();
        let mut table = HashMap::new();
        // "a" claims only "c" depends on it; "b" is missing.
        table.insert("a".to_string(), vec!["c".to_string()]);
        let err = config.validate_dependency_table(&table).unwrap_err();
        assert!(matches!(err, FacetConfigError::OrderMismatch { .. }));
    }

    #[test]
    fn test_config_loads_from_json() {
        let json = r#"{"facets":[
            {"id":"workstream","label":"Workstream","source_field":"Workstream"},
            {"id":"country","label":"Country","source_field":"Country"}
        ]}"#;
        let config: FacetConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.facets().len(), 2);
        assert_eq!(config.dependents_of("workstream")[0].id, "country");
    }

    #[test]
    fn test_validation_rejects_unknown_facet() {
        let config = abc();
        let mut table = HashMap::new();
        table.insert("nope".to_string(), vec![]);
        assert_eq!(
            config.validate_dependency_table(&table),
            Err(FacetConfigError::UnknownFacet("nope".to_string()))
        );
    }
}
