//! Pattern data model and registry
//!
//! The registry is an insertion-ordered, immutable mapping from pattern id to
//! its definition. It is constructed explicitly (see [`crate::catalog`]) and
//! passed into the MCP layer by reference; there is no ambient global state,
//! so tests can build independent registries with whatever contents they need.

use crate::{PatternBookError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Short-form summary of a pattern, one per registry entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatternOverview {
    /// Human-readable pattern name
    pub name: String,
    /// One-paragraph description of what the pattern is
    pub description: String,
    /// Guidance on the situations where the pattern applies
    pub when_to_use: String,
}

/// A single code sample within a comparison example
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeSample {
    /// Short label, e.g. "Before: tangled component"
    pub title: String,
    /// What this sample demonstrates
    pub description: String,
    /// TypeScript/TSX source
    pub code: String,
}

/// A bad/good code comparison illustrating a pattern
///
/// The comparison shape is canonical: every example carries both the
/// problematic version and the corrected one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeComparisonExample {
    /// Title of the example
    pub title: String,
    /// What the example demonstrates
    pub description: String,
    /// The problematic version
    pub bad: CodeSample,
    /// The corrected version
    pub good: CodeSample,
}

/// Full write-up of a pattern
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailedPattern {
    /// Human-readable pattern name
    pub name: String,
    /// One-paragraph description
    pub description: String,
    /// The problem the pattern addresses
    pub problem: String,
    /// How the pattern solves it
    pub solution: String,
    /// What you gain by applying it
    pub benefits: Vec<String>,
    /// What it costs you
    pub drawbacks: Vec<String>,
    /// Bad/good code comparisons, in display order
    pub examples: Vec<CodeComparisonExample>,
    /// Recommendations for applying the pattern well
    pub best_practices: Vec<String>,
    /// Frequent ways the pattern is misapplied
    pub common_mistakes: Vec<String>,
    /// Ids of related patterns; must be registered ids, never the pattern's own
    pub related_patterns: Vec<String>,
}

/// The unit stored in the registry: overview plus detailed write-up
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatternDefinition {
    /// Short-form summary
    pub overview: PatternOverview,
    /// Full write-up
    pub detailed: DetailedPattern,
}

/// A detailed pattern merged with its own registry id
///
/// The registry stores the id only as a key; this wrapper makes the returned
/// document self-describing on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatternDocument {
    /// The registry key for this pattern
    pub id: String,
    /// The full write-up
    #[serde(flatten)]
    pub detailed: DetailedPattern,
}

/// Insertion-ordered, immutable mapping from pattern id to definition
///
/// Populated once at construction and read-only thereafter. All accessors are
/// pure reads; the single failure mode is [`PatternBookError::PatternNotFound`]
/// on the keyed lookups.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    entries: Vec<(String, PatternDefinition)>,
    index: HashMap<String, usize>,
}

impl PatternRegistry {
    /// Build a registry from `(id, definition)` pairs, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`PatternBookError::InvalidRegistry`] if an id is duplicated,
    /// if any `related_patterns` entry names an unregistered id, or if a
    /// pattern lists itself as related.
    pub fn new(patterns: Vec<(String, PatternDefinition)>) -> Result<Self> {
        let mut index = HashMap::with_capacity(patterns.len());
        for (position, (id, _)) in patterns.iter().enumerate() {
            if index.insert(id.clone(), position).is_some() {
                return Err(PatternBookError::InvalidRegistry(format!(
                    "duplicate pattern id '{id}'"
                )));
            }
        }

        for (id, definition) in &patterns {
            for related in &definition.detailed.related_patterns {
                if related == id {
                    return Err(PatternBookError::InvalidRegistry(format!(
                        "pattern '{id}' lists itself as a related pattern"
                    )));
                }
                if !index.contains_key(related) {
                    return Err(PatternBookError::InvalidRegistry(format!(
                        "pattern '{id}' references unknown related pattern '{related}'"
                    )));
                }
            }
        }

        Ok(Self {
            entries: patterns,
            index,
        })
    }

    /// All overviews in registry insertion order, one per registered pattern
    pub fn overviews(&self) -> Vec<(&str, &PatternOverview)> {
        self.entries
            .iter()
            .map(|(id, definition)| (id.as_str(), &definition.overview))
            .collect()
    }

    /// Look up one overview by id
    pub fn overview(&self, id: &str) -> Result<&PatternOverview> {
        self.get(id).map(|definition| &definition.overview)
    }

    /// Look up one detailed pattern by id, merged with its id
    pub fn detailed(&self, id: &str) -> Result<PatternDocument> {
        self.get(id).map(|definition| PatternDocument {
            id: id.to_string(),
            detailed: definition.detailed.clone(),
        })
    }

    /// The authoritative ordered list of valid pattern ids
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|(id, _)| id.as_str()).collect()
    }

    /// Number of registered patterns
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no patterns
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get(&self, id: &str) -> Result<&PatternDefinition> {
        self.index
            .get(id)
            .map(|&position| &self.entries[position].1)
            .ok_or_else(|| PatternBookError::PatternNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_definition(name: &str, related: &[&str]) -> PatternDefinition {
        PatternDefinition {
            overview: PatternOverview {
                name: name.to_string(),
                description: format!("{name} description"),
                when_to_use: format!("Use {name} when appropriate"),
            },
            detailed: DetailedPattern {
                name: name.to_string(),
                description: format!("{name} description"),
                problem: "A problem".to_string(),
                solution: "A solution".to_string(),
                benefits: vec!["benefit".to_string()],
                drawbacks: vec!["drawback".to_string()],
                examples: vec![CodeComparisonExample {
                    title: "Example".to_string(),
                    description: "Shows the pattern".to_string(),
                    bad: CodeSample {
                        title: "Bad".to_string(),
                        description: "Problematic".to_string(),
                        code: "const x = 1;".to_string(),
                    },
                    good: CodeSample {
                        title: "Good".to_string(),
                        description: "Corrected".to_string(),
                        code: "const x = 2;".to_string(),
                    },
                }],
                best_practices: vec!["practice".to_string()],
                common_mistakes: vec!["mistake".to_string()],
                related_patterns: related.iter().map(|r| r.to_string()).collect(),
            },
        }
    }

    fn sample_registry() -> PatternRegistry {
        PatternRegistry::new(vec![
            ("alpha".to_string(), sample_definition("Alpha", &["beta"])),
            ("beta".to_string(), sample_definition("Beta", &["alpha"])),
        ])
        .unwrap()
    }

    #[test]
    fn test_overviews_preserve_insertion_order() {
        let registry = sample_registry();
        let ids: Vec<&str> = registry.overviews().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_overview_lookup() {
        let registry = sample_registry();
        let overview = registry.overview("alpha").unwrap();
        assert_eq!(overview.name, "Alpha");
        assert!(!overview.when_to_use.is_empty());
    }

    #[test]
    fn test_detailed_carries_its_own_id() {
        let registry = sample_registry();
        let document = registry.detailed("beta").unwrap();
        assert_eq!(document.id, "beta");
        assert_eq!(document.detailed.name, "Beta");
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let registry = sample_registry();
        assert!(matches!(
            registry.overview("no-such-pattern"),
            Err(PatternBookError::PatternNotFound(id)) if id == "no-such-pattern"
        ));
        assert!(matches!(
            registry.detailed("no-such-pattern"),
            Err(PatternBookError::PatternNotFound(id)) if id == "no-such-pattern"
        ));
    }

    #[test]
    fn test_self_reference_rejected() {
        let result = PatternRegistry::new(vec![(
            "alpha".to_string(),
            sample_definition("Alpha", &["alpha"]),
        )]);
        assert!(matches!(result, Err(PatternBookError::InvalidRegistry(_))));
    }

    #[test]
    fn test_dangling_reference_rejected() {
        let result = PatternRegistry::new(vec![(
            "alpha".to_string(),
            sample_definition("Alpha", &["missing"]),
        )]);
        assert!(matches!(result, Err(PatternBookError::InvalidRegistry(_))));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = PatternRegistry::new(vec![
            ("alpha".to_string(), sample_definition("Alpha", &[])),
            ("alpha".to_string(), sample_definition("Alpha Again", &[])),
        ]);
        assert!(matches!(result, Err(PatternBookError::InvalidRegistry(_))));
    }

    #[test]
    fn test_accessors_are_deterministic() {
        let registry = sample_registry();
        assert_eq!(
            registry.detailed("alpha").unwrap(),
            registry.detailed("alpha").unwrap()
        );
        assert_eq!(registry.ids(), registry.ids());
    }

    #[test]
    fn test_pattern_document_serializes_flat() {
        let registry = sample_registry();
        let document = registry.detailed("alpha").unwrap();
        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(value["id"], "alpha");
        // Detailed fields flatten to the top level, camel-cased.
        assert_eq!(value["name"], "Alpha");
        assert!(value["relatedPatterns"].is_array());
        assert!(value["bestPractices"].is_array());
    }

    #[test]
    fn test_overview_serializes_camel_case() {
        let registry = sample_registry();
        let value = serde_json::to_value(registry.overview("alpha").unwrap()).unwrap();
        assert!(value.get("whenToUse").is_some());
        assert!(value.get("when_to_use").is_none());
    }
}
