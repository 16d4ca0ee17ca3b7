//! Code quality fundamentals document types
//!
//! A second static document, independent of the pattern registry: four
//! principles of readable frontend code, each broken into concepts with
//! examples and practices. The content itself is built in
//! [`crate::catalog::fundamentals`].

use crate::patterns::CodeComparisonExample;
use serde::{Deserialize, Serialize};

/// The full code-quality fundamentals document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QualityFundamentals {
    /// What this document covers
    pub overview: String,
    /// The stance the principles derive from
    pub core_philosophy: String,
    /// The four principles
    pub principles: Principles,
    /// Guidance on trading the principles off against each other
    pub balancing_principles: Vec<String>,
}

/// The four fixed principle slots
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Principles {
    /// Code reads top to bottom without surprises
    pub readability: Principle,
    /// Same inputs, same observable behavior
    pub predictability: Principle,
    /// Things that change together live together
    pub cohesion: Principle,
    /// Things that change separately stay separate
    pub coupling: Principle,
}

/// One quality principle with its constituent concepts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Principle {
    /// Principle name
    pub name: String,
    /// What the principle demands of the code
    pub description: String,
    /// Concrete concepts under this principle; never empty
    pub concepts: Vec<Concept>,
}

/// A single teachable concept under a principle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    /// Concept name
    pub name: String,
    /// What the concept is about
    pub description: String,
    /// Bad/good comparisons illustrating the concept
    pub examples: Vec<CodeComparisonExample>,
    /// Practices that keep code aligned with the concept
    pub best_practices: Vec<String>,
}

#[cfg(test)]
mod tests {
    use crate::catalog;

    #[test]
    fn test_fundamentals_has_all_four_principles() {
        let fundamentals = catalog::quality_fundamentals();
        assert!(!fundamentals.principles.readability.concepts.is_empty());
        assert!(!fundamentals.principles.predictability.concepts.is_empty());
        assert!(!fundamentals.principles.cohesion.concepts.is_empty());
        assert!(!fundamentals.principles.coupling.concepts.is_empty());
    }

    #[test]
    fn test_fundamentals_is_deterministic() {
        assert_eq!(catalog::quality_fundamentals(), catalog::quality_fundamentals());
    }

    #[test]
    fn test_principle_keys_serialize_as_expected() {
        let value = serde_json::to_value(catalog::quality_fundamentals()).unwrap();
        let principles = &value["principles"];
        for key in ["readability", "predictability", "cohesion", "coupling"] {
            assert!(principles.get(key).is_some(), "missing principle {key}");
            assert!(!principles[key]["concepts"].as_array().unwrap().is_empty());
        }
        assert!(value.get("corePhilosophy").is_some());
        assert!(value.get("balancingPrinciples").is_some());
    }

    #[test]
    fn test_concepts_have_content() {
        let fundamentals = catalog::quality_fundamentals();
        let all = [
            &fundamentals.principles.readability,
            &fundamentals.principles.predictability,
            &fundamentals.principles.cohesion,
            &fundamentals.principles.coupling,
        ];
        for principle in all {
            assert!(!principle.name.is_empty());
            assert!(!principle.description.is_empty());
            for concept in &principle.concepts {
                assert!(!concept.name.is_empty());
                assert!(!concept.best_practices.is_empty());
            }
        }
    }
}
