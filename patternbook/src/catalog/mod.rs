//! The hand-authored content catalog
//!
//! One module per pattern, each building its [`PatternDefinition`] from
//! literal data, plus the quality fundamentals document. This is the data
//! payload of the repository; the logic lives in [`crate::patterns`] and
//! [`crate::mcp`]. Registry order here is display order everywhere.

use crate::patterns::PatternRegistry;
use crate::Result;

mod adapter_pattern;
mod builder_pattern;
mod compound_component;
mod container_presentational;
mod custom_hook;
mod factory_pattern;
pub mod fundamentals;
mod higher_order_component;
mod observer_pattern;
mod provider_pattern;
mod render_props;
mod state_reducer;
mod strategy_pattern;

pub use fundamentals::quality_fundamentals;

/// Build the full pattern registry from the built-in catalog.
///
/// # Errors
///
/// Fails only if the catalog content violates registry integrity (duplicate
/// id, dangling or self-referential related pattern), which is a content
/// defect caught by the test suite.
pub fn registry() -> Result<PatternRegistry> {
    PatternRegistry::new(vec![
        (
            "container-presentational".to_string(),
            container_presentational::definition(),
        ),
        (
            "compound-component".to_string(),
            compound_component::definition(),
        ),
        ("render-props".to_string(), render_props::definition()),
        (
            "higher-order-component".to_string(),
            higher_order_component::definition(),
        ),
        ("custom-hook".to_string(), custom_hook::definition()),
        ("provider-pattern".to_string(), provider_pattern::definition()),
        ("state-reducer".to_string(), state_reducer::definition()),
        ("strategy-pattern".to_string(), strategy_pattern::definition()),
        ("builder-pattern".to_string(), builder_pattern::definition()),
        ("factory-pattern".to_string(), factory_pattern::definition()),
        ("observer-pattern".to_string(), observer_pattern::definition()),
        ("adapter-pattern".to_string(), adapter_pattern::definition()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_builds_a_valid_registry() {
        let registry = registry().unwrap();
        assert_eq!(registry.len(), 12);
    }

    #[test]
    fn test_every_id_resolves_to_itself() {
        let registry = registry().unwrap();
        for id in registry.ids() {
            let document = registry.detailed(id).unwrap();
            assert_eq!(document.id, id);
            assert!(registry.overview(id).is_ok());
        }
    }

    #[test]
    fn test_listing_is_total() {
        let registry = registry().unwrap();
        let overviews = registry.overviews();
        assert_eq!(overviews.len(), registry.ids().len());
        for (id, overview) in overviews {
            assert!(!id.is_empty());
            assert!(!overview.name.is_empty());
            assert!(!overview.description.is_empty());
            assert!(!overview.when_to_use.is_empty());
        }
    }

    #[test]
    fn test_every_pattern_has_substantive_content() {
        let registry = registry().unwrap();
        for id in registry.ids() {
            let document = registry.detailed(id).unwrap();
            let detailed = &document.detailed;
            assert!(!detailed.problem.is_empty(), "{id} missing problem");
            assert!(!detailed.solution.is_empty(), "{id} missing solution");
            assert!(!detailed.benefits.is_empty(), "{id} missing benefits");
            assert!(!detailed.drawbacks.is_empty(), "{id} missing drawbacks");
            assert!(!detailed.examples.is_empty(), "{id} missing examples");
            assert!(
                !detailed.best_practices.is_empty(),
                "{id} missing best practices"
            );
            assert!(
                !detailed.common_mistakes.is_empty(),
                "{id} missing common mistakes"
            );
            for example in &detailed.examples {
                assert!(!example.bad.code.is_empty(), "{id} has empty bad sample");
                assert!(!example.good.code.is_empty(), "{id} has empty good sample");
            }
        }
    }

    #[test]
    fn test_related_patterns_point_somewhere_useful() {
        // Integrity is enforced by the constructor; this checks the content
        // actually cross-links rather than shipping empty relation lists
        // everywhere.
        let registry = registry().unwrap();
        let with_relations = registry
            .ids()
            .iter()
            .filter(|id| {
                !registry
                    .detailed(id)
                    .unwrap()
                    .detailed
                    .related_patterns
                    .is_empty()
            })
            .count();
        assert!(with_relations >= 10);
    }
}
