//! Property tests for dataset assembly
//!
//! Validates the table invariants: alignment to the 28-year axis, idempotent
//! assembly, gating by priority-tag membership, and the never-failing
//! fallback for unknown selections.

use proptest::prelude::*;

use ahash::AHashMap;

use crate::config::{SelectionCatalog, SelectionProfile};
use crate::dataset::{assemble, END_YEAR, START_YEAR};
use crate::series::{CORE_SERIES, PRIORITY_SERIES};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Arbitrary selection names, including names that resolve to nothing
fn selection_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("United States - Overview".to_string()),
        Just("US Navy".to_string()),
        Just("US Air Force".to_string()),
        Just("NATO Alliances".to_string()),
        "[a-zA-Z0-9 -]{0,30}",
    ]
}

/// Subsets of gating tags mixed with inert tags
fn priorities_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            Just("nuclear".to_string()),
            Just("naval".to_string()),
            Just("innovation".to_string()),
            Just("alliances".to_string()),
            Just("cyber".to_string()),
            Just("space".to_string()),
        ],
        0..=6,
    )
}

/// A catalog holding one generated profile under a fixed test name
fn catalog_with(priorities: Vec<String>) -> SelectionCatalog {
    let mut profiles = AHashMap::new();
    profiles.insert(
        "test-selection".to_string(),
        SelectionProfile {
            priorities: priorities.into_iter().collect(),
            ..SelectionProfile::generic()
        },
    );
    SelectionCatalog::new(profiles)
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Every column of every assembled dataset has exactly 28 rows aligned
    /// to the ascending, gap-free year axis
    #[test]
    fn prop_alignment(selection in selection_strategy()) {
        let catalog = SelectionCatalog::builtin();
        let (dataset, _) = assemble(&catalog, &selection);

        let years = dataset.years();
        prop_assert_eq!(years.len(), 28);
        prop_assert_eq!(years[0], START_YEAR);
        prop_assert_eq!(*years.last().unwrap(), END_YEAR);
        for pair in years.windows(2) {
            prop_assert_eq!(pair[1], pair[0] + 1);
        }

        for column in dataset.columns() {
            prop_assert_eq!(
                column.values.len(),
                years.len(),
                "column {} misaligned",
                &column.name
            );
        }
    }

    /// Assembling the same selection twice yields identical output
    #[test]
    fn prop_assemble_idempotent(selection in selection_strategy()) {
        let catalog = SelectionCatalog::builtin();
        let (first_dataset, first_profile) = assemble(&catalog, &selection);
        let (second_dataset, second_profile) = assemble(&catalog, &selection);
        prop_assert_eq!(first_dataset, second_dataset);
        prop_assert_eq!(first_profile, second_profile);
    }

    /// Optional columns appear iff their gating tag is in the profile
    #[test]
    fn prop_gating_by_membership(priorities in priorities_strategy()) {
        let catalog = catalog_with(priorities.clone());
        let (dataset, profile) = assemble(&catalog, "test-selection");

        for &(tag, group) in PRIORITY_SERIES {
            let gated_in = profile.has_priority(tag);
            for &(name, _) in group {
                prop_assert_eq!(
                    dataset.has_column(name),
                    gated_in,
                    "column {} gating mismatch for tag {}",
                    name,
                    tag
                );
            }
        }

        // Core columns are unconditional
        for &(name, _) in CORE_SERIES {
            prop_assert!(dataset.has_column(name));
        }
    }

    /// Unknown selection names never fail and resolve to the generic branch
    #[test]
    fn prop_unknown_selection_falls_back(name in "[a-z0-9_]{1,40}") {
        let catalog = SelectionCatalog::builtin();
        prop_assume!(!catalog.contains(&name));

        let (dataset, profile) = assemble(&catalog, &name);
        prop_assert_eq!(&profile.kind, "generic branch");
        prop_assert_eq!(dataset.column_names().len(), CORE_SERIES.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gating_appears_with_tag_disappears_without() {
        let without = catalog_with(vec![]);
        let (dataset, _) = assemble(&without, "test-selection");
        assert!(!dataset.has_column("nuclear_arsenal"));
        assert!(!dataset.has_column("missile_range_km"));
        assert!(!dataset.has_column("nuclear_triad"));

        let with = catalog_with(vec!["nuclear".to_string()]);
        let (dataset, _) = assemble(&with, "test-selection");
        assert!(dataset.has_column("nuclear_arsenal"));
        assert!(dataset.has_column("missile_range_km"));
        assert!(dataset.has_column("nuclear_triad"));
    }
}
