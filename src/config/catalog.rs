//! Built-in selection catalog and name resolution

use ahash::{AHashMap, AHashSet};

use crate::config::SelectionProfile;

fn tags(names: &[&str]) -> AHashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Fixed mapping from selection name to profile
///
/// Resolution is exact-match; unknown names fall back to
/// [`SelectionProfile::generic`] rather than erroring.
#[derive(Debug, Clone)]
pub struct SelectionCatalog {
    profiles: AHashMap<String, SelectionProfile>,
}

impl SelectionCatalog {
    /// Catalog of built-in selections
    pub fn builtin() -> Self {
        let mut profiles = AHashMap::with_capacity(8);

        profiles.insert(
            "United States - Overview".to_string(),
            SelectionProfile {
                kind: "global superpower".to_string(),
                budget_base: Some(850.0),
                personnel_base: Some(1346.0),
                exercises_base: Some(280.0),
                priorities: tags(&[
                    "nuclear",
                    "naval",
                    "innovation",
                    "cyber",
                    "alliances",
                    "space",
                ]),
                doctrines: labels(&[
                    "Global superiority",
                    "Power projection",
                    "Advanced deterrence",
                ]),
                objective: Some("Maintain global military primacy".to_string()),
            },
        );

        profiles.insert(
            "US Navy".to_string(),
            SelectionProfile {
                kind: "naval force".to_string(),
                budget_base: Some(244.0),
                personnel_base: Some(347.0),
                exercises_base: None,
                priorities: tags(&["carriers", "submarines", "projection", "maritime-cyber"]),
                doctrines: labels(&["Sea Power 21"]),
                objective: None,
            },
        );

        profiles.insert(
            "US Air Force".to_string(),
            SelectionProfile {
                kind: "air supremacy".to_string(),
                budget_base: Some(194.0),
                personnel_base: Some(329.0),
                exercises_base: None,
                priorities: tags(&["fifth-gen-aircraft", "bombers", "tankers", "space"]),
                doctrines: labels(&["Global Strike"]),
                objective: None,
            },
        );

        profiles.insert(
            "NATO Alliances".to_string(),
            SelectionProfile {
                kind: "alliance leadership".to_string(),
                budget_base: Some(1200.0),
                personnel_base: None,
                exercises_base: None,
                priorities: tags(&["collective-defense", "interoperability", "joint-exercises"]),
                doctrines: labels(&["Missile defense", "Cyber command", "Reaction forces"]),
                objective: Some("Collective transatlantic defense".to_string()),
            },
        );

        Self { profiles }
    }

    /// Build a catalog from an explicit profile map
    pub fn new(profiles: AHashMap<String, SelectionProfile>) -> Self {
        Self { profiles }
    }

    /// Built-in catalog with overriding or additional entries merged on top
    pub fn with_overrides(overrides: AHashMap<String, SelectionProfile>) -> Self {
        let mut catalog = Self::builtin();
        catalog.profiles.extend(overrides);
        catalog
    }

    /// Resolve a selection name to its profile
    ///
    /// Unknown names return the generic fallback profile; this never fails.
    pub fn resolve(&self, selection: &str) -> SelectionProfile {
        self.profiles
            .get(selection)
            .cloned()
            .unwrap_or_else(SelectionProfile::generic)
    }

    pub fn contains(&self, selection: &str) -> bool {
        self.profiles.contains_key(selection)
    }

    /// Known selection names, sorted for stable listings
    pub fn selections(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_selection() {
        let catalog = SelectionCatalog::builtin();
        let profile = catalog.resolve("United States - Overview");
        assert_eq!(profile.kind, "global superpower");
        assert_eq!(profile.budget_base, Some(850.0));
        assert_eq!(profile.personnel_base, Some(1346.0));
        assert_eq!(profile.exercises_base, Some(280.0));
        assert!(profile.has_priority("nuclear"));
        assert!(profile.has_priority("alliances"));
    }

    #[test]
    fn test_resolve_unknown_falls_back() {
        let catalog = SelectionCatalog::builtin();
        let profile = catalog.resolve("totally-unknown-xyz");
        assert_eq!(profile.kind, "generic branch");
        assert_eq!(profile.personnel_base, Some(200.0));
        assert_eq!(profile.exercises_base, Some(40.0));
        assert!(profile.has_priority("generic-defense"));
    }

    #[test]
    fn test_navy_profile_gates_no_optional_groups() {
        // The Navy's own tags intentionally match none of the gating tags;
        // only the overview selection carries the "naval" group.
        let catalog = SelectionCatalog::builtin();
        let profile = catalog.resolve("US Navy");
        assert_eq!(profile.kind, "naval force");
        for tag in ["nuclear", "naval", "innovation", "alliances"] {
            assert!(!profile.has_priority(tag), "unexpected gating tag {}", tag);
        }
    }

    #[test]
    fn test_nato_profile_uses_fallback_bases() {
        let catalog = SelectionCatalog::builtin();
        let profile = catalog.resolve("NATO Alliances");
        assert_eq!(profile.budget_base, Some(1200.0));
        assert_eq!(profile.personnel_base, None);
        assert_eq!(profile.exercises_base, None);
    }

    #[test]
    fn test_overrides_replace_builtin_entries() {
        let mut overrides = AHashMap::new();
        overrides.insert(
            "US Navy".to_string(),
            SelectionProfile {
                kind: "naval force".to_string(),
                budget_base: Some(260.0),
                personnel_base: Some(350.0),
                exercises_base: None,
                priorities: tags(&["naval"]),
                doctrines: Vec::new(),
                objective: None,
            },
        );
        let catalog = SelectionCatalog::with_overrides(overrides);
        let profile = catalog.resolve("US Navy");
        assert_eq!(profile.budget_base, Some(260.0));
        assert!(profile.has_priority("naval"));
        // Untouched entries survive the merge
        assert!(catalog.contains("United States - Overview"));
    }

    #[test]
    fn test_selections_sorted() {
        let catalog = SelectionCatalog::builtin();
        let names = catalog.selections();
        assert_eq!(names.len(), 4);
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
