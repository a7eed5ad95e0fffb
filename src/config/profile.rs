//! Selection profile structure

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Fallback base constants, applied by series functions when a profile
/// omits the corresponding field.
pub const DEFAULT_BUDGET_BASE: f64 = 850.0;
pub const DEFAULT_PERSONNEL_BASE: f64 = 1346.0;
pub const DEFAULT_EXERCISES_BASE: f64 = 280.0;

/// Resolved configuration for one selection (branch, program, or alliance)
///
/// Base constants are optional; priority tags gate which optional series
/// groups the assembler includes. Membership is all that matters for
/// `priorities`, order is irrelevant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionProfile {
    /// Archetype tag, e.g. "global superpower" or "naval force"
    pub kind: String,
    #[serde(default)]
    pub budget_base: Option<f64>,
    #[serde(default)]
    pub personnel_base: Option<f64>,
    #[serde(default)]
    pub exercises_base: Option<f64>,
    #[serde(default)]
    pub priorities: AHashSet<String>,
    /// Doctrine labels carried through for display
    #[serde(default)]
    pub doctrines: Vec<String>,
    #[serde(default)]
    pub objective: Option<String>,
}

impl SelectionProfile {
    /// Fallback profile for selections with no catalog entry
    pub fn generic() -> Self {
        Self {
            kind: "generic branch".to_string(),
            budget_base: None,
            personnel_base: Some(200.0),
            exercises_base: Some(40.0),
            priorities: ["generic-defense".to_string()].into_iter().collect(),
            doctrines: Vec::new(),
            objective: None,
        }
    }

    /// Check whether a gating tag is present
    #[inline]
    pub fn has_priority(&self, tag: &str) -> bool {
        self.priorities.contains(tag)
    }
}
