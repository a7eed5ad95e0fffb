//! Series registry - name to synthesizer mapping
//!
//! The assembler walks [`CORE_SERIES`] and [`PRIORITY_SERIES`] in declaration
//! order so column order is stable. The by-name map exists for the binding
//! layer's single-series lookups.

use ahash::AHashMap;
use once_cell::sync::Lazy;

use crate::config::SelectionProfile;
use crate::error::{DefenseAnalyticsError, Result};
use crate::series::{indicators, SeriesFn};

/// Series synthesized for every selection, in column order
pub const CORE_SERIES: &[(&str, SeriesFn)] = &[
    ("defense_budget", indicators::defense_budget),
    ("personnel_thousands", indicators::personnel_thousands),
    ("military_gdp_percent", indicators::military_gdp_percent),
    ("military_exercises", indicators::military_exercises),
    ("operational_readiness", indicators::operational_readiness),
    ("deterrence_capability", indicators::deterrence_capability),
    ("mobilization_days", indicators::mobilization_days),
    ("joint_exercises", indicators::joint_exercises),
    ("tech_development", indicators::tech_development),
    ("naval_capacity", indicators::naval_capacity),
    ("air_defense_coverage", indicators::air_defense_coverage),
    ("alliance_cooperation", indicators::alliance_cooperation),
    ("cyber_capabilities", indicators::cyber_capabilities),
    ("weapon_production", indicators::weapon_production),
];

const NUCLEAR_SERIES: &[(&str, SeriesFn)] = &[
    ("nuclear_arsenal", indicators::nuclear_arsenal),
    ("missile_range_km", indicators::missile_range_km),
    ("nuclear_triad", indicators::nuclear_triad),
];

const NAVAL_SERIES: &[(&str, SeriesFn)] = &[
    ("aircraft_carriers", indicators::aircraft_carriers),
    ("submarines", indicators::submarines),
    ("maritime_projection", indicators::maritime_projection),
];

const INNOVATION_SERIES: &[(&str, SeriesFn)] = &[
    ("defense_research", indicators::defense_research),
    ("emerging_tech", indicators::emerging_tech),
    ("weapon_exports", indicators::weapon_exports),
];

const ALLIANCE_SERIES: &[(&str, SeriesFn)] = &[
    ("nato_exercises", indicators::nato_exercises),
    ("strategic_partnerships", indicators::strategic_partnerships),
    ("foreign_bases", indicators::foreign_bases),
];

/// Optional series groups, keyed by the profile tag that gates them
pub const PRIORITY_SERIES: &[(&str, &[(&str, SeriesFn)])] = &[
    ("nuclear", NUCLEAR_SERIES),
    ("naval", NAVAL_SERIES),
    ("innovation", INNOVATION_SERIES),
    ("alliances", ALLIANCE_SERIES),
];

/// Global by-name registry built from the ordered tables
static SERIES_REGISTRY: Lazy<AHashMap<&'static str, SeriesFn>> = Lazy::new(|| {
    let mut map = AHashMap::with_capacity(32);
    for &(name, synthesize) in CORE_SERIES {
        map.insert(name, synthesize);
    }
    for &(_, group) in PRIORITY_SERIES {
        for &(name, synthesize) in group {
            map.insert(name, synthesize);
        }
    }
    map
});

/// Look up a series synthesizer by name
#[inline]
pub fn lookup(name: &str) -> Option<SeriesFn> {
    SERIES_REGISTRY.get(name).copied()
}

/// Synthesize a single series by name
pub fn synthesize(name: &str, years: &[i32], profile: &SelectionProfile) -> Result<Vec<f64>> {
    let synthesize = lookup(name)
        .ok_or_else(|| DefenseAnalyticsError::SeriesNotFound(name.to_string()))?;
    Ok(synthesize(years, profile))
}

/// Names of every registered series, core first, then optional groups
pub fn series_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CORE_SERIES.iter().map(|&(name, _)| name).collect();
    for &(_, group) in PRIORITY_SERIES {
        names.extend(group.iter().map(|&(name, _)| name));
    }
    names
}
