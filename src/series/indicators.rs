//! The named capability indicator series
//!
//! Each function synthesizes one column from the year slice and the resolved
//! profile. Base constants fall back to the profile defaults when absent; all
//! other constants are the illustrative figures the source dashboard uses,
//! preserved for behavioral fidelity.

use std::f64::consts::TAU;

use crate::config::{
    SelectionProfile, DEFAULT_BUDGET_BASE, DEFAULT_EXERCISES_BASE, DEFAULT_PERSONNEL_BASE,
};
use crate::series::curves::{self, elapsed};

// ============================================================================
// Core Series
// ============================================================================

/// Defense budget in billions, with geopolitical regime adjustments
pub fn defense_budget(years: &[i32], profile: &SelectionProfile) -> Vec<f64> {
    let base = profile.budget_base.unwrap_or(DEFAULT_BUDGET_BASE);
    years
        .iter()
        .map(|&year| base * (1.0 + 0.045 * elapsed(year)) * regime_multiplier(year))
        .collect()
}

/// Budget multiplier for the regime containing `year`
///
/// Bounded windows take precedence; the open-ended thresholds are checked
/// most recent first, so the latest matching regime wins.
fn regime_multiplier(year: i32) -> f64 {
    if (2001..=2003).contains(&year) {
        1.25 // war on terror buildup
    } else if (2008..=2010).contains(&year) {
        0.95 // financial crisis contraction
    } else if year >= 2022 {
        1.15 // Ukraine support
    } else if year >= 2018 {
        1.12 // great-power competition
    } else if year >= 2014 {
        1.08 // pivot to Asia
    } else {
        1.0
    }
}

/// Total personnel in thousands, slow linear growth
pub fn personnel_thousands(years: &[i32], profile: &SelectionProfile) -> Vec<f64> {
    let base = profile.personnel_base.unwrap_or(DEFAULT_PERSONNEL_BASE);
    years
        .iter()
        .map(|&year| base * (1.0 + 0.003 * elapsed(year)))
        .collect()
}

/// Share of GDP devoted to defense
pub fn military_gdp_percent(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::linear(years, 3.0, 0.08)
}

/// Annual military exercises with a four-year seasonal swing
pub fn military_exercises(years: &[i32], profile: &SelectionProfile) -> Vec<f64> {
    let base = profile.exercises_base.unwrap_or(DEFAULT_EXERCISES_BASE);
    years
        .iter()
        .map(|&year| {
            let x = elapsed(year);
            base + 8.0 * x + 12.0 * (TAU * x / 4.0).sin()
        })
        .collect()
}

/// Operational readiness level
///
/// Step gains are cumulative, not exclusive: each threshold the year has
/// passed contributes, and the total is capped at 95.
pub fn operational_readiness(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    years
        .iter()
        .map(|&year| {
            let mut level = 85.0;
            if year >= 2001 {
                level += 5.0;
            }
            if year >= 2014 {
                level += 3.0;
            }
            if year >= 2020 {
                level += 2.0;
            }
            level.min(95.0)
        })
        .collect()
}

/// Strategic deterrence level, cumulative steps capped at 96
pub fn deterrence_capability(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    years
        .iter()
        .map(|&year| {
            let mut level = 90.0;
            if year >= 2001 {
                level += 2.0;
            }
            if year >= 2018 {
                level += 3.0;
            }
            level.min(96.0)
        })
        .collect()
}

/// Days needed for full mobilization, declining to a 7-day floor
pub fn mobilization_days(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::decaying_floor(years, 30.0, 1.0, 7.0)
}

/// Joint exercises with allied forces, in three eras
pub fn joint_exercises(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    years
        .iter()
        .map(|&year| {
            if year < 2001 {
                50.0
            } else if year < 2010 {
                80.0 + f64::from(year - 2001)
            } else {
                100.0 + 3.0 * f64::from(year - 2010)
            }
        })
        .collect()
}

/// Technology development index
pub fn tech_development(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::saturating(years, 80.0, 1.5, 95.0)
}

/// Blue-water naval capacity index
pub fn naval_capacity(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::saturating(years, 85.0, 1.0, 95.0)
}

/// Air defense coverage index
pub fn air_defense_coverage(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::saturating(years, 80.0, 1.2, 94.0)
}

/// Alliance cooperation index
pub fn alliance_cooperation(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::saturating(years, 75.0, 1.0, 92.0)
}

/// Offensive and defensive cyber capability index
pub fn cyber_capabilities(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::saturating(years, 85.0, 1.8, 96.0)
}

/// Weapons production index
pub fn weapon_production(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::saturating(years, 80.0, 1.5, 94.0)
}

// ============================================================================
// Nuclear Series (gated by the "nuclear" tag)
// ============================================================================

/// Warhead stockpile: holds at the 5800 ceiling, then declines 50 per year
pub fn nuclear_arsenal(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::saturating(years, 7000.0, -50.0, 5800.0)
}

/// Average missile range in kilometers
pub fn missile_range_km(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::saturating(years, 12000.0, 100.0, 15000.0)
}

/// Nuclear triad availability index
pub fn nuclear_triad(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::saturating(years, 95.0, 0.2, 98.0)
}

// ============================================================================
// Naval Series (gated by the "naval" tag)
// ============================================================================

/// Operational aircraft carriers
pub fn aircraft_carriers(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::saturating(years, 11.0, 0.1, 12.0)
}

/// Strategic submarines
pub fn submarines(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::saturating(years, 70.0, 0.5, 75.0)
}

/// Maritime power projection index
pub fn maritime_projection(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::saturating(years, 90.0, 0.5, 96.0)
}

// ============================================================================
// Innovation Series (gated by the "innovation" tag)
// ============================================================================

/// Defense research index
pub fn defense_research(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::saturating(years, 85.0, 1.0, 95.0)
}

/// Emerging technologies index
pub fn emerging_tech(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::saturating(years, 80.0, 1.8, 94.0)
}

/// Weapons exports in billions
pub fn weapon_exports(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::saturating(years, 15.0, 0.8, 35.0)
}

// ============================================================================
// Alliance Series (gated by the "alliances" tag)
// ============================================================================

/// NATO exercise participation
///
/// The program only exists from 2014; earlier years are backfilled with a
/// constant 20 so the column stays aligned to the full year range, in year
/// order.
pub fn nato_exercises(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    years
        .iter()
        .map(|&year| {
            if year < 2014 {
                20.0
            } else {
                (40.0 + 2.0 * f64::from(year - 2014)).min(80.0)
            }
        })
        .collect()
}

/// Strategic partnerships index
pub fn strategic_partnerships(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::saturating(years, 60.0, 1.5, 88.0)
}

/// Military bases on foreign soil
pub fn foreign_bases(years: &[i32], _profile: &SelectionProfile) -> Vec<f64> {
    curves::saturating(years, 700.0, 5.0, 800.0)
}
