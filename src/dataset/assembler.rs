//! Dataset assembly
//!
//! A pure request-to-response transform: resolve the selection profile,
//! synthesize every core series, add the optional groups whose gating tag is
//! present, and return the table with the profile. Recomputed on every call;
//! nothing is shared between invocations and nothing can fail.

use crate::config::{SelectionCatalog, SelectionProfile};
use crate::dataset::Dataset;
use crate::series::{CORE_SERIES, PRIORITY_SERIES};

/// First year of every assembled dataset
pub const START_YEAR: i32 = 2000;
/// Last year of every assembled dataset, inclusive
pub const END_YEAR: i32 = 2027;

/// The full ascending year axis, 2000..=2027
pub fn year_range() -> Vec<i32> {
    (START_YEAR..=END_YEAR).collect()
}

/// Assemble the dataset for a selection
pub fn assemble(catalog: &SelectionCatalog, selection: &str) -> (Dataset, SelectionProfile) {
    let profile = catalog.resolve(selection);
    let mut dataset = Dataset::new(year_range());

    for &(name, synthesize) in CORE_SERIES {
        let values = synthesize(dataset.years(), &profile);
        dataset.push_column(name, values);
    }

    for &(tag, group) in PRIORITY_SERIES {
        if profile.has_priority(tag) {
            for &(name, synthesize) in group {
                let values = synthesize(dataset.years(), &profile);
                dataset.push_column(name, values);
            }
        }
    }

    (dataset, profile)
}
