//! Curve primitives shared by the series functions
//!
//! All formulas are anchored at [`BASE_YEAR`]. The affine value is computed
//! first and clamped afterwards, so the progression stays continuous up to
//! the cap or floor.

/// Origin year for every formula's elapsed-time term
pub const BASE_YEAR: i32 = 2000;

/// Years elapsed since [`BASE_YEAR`]
#[inline]
pub fn elapsed(year: i32) -> f64 {
    f64::from(year - BASE_YEAR)
}

/// Saturating affine curve: `min(start + rate * elapsed, cap)`
///
/// With a negative rate the `min` acts as a ceiling the series falls away
/// from, giving a plateau followed by monotonic decline.
pub fn saturating(years: &[i32], start: f64, rate: f64, cap: f64) -> Vec<f64> {
    years
        .iter()
        .map(|&year| (start + rate * elapsed(year)).min(cap))
        .collect()
}

/// Decaying affine curve with a floor: `max(start - rate * elapsed, floor)`
pub fn decaying_floor(years: &[i32], start: f64, rate: f64, floor: f64) -> Vec<f64> {
    years
        .iter()
        .map(|&year| (start - rate * elapsed(year)).max(floor))
        .collect()
}

/// Unbounded affine curve: `start + rate * elapsed`
pub fn linear(years: &[i32], start: f64, rate: f64) -> Vec<f64> {
    years
        .iter()
        .map(|&year| start + rate * elapsed(year))
        .collect()
}
