//! Configuration module for selection profiles
//!
//! Holds the profile record, the built-in selection catalog, and the
//! deserialization of catalog overrides from Python dicts.

mod catalog;
mod profile;

pub use catalog::*;
pub use profile::*;

use crate::error::DefenseAnalyticsError;
use ahash::{AHashMap, AHashSet};
use pyo3::types::{PyAnyMethods, PyDict, PyDictMethods};
use pyo3::Bound;

/// Helper to get attribute from either dict or object
fn get_attr<'py>(
    obj: &Bound<'py, pyo3::PyAny>,
    name: &str,
) -> pyo3::PyResult<Bound<'py, pyo3::PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name)?
            .ok_or_else(|| pyo3::exceptions::PyKeyError::new_err(name.to_string()))
    } else {
        obj.getattr(name)
    }
}

/// Helper to get optional attribute from either dict or object
fn get_attr_opt<'py>(obj: &Bound<'py, pyo3::PyAny>, name: &str) -> Option<Bound<'py, pyo3::PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name).ok().flatten()
    } else {
        obj.getattr(name).ok()
    }
}

/// Deserialize selection profiles from a Python dict
/// Expected format: {"selection name": profile dict or object, ...}
pub fn deserialize_profiles(
    dict: &Bound<'_, PyDict>,
) -> pyo3::PyResult<AHashMap<String, SelectionProfile>> {
    let mut profiles = AHashMap::with_capacity(dict.len());

    for (key, value) in dict.iter() {
        let name: String = key.extract().map_err(|_| {
            DefenseAnalyticsError::DeserializationError(
                "selection names must be strings".to_string(),
            )
        })?;
        let profile = extract_profile(&value)?;
        profiles.insert(name, profile);
    }

    Ok(profiles)
}

fn extract_profile(obj: &Bound<'_, pyo3::PyAny>) -> pyo3::PyResult<SelectionProfile> {
    let kind: String = get_attr(obj, "kind")
        .map_err(|_| {
            DefenseAnalyticsError::DeserializationError("profile is missing 'kind'".to_string())
        })?
        .extract()?;
    let budget_base: Option<f64> =
        get_attr_opt(obj, "budget_base").and_then(|v| v.extract().ok());
    let personnel_base: Option<f64> =
        get_attr_opt(obj, "personnel_base").and_then(|v| v.extract().ok());
    let exercises_base: Option<f64> =
        get_attr_opt(obj, "exercises_base").and_then(|v| v.extract().ok());

    // Priorities arrive as a list of tags; membership is all that matters
    let priorities: AHashSet<String> = get_attr_opt(obj, "priorities")
        .and_then(|v| v.extract::<Vec<String>>().ok())
        .map(|list| list.into_iter().collect())
        .unwrap_or_default();

    let doctrines: Vec<String> = get_attr_opt(obj, "doctrines")
        .and_then(|v| v.extract().ok())
        .unwrap_or_default();
    let objective: Option<String> =
        get_attr_opt(obj, "objective").and_then(|v| v.extract().ok());

    Ok(SelectionProfile {
        kind,
        budget_base,
        personnel_base,
        exercises_base,
        priorities,
        doctrines,
        objective,
    })
}
