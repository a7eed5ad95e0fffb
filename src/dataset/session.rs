//! AnalysisSession - Stateful session for Python-Rust boundary
//!
//! Holds an assembled dataset and its profile in Rust heap memory so the
//! Python dashboard can access columns lazily instead of receiving one large
//! serialized payload per interaction.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use serde::Serialize;

use crate::config::SelectionProfile;
use crate::dataset::Dataset;
use crate::error::DefenseAnalyticsError;

// ============================================================================
// Pre-computed Summary
// ============================================================================

/// Endpoint summary for one column - the numbers the metric cards display
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    /// Column name
    pub name: String,
    /// Value at the first year of the axis
    pub baseline: f64,
    /// Value at the last year of the axis
    pub latest: f64,
    /// Relative change in percent; `None` when the baseline is zero
    pub change_percent: Option<f64>,
}

/// Summarize every column of a dataset by its endpoints
pub fn summarize(dataset: &Dataset) -> Vec<SeriesSummary> {
    dataset
        .columns()
        .iter()
        .filter_map(|column| {
            let baseline = *column.values.first()?;
            let latest = *column.values.last()?;
            let change_percent =
                (baseline != 0.0).then(|| (latest - baseline) / baseline * 100.0);
            Some(SeriesSummary {
                name: column.name.clone(),
                baseline,
                latest,
                change_percent,
            })
        })
        .collect()
}

#[derive(Serialize)]
struct SessionExport<'a> {
    profile: &'a SelectionProfile,
    dataset: &'a Dataset,
}

// ============================================================================
// AnalysisSession PyClass
// ============================================================================

/// AnalysisSession - assembled dataset held in Rust heap memory
///
/// Python holds a handle and reads columns, profile fields, and endpoint
/// summaries on demand. A column that is absent is "not applicable for this
/// selection" and reads as `None`, never an error.
#[pyclass]
pub struct AnalysisSession {
    dataset: Dataset,
    profile: SelectionProfile,
    /// Per-column endpoint summary, computed once at construction
    summary: Vec<SeriesSummary>,
}

impl AnalysisSession {
    /// Wrap an assembled dataset with its resolved profile
    pub fn new(dataset: Dataset, profile: SelectionProfile) -> Self {
        let summary = summarize(&dataset);
        Self {
            dataset,
            profile,
            summary,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn profile(&self) -> &SelectionProfile {
        &self.profile
    }

    pub fn summary(&self) -> &[SeriesSummary] {
        &self.summary
    }
}

// ============================================================================
// PyMethods Implementation
// ============================================================================

#[pymethods]
impl AnalysisSession {
    /// Archetype tag of the resolved profile
    #[getter]
    fn kind(&self) -> String {
        self.profile.kind.clone()
    }

    /// Number of rows (years) in the dataset
    #[getter]
    fn total_years(&self) -> usize {
        self.dataset.len()
    }

    /// First year of the axis
    #[getter]
    fn start_year(&self) -> Option<i32> {
        self.dataset.years().first().copied()
    }

    /// Last year of the axis
    #[getter]
    fn end_year(&self) -> Option<i32> {
        self.dataset.years().last().copied()
    }

    /// The year axis
    fn years(&self) -> Vec<i32> {
        self.dataset.years().to_vec()
    }

    /// Column names in column order
    fn column_names(&self) -> Vec<String> {
        self.dataset
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn has_column(&self, name: &str) -> bool {
        self.dataset.has_column(name)
    }

    /// One column aligned to the year axis, or None if not applicable
    fn column(&self, name: &str) -> Option<Vec<f64>> {
        self.dataset.column(name).map(<[f64]>::to_vec)
    }

    /// Value at the first year, or None if the column is absent
    fn baseline(&self, name: &str) -> Option<f64> {
        self.summary_for(name).map(|entry| entry.baseline)
    }

    /// Value at the last year, or None if the column is absent
    fn latest(&self, name: &str) -> Option<f64> {
        self.summary_for(name).map(|entry| entry.latest)
    }

    /// Relative change over the axis in percent
    ///
    /// None when the column is absent or its baseline is zero.
    fn change_percent(&self, name: &str) -> Option<f64> {
        self.summary_for(name).and_then(|entry| entry.change_percent)
    }

    /// Get the resolved profile as a dict
    fn get_profile(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let dict = PyDict::new(py);
        dict.set_item("kind", &self.profile.kind)?;
        dict.set_item("budget_base", self.profile.budget_base)?;
        dict.set_item("personnel_base", self.profile.personnel_base)?;
        dict.set_item("exercises_base", self.profile.exercises_base)?;

        // Sorted for stable display; membership is what matters
        let mut priorities: Vec<&str> =
            self.profile.priorities.iter().map(String::as_str).collect();
        priorities.sort_unstable();
        dict.set_item("priorities", priorities)?;

        dict.set_item("doctrines", self.profile.doctrines.clone())?;
        dict.set_item("objective", self.profile.objective.as_deref())?;

        Ok(dict.into())
    }

    /// Get the endpoint summary for every column, in column order
    fn get_summary(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for entry in &self.summary {
            let dict = PyDict::new(py);
            dict.set_item("name", &entry.name)?;
            dict.set_item("baseline", entry.baseline)?;
            dict.set_item("latest", entry.latest)?;
            dict.set_item("change_percent", entry.change_percent)?;
            list.append(dict)?;
        }
        Ok(list.into())
    }

    /// Serialize the profile and dataset to one JSON document
    fn to_json(&self) -> PyResult<String> {
        let export = SessionExport {
            profile: &self.profile,
            dataset: &self.dataset,
        };
        serde_json::to_string(&export)
            .map_err(|err| DefenseAnalyticsError::SerializationError(err.to_string()).into())
    }
}

// ============================================================================
// Private Helper Methods
// ============================================================================

impl AnalysisSession {
    fn summary_for(&self, name: &str) -> Option<&SeriesSummary> {
        self.summary.iter().find(|entry| entry.name == name)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
