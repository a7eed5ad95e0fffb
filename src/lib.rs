//! Defense Analytics Core - deterministic strategic-capability synthesis engine
//!
//! This crate provides the data-synthesis core behind a Python dashboard
//! with Python bindings via PyO3. Given a selection name it resolves a
//! configuration profile, synthesizes the capability time series for
//! 2000-2027, and hands the assembled dataset back as a session handle.

use pyo3::prelude::*;

pub mod config;
pub mod dataset;
pub mod error;
pub mod series;

use crate::config::SelectionCatalog;
use crate::dataset::AnalysisSession;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use pyo3::types::PyDict;
use std::sync::Arc;

// ============================================================================
// Cached Catalog
// ============================================================================

/// Global cached selection catalog
static CACHED_CATALOG: OnceCell<Arc<RwLock<SelectionCatalog>>> = OnceCell::new();

/// Get the cached catalog, initializing with the built-in entries on first use
fn catalog_handle() -> Arc<RwLock<SelectionCatalog>> {
    CACHED_CATALOG
        .get_or_init(|| Arc::new(RwLock::new(SelectionCatalog::builtin())))
        .clone()
}

// ============================================================================
// Python Functions
// ============================================================================

/// Initialize the selection catalog (optional; call once at startup)
///
/// Without arguments this resets to the built-in catalog. A dict of
/// `{selection name: profile}` is merged on top of the built-ins, replacing
/// entries with the same name. Calling `assemble` without `init_catalog`
/// works too: the built-ins are used.
///
/// # Arguments
/// * `profiles` - Optional mapping of selection name to profile dict/object
///   with fields `kind`, `budget_base`, `personnel_base`, `exercises_base`,
///   `priorities`, `doctrines`, `objective`
#[pyfunction]
#[pyo3(signature = (profiles=None))]
fn init_catalog(profiles: Option<&Bound<'_, PyDict>>) -> PyResult<()> {
    let catalog = match profiles {
        Some(dict) => SelectionCatalog::with_overrides(config::deserialize_profiles(dict)?),
        None => SelectionCatalog::builtin(),
    };

    // If already initialized, replace the catalog
    if let Some(existing) = CACHED_CATALOG.get() {
        let mut guard = existing.write();
        *guard = catalog;
    } else {
        let _ = CACHED_CATALOG.set(Arc::new(RwLock::new(catalog)));
    }

    Ok(())
}

/// Check if the catalog is initialized
#[pyfunction]
fn is_catalog_initialized() -> bool {
    CACHED_CATALOG.get().is_some()
}

/// Names of the selections with a catalog entry, sorted
///
/// Any other name still assembles, via the generic fallback profile.
#[pyfunction]
fn list_selections() -> Vec<String> {
    let handle = catalog_handle();
    let catalog = handle.read();
    catalog
        .selections()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Names of every registered series, core first, then the gated groups
#[pyfunction]
fn list_series() -> Vec<String> {
    series::series_names()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Assemble the full 2000-2027 dataset for a selection
///
/// Unknown selection names resolve to the generic fallback profile; this
/// never raises.
///
/// # Arguments
/// * `selection` - Branch, program, or alliance name
///
/// # Returns
/// An AnalysisSession holding the dataset and the resolved profile
#[pyfunction]
fn assemble(selection: &str) -> AnalysisSession {
    let handle = catalog_handle();
    let catalog = handle.read();
    let (dataset, profile) = dataset::assemble(&catalog, selection);
    AnalysisSession::new(dataset, profile)
}

/// Assemble a dataset asynchronously
///
/// Runs the assembly in a background thread via Tokio's spawn_blocking so
/// Python's asyncio event loop stays responsive; the GIL is released during
/// the computation.
///
/// # Example (Python)
/// ```python
/// session = await assemble_async("US Navy")
/// print(session.column("defense_budget"))
/// ```
#[pyfunction]
fn assemble_async(py: Python<'_>, selection: String) -> PyResult<Bound<'_, PyAny>> {
    let handle = catalog_handle();

    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        let session = tokio::task::spawn_blocking(move || {
            let catalog = handle.read();
            let (dataset, profile) = dataset::assemble(&catalog, &selection);
            AnalysisSession::new(dataset, profile)
        })
        .await
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Assembly task panicked: {}",
                e
            ))
        })?;

        Ok(session)
    })
}

/// Synthesize a single series over the 2000-2027 axis for a selection
///
/// # Raises
/// KeyError if `series_name` is not a registered series
#[pyfunction]
fn synthesize(series_name: &str, selection: &str) -> PyResult<Vec<f64>> {
    let handle = catalog_handle();
    let catalog = handle.read();
    let profile = catalog.resolve(selection);
    let years = dataset::year_range();
    Ok(series::synthesize(series_name, &years, &profile)?)
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn defense_analytics_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_catalog, m)?)?;
    m.add_function(wrap_pyfunction!(is_catalog_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(list_selections, m)?)?;
    m.add_function(wrap_pyfunction!(list_series, m)?)?;
    m.add_function(wrap_pyfunction!(assemble, m)?)?;
    m.add_function(wrap_pyfunction!(assemble_async, m)?)?;
    m.add_function(wrap_pyfunction!(synthesize, m)?)?;
    m.add_class::<AnalysisSession>()?;
    Ok(())
}
