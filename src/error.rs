//! Error types for the defense analytics core engine

use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::PyErr;
use thiserror::Error;

/// Main error type for the defense analytics core engine
///
/// The dataset-assembly path is infallible: unknown selections resolve to
/// the generic fallback profile and every formula is total over the year
/// domain. Errors only arise at the binding boundary.
#[derive(Error, Debug)]
pub enum DefenseAnalyticsError {
    #[error("Series not found: {0}")]
    SeriesNotFound(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<DefenseAnalyticsError> for PyErr {
    fn from(err: DefenseAnalyticsError) -> PyErr {
        match err {
            DefenseAnalyticsError::SeriesNotFound(name) => {
                PyKeyError::new_err(format!("Series not found: {}", name))
            }
            DefenseAnalyticsError::DeserializationError(msg) => {
                PyValueError::new_err(format!("Deserialization error: {}", msg))
            }
            DefenseAnalyticsError::SerializationError(msg) => {
                PyValueError::new_err(format!("Serialization error: {}", msg))
            }
        }
    }
}

/// Result type alias for the defense analytics core engine
pub type Result<T> = std::result::Result<T, DefenseAnalyticsError>;
