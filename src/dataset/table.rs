//! Tabular dataset keyed by year

use serde::Serialize;

use crate::error::{DefenseAnalyticsError, Result};

/// One named column, aligned to the dataset's year axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// Year-keyed table of named numeric series
///
/// Columns keep insertion order and are always exactly as long as the year
/// axis; there are no missing values inside a present column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    years: Vec<i32>,
    columns: Vec<Column>,
}

impl Dataset {
    /// Create an empty dataset over the given year axis
    pub fn new(years: Vec<i32>) -> Self {
        Self {
            years,
            columns: Vec::with_capacity(32),
        }
    }

    /// The year axis
    #[inline]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Number of rows (years)
    #[inline]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Append a column; values must be aligned to the year axis
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<f64>) {
        debug_assert_eq!(values.len(), self.years.len());
        self.columns.push(Column {
            name: name.into(),
            values,
        });
    }

    /// Look up a column by name; absence means "not applicable", not an error
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .map(|column| column.values.as_slice())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column.name == name)
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    /// All columns in insertion order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Serialize the table to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|err| DefenseAnalyticsError::SerializationError(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        let mut dataset = Dataset::new(vec![2000, 2001, 2002]);
        dataset.push_column("alpha", vec![1.0, 2.0, 3.0]);
        dataset.push_column("beta", vec![9.0, 8.0, 7.0]);
        dataset
    }

    #[test]
    fn test_column_lookup() {
        let dataset = sample();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.column("alpha"), Some([1.0, 2.0, 3.0].as_slice()));
        assert_eq!(dataset.column("gamma"), None);
        assert!(dataset.has_column("beta"));
        assert!(!dataset.has_column("gamma"));
    }

    #[test]
    fn test_column_order_is_insertion_order() {
        let dataset = sample();
        assert_eq!(dataset.column_names(), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_to_json_shape() {
        let dataset = sample();
        let json: serde_json::Value = serde_json::from_str(&dataset.to_json().unwrap()).unwrap();
        assert_eq!(json["years"], serde_json::json!([2000, 2001, 2002]));
        assert_eq!(json["columns"][0]["name"], "alpha");
        assert_eq!(json["columns"][1]["values"][2], 7.0);
    }
}
