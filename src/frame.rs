//! Tabular input for chart builders.
//!
//! Builders consume named columns rather than a typed table so that a
//! missing word column is a checkable condition. [`DataFrame::pivot`]
//! reshapes a frame for the heatmap, which wants words as column headers.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordFreqError};

/// Values held by a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
    Text(Vec<String>),
    Numeric(Vec<f64>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Text(values) => values.len(),
            ColumnData::Numeric(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn text<S: Into<String>>(name: S, values: Vec<String>) -> Self {
        Column {
            name: name.into(),
            data: ColumnData::Text(values),
        }
    }

    pub fn numeric<S: Into<String>>(name: S, values: Vec<f64>) -> Self {
        Column {
            name: name.into(),
            data: ColumnData::Numeric(values),
        }
    }
}

/// Ordered, named columns of equal length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataFrame {
    columns: Vec<Column>,
}

impl DataFrame {
    pub fn new(columns: Vec<Column>) -> Self {
        DataFrame { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Text values of `name`, or `None` if absent or numeric.
    pub fn text_column(&self, name: &str) -> Option<&[String]> {
        match self.column(name).map(|c| &c.data) {
            Some(ColumnData::Text(values)) => Some(values),
            _ => None,
        }
    }

    /// Numeric values of `name`, or `None` if absent or textual.
    pub fn numeric_column(&self, name: &str) -> Option<&[f64]> {
        match self.column(name).map(|c| &c.data) {
            Some(ColumnData::Numeric(values)) => Some(values),
            _ => None,
        }
    }

    /// Text values of a column the caller requires.
    pub fn require_text(&self, name: &str) -> Result<&[String]> {
        self.text_column(name).ok_or_else(|| {
            WordFreqError::invalid_argument(format!("DataFrame must have a '{name}' column"))
        })
    }

    /// Numeric values of a column the caller requires.
    pub fn require_numeric(&self, name: &str) -> Result<&[f64]> {
        self.numeric_column(name).ok_or_else(|| {
            WordFreqError::invalid_argument(format!(
                "DataFrame must have a numeric '{name}' column"
            ))
        })
    }

    /// A copy of the frame with `name` removed.
    pub fn without_column(&self, name: &str) -> DataFrame {
        DataFrame {
            columns: self
                .columns
                .iter()
                .filter(|c| c.name != name)
                .cloned()
                .collect(),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map(|c| c.data.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    /// Use `index` as column headers and turn every numeric column into a row.
    pub fn pivot(&self, index: &str) -> Result<Matrix> {
        let headers = self.require_text(index)?.to_vec();

        let mut row_labels = Vec::new();
        let mut values = Vec::new();
        for column in &self.columns {
            if let ColumnData::Numeric(data) = &column.data {
                row_labels.push(column.name.clone());
                values.push(data.clone());
            }
        }

        Ok(Matrix {
            row_labels,
            column_labels: headers,
            values,
        })
    }
}

/// A labelled numeric grid, rows by columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn num_rows(&self) -> usize {
        self.values.len()
    }

    pub fn num_columns(&self) -> usize {
        self.column_labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0 || self.num_columns() == 0
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Smallest and largest cell, or `None` for an empty matrix.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .flatten()
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
