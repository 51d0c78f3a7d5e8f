//! In-memory two-dimensional table

use crate::{Error, Result, Values2D};

/// A rectangular table of nullable numbers stored row-major
///
/// Lookups outside the stored cells, including negative indices, yield `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayTable {
    rows: Vec<Vec<Option<f64>>>,
    columns: usize,
}

impl ArrayTable {
    /// Create a table from nullable rows
    ///
    /// All rows must have the same length.
    pub fn new(rows: Vec<Vec<Option<f64>>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
            return Err(Error::InvalidParameter(format!(
                "Row {index} has {} columns, expected {columns}",
                row.len()
            )));
        }
        Ok(Self { rows, columns })
    }

    /// Create a table where every cell holds a value
    pub fn from_values(rows: &[Vec<f64>]) -> Result<Self> {
        Self::new(
            rows.iter()
                .map(|row| row.iter().copied().map(Some).collect())
                .collect(),
        )
    }

    /// Get the stored rows
    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.rows
    }

    /// Check if the table holds no cells
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns == 0
    }

    /// Replace a single cell, returning the previous value
    ///
    /// Returns an error if the cell lies outside the table.
    pub fn set_value(&mut self, row: usize, column: usize, value: Option<f64>) -> Result<Option<f64>> {
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(column))
            .ok_or_else(|| {
                Error::InvalidParameter(format!("Cell ({row}, {column}) is outside the table"))
            })?;
        Ok(std::mem::replace(cell, value))
    }
}

impl Values2D for ArrayTable {
    fn row_count(&self) -> isize {
        self.rows.len() as isize
    }

    fn column_count(&self) -> isize {
        self.columns as isize
    }

    fn value(&self, row: isize, column: isize) -> Option<f64> {
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        self.rows.get(row)?.get(column).copied().flatten()
    }
}
