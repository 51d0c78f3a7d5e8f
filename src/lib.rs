//! Numeric data utilities for charting
//!
//! This crate re-exports the chartdata workspace crates:
//!
//! - [`data`]: error types, the [`Values2D`] and [`KeyedValues`] traits and
//!   their in-memory implementations
//! - [`range`]: the immutable [`Range`] interval type
//! - [`aggregate`]: row/column totals, cumulative percentages and 2D array
//!   helpers
//!
//! # Example
//!
//! ```rust
//! use chartdata::prelude::*;
//!
//! let table = ArrayTable::from_values(&[vec![1.0, 4.0], vec![3.0, 2.0]]).unwrap();
//!
//! // Axis extent for the first column, padded by 5% on each side
//! let mut extent = None;
//! for row in 0..table.row_count() {
//!     if let Some(v) = table.value(row, 0) {
//!         extent = Some(Range::expand_to_include(extent, v));
//!     }
//! }
//! let axis = extent.unwrap().expand(0.05, 0.05).unwrap();
//! assert!(axis.contains(column_total(&table, 0) / 2.0));
//! ```

pub use chartdata_aggregate as aggregate;
pub use chartdata_core as data;
pub use chartdata_range as range;

pub use chartdata_aggregate::{
    arrays_equal, clone_array_2d, column_total, column_total_for_rows, cumulative_percentages,
    cumulative_percentages_with, row_total, row_total_for_columns, to_number_array,
    to_number_array_2d, CumulativeOptions, ZeroTotalPolicy,
};
pub use chartdata_core::{
    ArrayTable, DefaultKeyedValues, Error, KeyedValues, Result, SortOrder, Values2D,
};
pub use chartdata_range::Range;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        column_total, cumulative_percentages, row_total, ArrayTable, DefaultKeyedValues,
        KeyedValues, Range, Result, Values2D,
    };
}
