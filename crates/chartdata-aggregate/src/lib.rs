//! Aggregation helpers over chart data
//!
//! This crate provides the summary operations charts need before plotting:
//!
//! - **Totals**: [`column_total`], [`row_total`] and their index-restricted
//!   variants over any [`Values2D`](chartdata_core::Values2D) table
//! - **Cumulative percentages**: [`cumulative_percentages`] over any
//!   [`KeyedValues`](chartdata_core::KeyedValues) collection, e.g. for Pareto
//!   charts
//! - **Array helpers**: conversion to nullable numbers, deep equality and deep
//!   copies of 2D arrays
//!
//! Empty cells and missing values always count as zero.
//!
//! # Examples
//!
//! ```rust
//! use chartdata_aggregate::{column_total, row_total, row_total_for_columns};
//! use chartdata_core::ArrayTable;
//!
//! let table = ArrayTable::new(vec![
//!     vec![Some(10.0), Some(20.0), Some(30.0)],
//!     vec![None, Some(5.0), Some(1.0)],
//! ])
//! .unwrap();
//!
//! assert_eq!(row_total(&table, 0), 60.0);
//! assert_eq!(column_total(&table, 0), 10.0);
//! assert_eq!(row_total_for_columns(&table, 0, &[0, 2, 7]), 40.0);
//! ```

pub mod arrays;
pub mod config;
pub mod cumulative;
pub mod totals;

pub use arrays::{arrays_equal, clone_array_2d, to_number_array, to_number_array_2d};
pub use config::{CumulativeOptions, ZeroTotalPolicy};
pub use cumulative::{cumulative_percentages, cumulative_percentages_with};
pub use totals::{column_total, column_total_for_rows, row_total, row_total_for_columns};
