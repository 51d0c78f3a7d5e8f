//! Row and column totals over [`Values2D`] tables
//!
//! Empty cells count as zero. Indices are not checked against the table's
//! dimensions: whatever the table answers for an out-of-range index is what
//! gets summed, and well-behaved tables answer `None`.

use chartdata_core::Values2D;
use std::collections::BTreeSet;
use tracing::{instrument, trace};

/// Sum of every cell in `column`
///
/// Iterates rows `0..row_count()`. A table with no rows totals zero.
#[instrument(level = "trace", skip(data))]
pub fn column_total<D: Values2D + ?Sized>(data: &D, column: isize) -> f64 {
    (0..data.row_count())
        .filter_map(|row| data.value(row, column))
        .sum()
}

/// Sum of every cell in `row`
///
/// Iterates columns `0..column_count()`, last column included.
#[instrument(level = "trace", skip(data))]
pub fn row_total<D: Values2D + ?Sized>(data: &D, row: isize) -> f64 {
    (0..data.column_count())
        .filter_map(|column| data.value(row, column))
        .sum()
}

/// Sum of the cells in `column` whose row appears in `valid_rows`
///
/// `valid_rows` is treated as a set: repeated indices count once. Indices at
/// or beyond `row_count()` are skipped.
#[instrument(level = "trace", skip(data, valid_rows), fields(n_valid = valid_rows.len()))]
pub fn column_total_for_rows<D: Values2D + ?Sized>(
    data: &D,
    column: isize,
    valid_rows: &[isize],
) -> f64 {
    let row_count = data.row_count();
    restricted_indices(valid_rows, row_count)
        .filter_map(|row| data.value(row, column))
        .sum()
}

/// Sum of the cells in `row` whose column appears in `valid_columns`
///
/// `valid_columns` is treated as a set: repeated indices count once. Indices
/// at or beyond `column_count()` are skipped, and a table reporting a negative
/// column count totals zero.
#[instrument(level = "trace", skip(data, valid_columns), fields(n_valid = valid_columns.len()))]
pub fn row_total_for_columns<D: Values2D + ?Sized>(
    data: &D,
    row: isize,
    valid_columns: &[isize],
) -> f64 {
    let column_count = data.column_count();
    if column_count < 0 {
        trace!(column_count, "table reports a negative column count");
        return 0.0;
    }
    restricted_indices(valid_columns, column_count)
        .filter_map(|column| data.value(row, column))
        .sum()
}

fn restricted_indices(valid: &[isize], count: isize) -> impl Iterator<Item = isize> {
    let unique: BTreeSet<isize> = valid.iter().copied().collect();
    unique.into_iter().filter(move |&index| {
        let inside = index < count;
        if !inside {
            trace!(index, count, "skipping index outside table");
        }
        inside
    })
}
