//! Conversions and comparisons for plain numeric arrays
//!
//! A `None` row stands for a row that is missing altogether, which is not the
//! same thing as an empty row.

/// Convert a slice of numbers into nullable numbers
///
/// Every element is kept, in order.
pub fn to_number_array(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

/// Row-wise [`to_number_array`]
///
/// Outer and inner lengths are preserved, including empty rows.
pub fn to_number_array_2d<R: AsRef<[f64]>>(values: &[R]) -> Vec<Vec<Option<f64>>> {
    values.iter().map(|row| to_number_array(row.as_ref())).collect()
}

/// Deep equality for 2D arrays whose rows may be missing
///
/// Two missing arrays are equal; a missing array never equals a present one.
/// The same rule applies to each pair of rows. Elements compare by bit
/// pattern, so NaN equals NaN and `0.0` differs from `-0.0`.
pub fn arrays_equal(a: Option<&[Option<Vec<f64>>]>, b: Option<&[Option<Vec<f64>>]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.len() == b.len()
                && a.iter().zip(b).all(|(row_a, row_b)| match (row_a, row_b) {
                    (None, None) => true,
                    (Some(x), Some(y)) => rows_equal(x, y),
                    _ => false,
                })
        }
        _ => false,
    }
}

fn rows_equal(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| same_value(*x, *y))
}

fn same_value(x: f64, y: f64) -> bool {
    x.to_bits() == y.to_bits() || (x.is_nan() && y.is_nan())
}

/// Deep copy of a 2D array
///
/// Every row of the result is independently owned. Missing rows stay missing.
pub fn clone_array_2d(source: &[Option<Vec<f64>>]) -> Vec<Option<Vec<f64>>> {
    source
        .iter()
        .map(|row| row.as_ref().map(|r| r.to_vec()))
        .collect()
}
