//! Capability traits for the data containers the aggregators read from
//!
//! Both traits are read-only views. Implementors own their storage; the
//! aggregation functions never mutate what they are given.

/// A two-dimensional table of nullable numbers
///
/// Counts and indices are signed. A malformed table may report a negative
/// count, and callers may ask for negative indices; implementors should answer
/// `None` for any cell they do not hold rather than panic.
pub trait Values2D {
    /// Number of rows in the table
    fn row_count(&self) -> isize;

    /// Number of columns in the table
    fn column_count(&self) -> isize;

    /// Value at `(row, column)`, or `None` for an empty or missing cell
    fn value(&self, row: isize, column: isize) -> Option<f64>;
}

impl<T: Values2D + ?Sized> Values2D for &T {
    fn row_count(&self) -> isize {
        (**self).row_count()
    }

    fn column_count(&self) -> isize {
        (**self).column_count()
    }

    fn value(&self, row: isize, column: isize) -> Option<f64> {
        (**self).value(row, column)
    }
}

/// An ordered collection of `(key, nullable number)` pairs
///
/// Keys are unique and iteration order is storage order.
pub trait KeyedValues {
    /// Key type
    type Key: Clone;

    /// Number of items
    fn item_count(&self) -> usize;

    /// Key at `index`
    ///
    /// # Panics
    ///
    /// May panic if `index >= item_count()`.
    fn key(&self, index: usize) -> Self::Key;

    /// Value at `index`, `None` when the item has no value
    fn value(&self, index: usize) -> Option<f64>;
}

impl<T: KeyedValues + ?Sized> KeyedValues for &T {
    type Key = T::Key;

    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn key(&self, index: usize) -> Self::Key {
        (**self).key(index)
    }

    fn value(&self, index: usize) -> Option<f64> {
        (**self).value(index)
    }
}
