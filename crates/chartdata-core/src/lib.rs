//! Core traits and types for chart data utilities
//!
//! This crate provides the shared foundation used by the other chartdata
//! crates:
//!
//! - **Error handling**: a single [`Error`] type and [`Result`] alias
//! - **Capability traits**: [`Values2D`] for tables, [`KeyedValues`] for
//!   ordered keyed collections
//! - **In-memory containers**: [`ArrayTable`] and [`DefaultKeyedValues`]
//!
//! # Example
//!
//! ```rust
//! use chartdata_core::{ArrayTable, DefaultKeyedValues, KeyedValues, Values2D};
//!
//! let table = ArrayTable::from_values(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! assert_eq!(table.value(1, 0), Some(3.0));
//!
//! let mut counts = DefaultKeyedValues::new();
//! counts.add_value("apples", 5.0);
//! counts.add_value("pears", None);
//! assert_eq!(counts.item_count(), 2);
//! ```

pub mod error;
pub mod keyed;
pub mod table;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};
pub use keyed::{DefaultKeyedValues, SortOrder};
pub use table::ArrayTable;
pub use traits::{KeyedValues, Values2D};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ArrayTable, DefaultKeyedValues, Error, KeyedValues, Result, SortOrder, Values2D,
    };
}
