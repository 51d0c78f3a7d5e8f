//! Immutable numeric intervals
//!
//! [`Range`] is a closed interval `[lower, upper]` used for axis extents and
//! data bounds. Every operation returns a new value; nothing mutates in place.
//!
//! # Examples
//!
//! ```rust
//! use chartdata_range::Range;
//!
//! let data = Range::new(2.0, 5.0).unwrap();
//! assert_eq!(data.central_value(), 3.5);
//! assert_eq!(data.constrain(10.0), 5.0);
//!
//! // Pad the axis by 10% on each side
//! let axis = data.expand(0.1, 0.1).unwrap();
//! assert!(axis.contains(1.8));
//!
//! // Merge bounds from several series, one of which has no data yet
//! let merged = Range::combine(Some(data), None);
//! assert_eq!(merged, Some(data));
//! ```
//!
//! Inverted bounds are rejected:
//!
//! ```rust
//! use chartdata_range::Range;
//!
//! assert!(Range::new(10.0, 5.0).is_err());
//! ```

pub mod range;

pub use range::Range;
