//! The [`Range`] value type

use chartdata_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// An immutable closed interval `[lower, upper]`
///
/// Construction enforces `lower <= upper`. NaN bounds pass that check, which
/// is what lets [`Range::combine_ignoring_nan`] work on partially unknown
/// ranges.
///
/// Equality is plain floating-point equality on both bounds, so a range with
/// a NaN bound is not equal to itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct Range {
    lower: f64,
    upper: f64,
}

#[derive(Deserialize)]
struct RawRange {
    lower: f64,
    upper: f64,
}

impl TryFrom<RawRange> for Range {
    type Error = Error;

    fn try_from(raw: RawRange) -> Result<Self> {
        Range::new(raw.lower, raw.upper)
    }
}

impl TryFrom<(f64, f64)> for Range {
    type Error = Error;

    fn try_from((lower, upper): (f64, f64)) -> Result<Self> {
        Range::new(lower, upper)
    }
}

impl Range {
    /// Create a new range
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `lower > upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if lower > upper {
            debug!(lower, upper, "rejected range with inverted bounds");
            return Err(Error::inverted_bounds(lower, upper));
        }
        Ok(Self { lower, upper })
    }

    /// Build from bounds already known to be ordered (or NaN)
    fn from_ordered(lower: f64, upper: f64) -> Self {
        debug_assert!(lower <= upper || lower.is_nan() || upper.is_nan());
        Self { lower, upper }
    }

    /// Get the lower bound
    pub fn lower_bound(&self) -> f64 {
        self.lower
    }

    /// Get the upper bound
    pub fn upper_bound(&self) -> f64 {
        self.upper
    }

    /// Get the length (`upper - lower`)
    pub fn length(&self) -> f64 {
        self.upper - self.lower
    }

    /// Get the midpoint
    pub fn central_value(&self) -> f64 {
        self.lower / 2.0 + self.upper / 2.0
    }

    /// Check if `value` lies within the closed interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if the interval `[b0, b1]` overlaps this range
    ///
    /// An interval given backwards (`b0 > b1`) never intersects.
    pub fn intersects(&self, b0: f64, b1: f64) -> bool {
        if b0 <= self.lower {
            b1 > self.lower
        } else {
            b0 <= self.upper && b1 >= b0
        }
    }

    /// Check if `other` overlaps this range
    pub fn intersects_range(&self, other: &Range) -> bool {
        self.intersects(other.lower, other.upper)
    }

    /// Clamp `value` into the range
    ///
    /// A NaN value is returned unchanged.
    pub fn constrain(&self, value: f64) -> f64 {
        if value < self.lower {
            self.lower
        } else if value > self.upper {
            self.upper
        } else {
            value
        }
    }

    /// True only when both bounds are NaN
    pub fn is_nan_range(&self) -> bool {
        self.lower.is_nan() && self.upper.is_nan()
    }

    /// Smallest range spanning both inputs
    ///
    /// A missing operand yields the other one. NaN bounds propagate; see
    /// [`combine_ignoring_nan`](Self::combine_ignoring_nan) for the tolerant
    /// variant.
    pub fn combine(range1: Option<Range>, range2: Option<Range>) -> Option<Range> {
        match (range1, range2) {
            (None, other) | (other, None) => other,
            (Some(r1), Some(r2)) => Some(Range::from_ordered(
                nan_propagating_min(r1.lower, r2.lower),
                nan_propagating_max(r1.upper, r2.upper),
            )),
        }
    }

    /// Smallest range spanning both inputs, skipping NaN bounds
    ///
    /// Each bound is combined independently and a NaN on one side defers to
    /// the other side. Returns `Ok(None)` when the result would have two NaN
    /// bounds, including when the only operand given is a NaN range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if the surviving bounds are inverted,
    /// as with `[NaN, 1]` combined with `[5, NaN]`.
    pub fn combine_ignoring_nan(
        range1: Option<Range>,
        range2: Option<Range>,
    ) -> Result<Option<Range>> {
        match (range1, range2) {
            (None, None) => Ok(None),
            (Some(only), None) | (None, Some(only)) => Ok((!only.is_nan_range()).then_some(only)),
            (Some(r1), Some(r2)) => {
                // f64::min/max already return the non-NaN operand
                let lower = r1.lower.min(r2.lower);
                let upper = r1.upper.max(r2.upper);
                if lower.is_nan() && upper.is_nan() {
                    Ok(None)
                } else {
                    Range::new(lower, upper).map(Some)
                }
            }
        }
    }

    /// Extend `range` just enough to contain `value`
    ///
    /// With no range, the result is the point range `[value, value]`.
    pub fn expand_to_include(range: Option<Range>, value: f64) -> Range {
        match range {
            None => Range::from_ordered(value, value),
            Some(r) if value < r.lower => Range::from_ordered(value, r.upper),
            Some(r) if value > r.upper => Range::from_ordered(r.lower, value),
            Some(r) => r,
        }
    }

    /// Grow the range by fractions of its length on each side
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if negative margins would push the
    /// lower bound past the upper bound.
    pub fn expand(&self, lower_margin: f64, upper_margin: f64) -> Result<Range> {
        let length = self.length();
        Range::new(
            self.lower - length * lower_margin,
            self.upper + length * upper_margin,
        )
    }

    /// Shift both bounds by `delta` without letting a bound cross zero
    pub fn shift(&self, delta: f64) -> Range {
        self.shift_with(delta, false)
    }

    /// Shift both bounds by `delta`
    ///
    /// When `allow_zero_crossing` is false, a positive bound stops at zero
    /// instead of going negative and a negative bound stops at zero instead of
    /// going positive. A bound sitting exactly at zero moves freely.
    pub fn shift_with(&self, delta: f64, allow_zero_crossing: bool) -> Range {
        if allow_zero_crossing {
            Range::from_ordered(self.lower + delta, self.upper + delta)
        } else {
            Range::from_ordered(
                shift_no_zero_crossing(self.lower, delta),
                shift_no_zero_crossing(self.upper, delta),
            )
        }
    }

    /// Multiply both bounds by `factor`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `factor` is negative.
    pub fn scale(&self, factor: f64) -> Result<Range> {
        if factor < 0.0 {
            return Err(Error::negative_factor(factor));
        }
        Ok(Range::from_ordered(self.lower * factor, self.upper * factor))
    }
}

fn shift_no_zero_crossing(value: f64, delta: f64) -> f64 {
    if value > 0.0 {
        (value + delta).max(0.0)
    } else if value < 0.0 {
        (value + delta).min(0.0)
    } else {
        value + delta
    }
}

fn nan_propagating_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn nan_propagating_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

// -0.0 == 0.0, so both must hash alike
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl Hash for Range {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.lower).hash(state);
        canonical_bits(self.upper).hash(state);
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range[{:?},{:?}]", self.lower, self.upper)
    }
}
