//! Cumulative percentages over keyed values

use crate::config::{CumulativeOptions, ZeroTotalPolicy};
use chartdata_core::{DefaultKeyedValues, Error, KeyedValues, Result};
use std::hash::Hash;
use tracing::{debug, instrument};

/// Running share of the total at each key
///
/// Item `i` of the result holds `sum(values[0..=i]) / sum(values)`, with the
/// same keys in the same order as `data`. Missing values count as zero in
/// both sums. A zero total yields NaN (or ±infinity) entries; use
/// [`cumulative_percentages_with`] to reject that case instead.
///
/// # Examples
///
/// ```rust
/// use chartdata_aggregate::cumulative_percentages;
/// use chartdata_core::{DefaultKeyedValues, KeyedValues};
///
/// let mut data = DefaultKeyedValues::new();
/// data.add_value(0, 5.0);
/// data.add_value(1, 9.0);
/// data.add_value(2, 2.0);
///
/// let result = cumulative_percentages(&data);
/// assert_eq!(result.value(0), Some(0.3125));
/// assert_eq!(result.value(1), Some(0.875));
/// assert_eq!(result.value(2), Some(1.0));
/// ```
pub fn cumulative_percentages<K>(data: &K) -> DefaultKeyedValues<K::Key>
where
    K: KeyedValues + ?Sized,
    K::Key: Eq + Hash,
{
    let total = total_of(data);
    accumulate(data, total)
}

/// [`cumulative_percentages`] with explicit options
///
/// # Errors
///
/// Returns [`Error::Computation`] if the total is zero and the policy is
/// [`ZeroTotalPolicy::Reject`].
#[instrument(level = "debug", skip(data), fields(n_items = data.item_count()))]
pub fn cumulative_percentages_with<K>(
    data: &K,
    options: &CumulativeOptions,
) -> Result<DefaultKeyedValues<K::Key>>
where
    K: KeyedValues + ?Sized,
    K::Key: Eq + Hash,
{
    let total = total_of(data);
    if total == 0.0 && options.zero_total == ZeroTotalPolicy::Reject {
        return Err(Error::zero_total("cumulative percentages"));
    }
    Ok(accumulate(data, total))
}

fn total_of<K: KeyedValues + ?Sized>(data: &K) -> f64 {
    (0..data.item_count()).filter_map(|i| data.value(i)).sum()
}

fn accumulate<K>(data: &K, total: f64) -> DefaultKeyedValues<K::Key>
where
    K: KeyedValues + ?Sized,
    K::Key: Eq + Hash,
{
    if total == 0.0 {
        debug!(n_items = data.item_count(), "values sum to zero, percentages are undefined");
    }

    let count = data.item_count();
    let mut result = DefaultKeyedValues::with_capacity(count);
    let mut running = 0.0;
    for i in 0..count {
        if let Some(value) = data.value(i) {
            running += value;
        }
        result.add_value(data.key(i), running / total);
    }
    result
}
