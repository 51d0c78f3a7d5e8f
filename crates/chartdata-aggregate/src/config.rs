//! Configuration types for aggregation

use serde::{Deserialize, Serialize};

/// What to do when the values being turned into percentages sum to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroTotalPolicy {
    /// Divide anyway, producing NaN (or ±infinity) entries
    #[default]
    Propagate,

    /// Fail with a computation error
    Reject,
}

/// Options for [`cumulative_percentages_with`](crate::cumulative_percentages_with)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CumulativeOptions {
    /// Handling of a zero total
    pub zero_total: ZeroTotalPolicy,
}

impl CumulativeOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the zero-total policy
    pub fn with_zero_total(mut self, policy: ZeroTotalPolicy) -> Self {
        self.zero_total = policy;
        self
    }
}
