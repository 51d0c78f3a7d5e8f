//! Error types for chart data utilities
//!
//! Provides a unified error type for all chartdata crates.

use thiserror::Error;

/// Core error type for chart data operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Range bounds in the wrong order
    #[error("Invalid range: lower bound ({lower}) must be <= upper bound ({upper})")]
    InvalidRange { lower: f64, upper: f64 },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a lower bound that exceeds the upper bound
    pub fn inverted_bounds(lower: f64, upper: f64) -> Self {
        Self::InvalidRange { lower, upper }
    }

    /// Create an error for a negative scaling factor
    pub fn negative_factor(factor: f64) -> Self {
        Self::InvalidParameter(format!("Negative 'factor' argument: {factor}"))
    }

    /// Create an error for a division by a zero total
    pub fn zero_total(context: &str) -> Self {
        Self::Computation(format!("{context}: total is zero"))
    }
}
