//! Validation errors raised at watch construction boundaries.

use thiserror::Error;

/// Error type for validated construction of watch and deck state.
///
/// The change reducers themselves are total over `f64` and never return
/// this; only constructors and activity import reject inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PacerError {
    /// A stored quantity was `NaN` or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending quantity.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A stored quantity was zero or negative, which makes the watch
    /// identity undefined.
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending quantity.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Checks that a stored quantity is finite and strictly positive.
pub fn check_positive(field: &'static str, value: f64) -> Result<f64, PacerError> {
    if !value.is_finite() {
        return Err(PacerError::NonFinite { field, value });
    }
    if value <= 0.0 {
        return Err(PacerError::NonPositive { field, value });
    }
    Ok(value)
}
