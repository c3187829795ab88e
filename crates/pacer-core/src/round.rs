//! Commit rounding applied when a continuous gesture ends.
//!
//! While a drag is in progress raw floating point values flow through so
//! the display updates smoothly; only the final value is rounded.

/// Floors to the whole unit. Used for distance, time, cadence, stride,
/// height and weight commits.
pub fn floor_whole(value: f64) -> f64 {
    value.floor()
}

/// Floors to three decimal places. Used for pace and BMI commits.
pub fn floor_milli(value: f64) -> f64 {
    (value * 1000.0).floor() / 1000.0
}
