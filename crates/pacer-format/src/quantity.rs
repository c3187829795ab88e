//! Display strings for distances, cadence, stride and body quantities.

/// Formats a distance in meters: floored `Nm` under a kilometer, one
/// decimal `N.Nkm` above, with the exact race labels for the marathon
/// distances.
pub fn format_distance(distance_m: f64) -> String {
    if distance_m < 1000.0 {
        return format!("{}m", distance_m.floor() as i64);
    }
    if distance_m == 42195.0 {
        return "42.195km".to_string();
    }
    if distance_m == 21097.5 {
        return "21.0975km".to_string();
    }
    format!("{:.1}km", distance_m / 1000.0)
}

/// Formats a distance in meters with one decimal, for the sub-display.
pub fn format_distance_precise(distance_m: f64) -> String {
    format!("{distance_m:.1}m")
}

/// Formats a cadence, rounded to whole steps per minute.
pub fn format_cadence(cadence_spm: f64) -> String {
    format!("{}spm", cadence_spm.round() as i64)
}

/// Formats a cadence with two decimals, for the sub-display.
pub fn format_cadence_precise(cadence_spm: f64) -> String {
    format!("{cadence_spm:.2}spm")
}

/// Formats a stride held in centimeters as meters with two decimals.
pub fn format_stride(stride_cm: f64) -> String {
    format!("{:.2}m", stride_cm / 100.0)
}

/// Formats a stride in centimeters with two decimals, for the sub-display.
pub fn format_stride_precise(stride_cm: f64) -> String {
    format!("{stride_cm:.2}cm")
}

/// Formats a height, floored to whole centimeters.
pub fn format_height(height_cm: f64) -> String {
    format!("{}cm", height_cm.floor() as i64)
}

/// Formats a height as meters with two decimals, for the sub-display.
/// The centimeter value is floored first, matching the main display.
pub fn format_height_precise(height_cm: f64) -> String {
    format!("{:.2}m", height_cm.floor() / 100.0)
}

/// Formats a weight held in grams as kilograms with one decimal.
pub fn format_weight(weight_g: f64) -> String {
    format!("{:.1}kg", weight_g / 1000.0)
}

/// Formats a weight in kilograms with two decimals, for the sub-display.
pub fn format_weight_precise(weight_g: f64) -> String {
    format!("{:.2}kg", weight_g / 1000.0)
}

/// Formats a body-mass index with one decimal.
pub fn format_bmi(bmi: f64) -> String {
    format!("{bmi:.1}")
}

/// Formats a body-mass index with two decimals, for the sub-display.
pub fn format_bmi_precise(bmi: f64) -> String {
    format!("{bmi:.2}")
}
