//! Clock-time and pace display strings.
//!
//! All fields are floored, never rounded: the watch face must not show a
//! second the runner has not yet covered.

/// Formats seconds as `H:MM:SS`.
pub fn format_hhmmss(time_s: f64) -> String {
    let hour = (time_s / 3600.0).floor() as i64;
    let minute = ((time_s % 3600.0) / 60.0).floor() as i64;
    let second = (time_s % 60.0).floor() as i64;
    format!("{hour}:{minute:02}:{second:02}")
}

/// Formats seconds as `H:MM:SS.mmm`.
pub fn format_hhmmss_milli(time_s: f64) -> String {
    let milli = ((time_s % 1.0) * 1000.0).floor() as i64;
    format!("{}.{milli:03}", format_hhmmss(time_s))
}

/// Formats a pace in seconds per meter as `M:SS/km`.
pub fn format_pace(pace_s_per_m: f64) -> String {
    let per_km = pace_s_per_m * 1000.0;
    let minute = (per_km / 60.0).floor() as i64;
    let second = (per_km % 60.0).floor() as i64;
    format!("{minute}:{second:02}/km")
}

/// Formats a pace in seconds per meter as `M:SS.mmm/km`.
pub fn format_pace_milli(pace_s_per_m: f64) -> String {
    let per_km = pace_s_per_m * 1000.0;
    let minute = (per_km / 60.0).floor() as i64;
    let second = (per_km % 60.0).floor() as i64;
    let milli = ((per_km % 1.0) * 1000.0).floor() as i64;
    format!("{minute}:{second:02}.{milli:03}/km")
}
