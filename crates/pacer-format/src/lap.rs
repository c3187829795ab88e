//! Lap-split table: elapsed time per standard distance at a given pace.

use serde::Serialize;

use crate::time::format_hhmmss;

/// Lap length used for the recurring split column, meters.
pub const LAP_DISTANCE_M: f64 = 5000.0;

/// One row of the lap table: a standard race or track distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LapRow {
    /// Distance in meters.
    pub distance_m: f64,
    /// Race label shown in the distance column.
    pub label: &'static str,
    /// Whether the 5 km lap column applies; track distances shorter than
    /// one lap render a dash instead.
    pub show_lap_time: bool,
}

/// The standard distances of the lap table, track laps through ultra.
pub fn lap_rows() -> Vec<LapRow> {
    fn row(distance_m: f64, label: &'static str) -> LapRow {
        LapRow {
            distance_m,
            label,
            show_lap_time: distance_m >= LAP_DISTANCE_M,
        }
    }

    vec![
        row(400.0, "400m"),
        row(800.0, "800m"),
        row(1000.0, "1K"),
        row(5000.0, "5K"),
        row(10000.0, "10K"),
        row(15000.0, "15K"),
        row(20000.0, "20K"),
        row(21097.5, "HALF"),
        row(30000.0, "30K"),
        row(42195.0, "FULL"),
        row(50000.0, "50K"),
    ]
}

/// One computed split: elapsed time to the row's distance plus the
/// recurring 5 km lap time, with display strings attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LapSplit {
    /// Race label of the row.
    pub label: &'static str,
    /// Elapsed time to this distance, seconds.
    pub time_s: f64,
    /// The 5 km lap time, when the row shows one.
    pub lap_time_s: Option<f64>,
    /// Elapsed time as `H:MM:SS`.
    pub time_text: String,
    /// Lap time as `H:MM:SS`, or a dash.
    pub lap_time_text: String,
}

/// Computes the lap table for a pace in seconds per meter.
pub fn lap_table(pace_s_per_m: f64) -> Vec<LapSplit> {
    let lap_time_s = pace_s_per_m * LAP_DISTANCE_M;
    lap_rows()
        .into_iter()
        .map(|row| {
            let time_s = pace_s_per_m * row.distance_m;
            let lap_time = row.show_lap_time.then_some(lap_time_s);
            LapSplit {
                label: row.label,
                time_s,
                lap_time_s: lap_time,
                time_text: format_hhmmss(time_s),
                lap_time_text: match lap_time {
                    Some(lap) => format_hhmmss(lap),
                    None => "-".to_string(),
                },
            }
        })
        .collect()
}
