#![deny(missing_docs)]
#![doc = "Display-string formatting for the Pacer watch faces: clock times, paces, distances, body quantities, and the lap-split table."]

pub mod lap;
pub mod quantity;
pub mod time;

pub use lap::{lap_rows, lap_table, LapRow, LapSplit, LAP_DISTANCE_M};
pub use quantity::{
    format_bmi, format_bmi_precise, format_cadence, format_cadence_precise, format_distance,
    format_distance_precise, format_height, format_height_precise, format_stride,
    format_stride_precise, format_weight, format_weight_precise,
};
pub use time::{format_hhmmss, format_hhmmss_milli, format_pace, format_pace_milli};
