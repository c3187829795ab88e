//! Dial tables, knob steps and power-on defaults for the watch cards.
//!
//! Values mirror the shipped watch faces: the distance list covers track
//! laps through ultra, the pace grid spans 2:30/km to 8:50/km, the time
//! grid five-minute steps up to 6h30m.

use serde::{Deserialize, Serialize};

/// Power-on distance: a full marathon, in meters.
pub const DEFAULT_DISTANCE_M: f64 = 42195.0;
/// Power-on time: three hours, in seconds.
pub const DEFAULT_TIME_S: f64 = 10800.0;
/// Power-on cadence, steps per minute.
pub const DEFAULT_CADENCE_SPM: f64 = 190.0;
/// Power-on stride, centimeters.
pub const DEFAULT_STRIDE_CM: f64 = 120.0;
/// Power-on height, centimeters.
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
/// Power-on weight, grams.
pub const DEFAULT_WEIGHT_G: f64 = 65000.0;

/// Value covered by one full turn of the distance knob, meters.
pub const DISTANCE_KNOB_STEP: f64 = 1000.0 * 10.0;
/// Value covered by one full turn of the pace knob, seconds per meter.
pub const PACE_KNOB_STEP: f64 = 60.0 / 1000.0;
/// Value covered by one full turn of the time knob, seconds.
pub const TIME_KNOB_STEP: f64 = 60.0 * 60.0 / 2.0;
/// Value covered by one full turn of the cadence knob, steps per minute.
pub const CADENCE_KNOB_STEP: f64 = 10.0;
/// Value covered by one full turn of the stride knob, centimeters.
pub const STRIDE_KNOB_STEP: f64 = 10.0;
/// Value covered by one full turn of the height knob, centimeters.
pub const HEIGHT_KNOB_STEP: f64 = 30.0;
/// Value covered by one full turn of the BMI knob.
pub const BMI_KNOB_STEP: f64 = 10.0;
/// Value covered by one full turn of the weight knob, grams.
pub const WEIGHT_KNOB_STEP: f64 = 10000.0;

/// One selectable entry on a dial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialOption {
    /// Value in the quantity's base unit.
    pub value: f64,
    /// Label shown on the dial.
    pub label: String,
}

impl DialOption {
    fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Standard distances offered on the distance dial.
pub fn distance_options() -> Vec<DialOption> {
    vec![
        DialOption::new(400.0, "400m"),
        DialOption::new(800.0, "800m"),
        DialOption::new(1000.0, "1K"),
        DialOption::new(5000.0, "5K"),
        DialOption::new(10000.0, "10K"),
        DialOption::new(15000.0, "15K"),
        DialOption::new(20000.0, "20K"),
        DialOption::new(21097.5, "HALF"),
        DialOption::new(30000.0, "30K"),
        DialOption::new(42195.0, "FULL"),
        DialOption::new(50000.0, "50K"),
    ]
}

/// Pace grid: whole minutes 2 through 8 crossed with a fixed second list,
/// clipped below 2:30/km. Values are seconds per meter.
pub fn pace_options() -> Vec<DialOption> {
    const MINUTES: [u32; 7] = [2, 3, 4, 5, 6, 7, 8];
    const SECONDS: [u32; 5] = [0, 15, 30, 45, 50];
    let floor = f64::from(60 * 2 + 30) / 1000.0;

    let mut options = Vec::new();
    for minute in MINUTES {
        for second in SECONDS {
            let value = f64::from(60 * minute + second) / 1000.0;
            if value < floor {
                continue;
            }
            options.push(DialOption::new(value, format!("{minute}:{second:02}/km")));
        }
    }
    options
}

/// Time grid: five-minute steps up to 6h30m. Values are seconds.
pub fn time_options() -> Vec<DialOption> {
    let ceiling = 60 * 60 * 6 + 60 * 30;

    let mut options = Vec::new();
    for hour in 0u32..=6 {
        for minute in (0u32..60).step_by(5) {
            let value = 60 * 60 * hour + 60 * minute;
            if value > ceiling {
                continue;
            }
            let label = if hour < 1 {
                format!("{minute:02}m")
            } else {
                format!("{hour}h{minute:02}m")
            };
            options.push(DialOption::new(f64::from(value), label));
        }
    }
    options
}

/// Cadence dial, steps per minute.
pub fn cadence_options() -> Vec<DialOption> {
    (180..=205)
        .step_by(5)
        .map(|spm| DialOption::new(f64::from(spm), format!("{spm}spm")))
        .collect()
}

/// Stride dial. Values are centimeters, labels meters.
pub fn stride_options() -> Vec<DialOption> {
    (100..=125)
        .step_by(5)
        .map(|cm| DialOption::new(f64::from(cm), format!("{:.2}m", f64::from(cm) / 100.0)))
        .collect()
}

/// Height dial, centimeters.
pub fn height_options() -> Vec<DialOption> {
    (150..=200)
        .step_by(5)
        .map(|cm| DialOption::new(f64::from(cm), format!("{cm}cm")))
        .collect()
}

/// BMI dial.
pub fn bmi_options() -> Vec<DialOption> {
    (16..=36)
        .step_by(2)
        .map(|bmi| DialOption::new(f64::from(bmi), format!("{bmi}")))
        .collect()
}

/// Weight dial. Values are grams, labels kilograms.
pub fn weight_options() -> Vec<DialOption> {
    (50..=100)
        .step_by(5)
        .map(|kg| DialOption::new(f64::from(kg) * 1000.0, format!("{kg}kg")))
        .collect()
}
