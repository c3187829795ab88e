//! Cadence/stride watch: stored cadence and stride, derived pace.

use pacer_core::{check_positive, Edit, FormLock, PacerError};
use serde::{Deserialize, Serialize};

use crate::dial::{DEFAULT_CADENCE_SPM, DEFAULT_STRIDE_CM};

/// Pace in seconds per meter from cadence (steps/min) and stride (cm).
///
/// One minute covers `cadence * stride / 100` meters.
pub fn pace_from_form(cadence_spm: f64, stride_cm: f64) -> f64 {
    (1.0 / (cadence_spm * stride_cm / 100.0)) * 60.0
}

/// Cadence (steps/min) from pace (s/m) and stride (cm).
pub fn cadence_from_pace(pace_s_per_m: f64, stride_cm: f64) -> f64 {
    (1.0 / (pace_s_per_m / 60.0)) * 100.0 / stride_cm
}

/// Stride (cm) from pace (s/m) and cadence (steps/min).
pub fn stride_from_pace(pace_s_per_m: f64, cadence_spm: f64) -> f64 {
    (1.0 / (pace_s_per_m / 60.0)) * 100.0 / cadence_spm
}

/// Stored state of the cadence/stride watch.
///
/// Same shape as the distance/time watch: the stored pair is the source of
/// truth and pace is derived through [`pace_from_form`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormWatch {
    cadence_spm: f64,
    stride_cm: f64,
}

impl FormWatch {
    /// Creates a watch after validating that both quantities are finite
    /// and strictly positive.
    pub fn new(cadence_spm: f64, stride_cm: f64) -> Result<Self, PacerError> {
        Ok(Self {
            cadence_spm: check_positive("cadence", cadence_spm)?,
            stride_cm: check_positive("stride", stride_cm)?,
        })
    }

    /// Creates a watch without validation.
    pub fn from_raw(cadence_spm: f64, stride_cm: f64) -> Self {
        Self {
            cadence_spm,
            stride_cm,
        }
    }

    /// Cadence in steps per minute.
    pub fn cadence_spm(&self) -> f64 {
        self.cadence_spm
    }

    /// Stride in centimeters.
    pub fn stride_cm(&self) -> f64 {
        self.stride_cm
    }

    /// Derived pace in seconds per meter.
    pub fn pace_s_per_m(&self) -> f64 {
        pace_from_form(self.cadence_spm, self.stride_cm)
    }

    /// Returns whether a stored quantity has become non-finite or
    /// non-positive.
    pub fn is_degenerate(&self) -> bool {
        !(self.cadence_spm.is_finite()
            && self.stride_cm.is_finite()
            && self.cadence_spm > 0.0
            && self.stride_cm > 0.0)
    }

    /// Edits cadence. With pace locked, stride follows so pace keeps its
    /// pre-edit value; otherwise stride stays and pace floats.
    #[must_use]
    pub fn change_cadence(self, lock: FormLock, edit: Edit) -> Self {
        let next_cadence = edit.apply(self.cadence_spm);
        if lock == FormLock::Pace {
            let pace = self.pace_s_per_m();
            return Self {
                cadence_spm: next_cadence,
                stride_cm: stride_from_pace(pace, next_cadence),
            };
        }
        Self {
            cadence_spm: next_cadence,
            stride_cm: self.stride_cm,
        }
    }

    /// Edits stride. With pace locked, cadence follows; otherwise cadence
    /// stays and pace floats.
    #[must_use]
    pub fn change_stride(self, lock: FormLock, edit: Edit) -> Self {
        let next_stride = edit.apply(self.stride_cm);
        if lock == FormLock::Pace {
            let pace = self.pace_s_per_m();
            return Self {
                cadence_spm: cadence_from_pace(pace, next_stride),
                stride_cm: next_stride,
            };
        }
        Self {
            cadence_spm: self.cadence_spm,
            stride_cm: next_stride,
        }
    }

    /// Edits the derived pace. A locked pace cannot be edited; with
    /// cadence locked stride absorbs the change, with stride locked
    /// cadence does.
    #[must_use]
    pub fn change_pace(self, lock: FormLock, edit: Edit) -> Self {
        let next_pace = edit.apply(self.pace_s_per_m());
        match lock {
            FormLock::Pace => self,
            FormLock::Cadence => Self {
                cadence_spm: self.cadence_spm,
                stride_cm: stride_from_pace(next_pace, self.cadence_spm),
            },
            FormLock::Stride => Self {
                cadence_spm: cadence_from_pace(next_pace, self.stride_cm),
                stride_cm: self.stride_cm,
            },
        }
    }
}

impl Default for FormWatch {
    fn default() -> Self {
        Self {
            cadence_spm: DEFAULT_CADENCE_SPM,
            stride_cm: DEFAULT_STRIDE_CM,
        }
    }
}
