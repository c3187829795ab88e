//! Height/weight watch: stored height and weight, derived BMI.

use pacer_core::{check_positive, BodyLock, Edit, PacerError};
use serde::{Deserialize, Serialize};

use crate::dial::{DEFAULT_HEIGHT_CM, DEFAULT_WEIGHT_G};

/// BMI from height (cm) and weight (g).
pub fn bmi_from(height_cm: f64, weight_g: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let weight_kg = weight_g / 1000.0;
    weight_kg / (height_m * height_m)
}

/// Height (cm) from BMI and weight (g).
pub fn height_from_bmi(bmi: f64, weight_g: f64) -> f64 {
    let weight_kg = weight_g / 1000.0;
    (weight_kg / bmi).sqrt() * 100.0
}

/// Weight (g) from BMI and height (cm).
pub fn weight_from_bmi(bmi: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    bmi * height_m * height_m * 1000.0
}

/// Stored state of the height/weight watch.
///
/// This watch has no pace and is not coupled to the others; it follows the
/// same stored-pair/derived-field shape with BMI derived via [`bmi_from`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyWatch {
    height_cm: f64,
    weight_g: f64,
}

impl BodyWatch {
    /// Creates a watch after validating that both quantities are finite
    /// and strictly positive.
    pub fn new(height_cm: f64, weight_g: f64) -> Result<Self, PacerError> {
        Ok(Self {
            height_cm: check_positive("height", height_cm)?,
            weight_g: check_positive("weight", weight_g)?,
        })
    }

    /// Creates a watch without validation.
    pub fn from_raw(height_cm: f64, weight_g: f64) -> Self {
        Self {
            height_cm,
            weight_g,
        }
    }

    /// Height in centimeters.
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Weight in grams.
    pub fn weight_g(&self) -> f64 {
        self.weight_g
    }

    /// Derived body-mass index.
    pub fn bmi(&self) -> f64 {
        bmi_from(self.height_cm, self.weight_g)
    }

    /// Returns whether a stored quantity has become non-finite or
    /// non-positive.
    pub fn is_degenerate(&self) -> bool {
        !(self.height_cm.is_finite()
            && self.weight_g.is_finite()
            && self.height_cm > 0.0
            && self.weight_g > 0.0)
    }

    /// Edits height. With BMI locked, weight follows so BMI keeps its
    /// pre-edit value; otherwise weight stays and BMI floats.
    #[must_use]
    pub fn change_height(self, lock: BodyLock, edit: Edit) -> Self {
        let next_height = edit.apply(self.height_cm);
        if lock == BodyLock::Bmi {
            let bmi = self.bmi();
            return Self {
                height_cm: next_height,
                weight_g: weight_from_bmi(bmi, next_height),
            };
        }
        Self {
            height_cm: next_height,
            weight_g: self.weight_g,
        }
    }

    /// Edits weight. With BMI locked, height follows; otherwise height
    /// stays and BMI floats.
    #[must_use]
    pub fn change_weight(self, lock: BodyLock, edit: Edit) -> Self {
        let next_weight = edit.apply(self.weight_g);
        if lock == BodyLock::Bmi {
            let bmi = self.bmi();
            return Self {
                height_cm: height_from_bmi(bmi, next_weight),
                weight_g: next_weight,
            };
        }
        Self {
            height_cm: self.height_cm,
            weight_g: next_weight,
        }
    }

    /// Edits the derived BMI. A locked BMI cannot be edited; with height
    /// locked weight absorbs the change, with weight locked height does.
    #[must_use]
    pub fn change_bmi(self, lock: BodyLock, edit: Edit) -> Self {
        let next_bmi = edit.apply(self.bmi());
        match lock {
            BodyLock::Bmi => self,
            BodyLock::Height => Self {
                height_cm: self.height_cm,
                weight_g: weight_from_bmi(next_bmi, self.height_cm),
            },
            BodyLock::Weight => Self {
                height_cm: height_from_bmi(next_bmi, self.weight_g),
                weight_g: self.weight_g,
            },
        }
    }
}

impl Default for BodyWatch {
    fn default() -> Self {
        Self {
            height_cm: DEFAULT_HEIGHT_CM,
            weight_g: DEFAULT_WEIGHT_G,
        }
    }
}
