//! Historical activities selected from the training log.

use pacer_core::{check_positive, PacerError};
use serde::{Deserialize, Serialize};

/// The numbers a training-log entry contributes to the deck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityImport {
    /// Distance covered, in meters.
    pub distance_m: f64,
    /// Moving time, in seconds.
    pub moving_time_s: f64,
    /// Average cadence as reported by the tracker, which counts one leg.
    pub average_cadence_spm: Option<f64>,
}

impl ActivityImport {
    /// Checks that the activity's quantities are finite and positive.
    ///
    /// Trackers report a zero cadence when the sensor was absent; that is
    /// treated like a missing cadence rather than a bad activity.
    pub fn validate(&self) -> Result<(), PacerError> {
        check_positive("distance", self.distance_m)?;
        check_positive("time", self.moving_time_s)?;
        if let Some(average) = self.average_cadence_spm {
            if average != 0.0 {
                check_positive("cadence", average)?;
            }
        }
        Ok(())
    }

    /// The cadence this activity contributes, if any: the tracker's
    /// single-leg value doubled, with zero treated as absent.
    pub fn cadence_contribution(&self) -> Option<f64> {
        match self.average_cadence_spm {
            Some(average) if average != 0.0 => Some(average * 2.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_distance() {
        let activity = ActivityImport {
            distance_m: 0.0,
            moving_time_s: 3600.0,
            average_cadence_spm: None,
        };
        assert!(activity.validate().is_err());
    }

    #[test]
    fn missing_cadence_is_fine() {
        let activity = ActivityImport {
            distance_m: 10000.0,
            moving_time_s: 2400.0,
            average_cadence_spm: None,
        };
        assert!(activity.validate().is_ok());
        assert_eq!(activity.cadence_contribution(), None);
    }

    #[test]
    fn zero_cadence_counts_as_missing() {
        let activity = ActivityImport {
            distance_m: 10000.0,
            moving_time_s: 2400.0,
            average_cadence_spm: Some(0.0),
        };
        assert!(activity.validate().is_ok());
        assert_eq!(activity.cadence_contribution(), None);
    }

    #[test]
    fn reported_cadence_is_doubled() {
        let activity = ActivityImport {
            distance_m: 10000.0,
            moving_time_s: 2400.0,
            average_cadence_spm: Some(92.5),
        };
        assert_eq!(activity.cadence_contribution(), Some(185.0));
    }
}
