//! Distance/time watch: stored distance and time, derived pace.

use pacer_core::{check_positive, Edit, PacerError, RunLock};
use serde::{Deserialize, Serialize};

use crate::dial::{DEFAULT_DISTANCE_M, DEFAULT_TIME_S};

/// Stored state of the distance/time watch.
///
/// Pace is never stored: it is always `time / distance`, so the identity
/// `pace = time / distance` holds by construction and only the stored pair
/// can drift. The change reducers take the state by value and return the
/// next state; the UI layer owns the single mutable slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunWatch {
    distance_m: f64,
    time_s: f64,
}

impl RunWatch {
    /// Creates a watch after validating that both quantities are finite
    /// and strictly positive.
    pub fn new(distance_m: f64, time_s: f64) -> Result<Self, PacerError> {
        Ok(Self {
            distance_m: check_positive("distance", distance_m)?,
            time_s: check_positive("time", time_s)?,
        })
    }

    /// Creates a watch without validation.
    pub fn from_raw(distance_m: f64, time_s: f64) -> Self {
        Self { distance_m, time_s }
    }

    /// Distance in meters.
    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    /// Time in seconds.
    pub fn time_s(&self) -> f64 {
        self.time_s
    }

    /// Derived pace in seconds per meter.
    pub fn pace_s_per_m(&self) -> f64 {
        self.time_s / self.distance_m
    }

    /// Returns whether a stored quantity has become non-finite or
    /// non-positive, which makes the derived pace meaningless.
    pub fn is_degenerate(&self) -> bool {
        !(self.distance_m.is_finite()
            && self.time_s.is_finite()
            && self.distance_m > 0.0
            && self.time_s > 0.0)
    }

    /// Edits distance. With pace locked, time follows so pace keeps its
    /// pre-edit value; otherwise time stays and pace floats.
    #[must_use]
    pub fn change_distance(self, lock: RunLock, edit: Edit) -> Self {
        let next_distance = edit.apply(self.distance_m);
        if lock == RunLock::Pace {
            let pace = self.pace_s_per_m();
            return Self {
                distance_m: next_distance,
                time_s: next_distance * pace,
            };
        }
        Self {
            distance_m: next_distance,
            time_s: self.time_s,
        }
    }

    /// Edits time. With pace locked, distance follows; otherwise distance
    /// stays and pace floats.
    #[must_use]
    pub fn change_time(self, lock: RunLock, edit: Edit) -> Self {
        let next_time = edit.apply(self.time_s);
        if lock == RunLock::Pace {
            let pace = self.pace_s_per_m();
            return Self {
                distance_m: next_time / pace,
                time_s: next_time,
            };
        }
        Self {
            distance_m: self.distance_m,
            time_s: next_time,
        }
    }

    /// Edits the derived pace. A locked pace cannot be edited; with
    /// distance locked time absorbs the change, with time locked distance
    /// does.
    #[must_use]
    pub fn change_pace(self, lock: RunLock, edit: Edit) -> Self {
        let next_pace = edit.apply(self.pace_s_per_m());
        match lock {
            RunLock::Pace => self,
            RunLock::Distance => Self {
                distance_m: self.distance_m,
                time_s: self.distance_m * next_pace,
            },
            RunLock::Time => Self {
                distance_m: self.time_s / next_pace,
                time_s: self.time_s,
            },
        }
    }
}

impl Default for RunWatch {
    fn default() -> Self {
        Self {
            distance_m: DEFAULT_DISTANCE_M,
            time_s: DEFAULT_TIME_S,
        }
    }
}
