//! Coupled run/form pair: one shared pace, one combined reducer.
//!
//! The distance/time card and the cadence/stride card display the same
//! pace. Instead of two independently reducing state slots with an ad hoc
//! sync, the deck stores `(distance, time, cadence)` once and derives both
//! pace and stride from it, and a single reducer owns both lock histories.
//! "Both locks agree whenever either is pace" and "both paces are equal"
//! are therefore structural, not conventions.

use pacer_core::{check_positive, Edit, FormLock, LockHistory, PacerError, RunLock};
use serde::{Deserialize, Serialize};

use crate::activity::ActivityImport;
use crate::dial::{DEFAULT_CADENCE_SPM, DEFAULT_DISTANCE_M, DEFAULT_TIME_S};
use crate::form::{cadence_from_pace, FormWatch};
use crate::run::RunWatch;

/// Lock histories of the coupled pair, updated atomically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockPair {
    run: LockHistory<RunLock>,
    form: LockHistory<FormLock>,
}

impl LockPair {
    /// Creates a pair from explicit histories.
    pub fn new(run: LockHistory<RunLock>, form: LockHistory<FormLock>) -> Self {
        Self { run, form }
    }

    /// The run card's lock history.
    pub fn run(&self) -> LockHistory<RunLock> {
        self.run
    }

    /// The form card's lock history.
    pub fn form(&self) -> LockHistory<FormLock> {
        self.form
    }

    /// Locks a run-card quantity. Locking pace forces the form card onto
    /// pace as well, pushing its outgoing lock into its fallback slot.
    #[must_use]
    pub fn set_run(self, next: RunLock) -> Self {
        let form = if next == RunLock::Pace && self.form.current() != FormLock::Pace {
            self.form.set(FormLock::Pace)
        } else {
            self.form
        };
        Self {
            run: self.run.set(next),
            form,
        }
    }

    /// Locks a form-card quantity, mirroring [`LockPair::set_run`].
    #[must_use]
    pub fn set_form(self, next: FormLock) -> Self {
        let run = if next == FormLock::Pace && self.run.current() != RunLock::Pace {
            self.run.set(RunLock::Pace)
        } else {
            self.run
        };
        Self {
            run,
            form: self.form.set(next),
        }
    }

    /// Records a direct edit of a run-card quantity. Editing a locked pace
    /// releases the pace lock on both cards atomically.
    #[must_use]
    pub fn unlock_run(self, changing: RunLock) -> Self {
        let form = if changing == RunLock::Pace && self.form.current() == FormLock::Pace {
            self.form.unlock(FormLock::Pace)
        } else {
            self.form
        };
        Self {
            run: self.run.unlock(changing),
            form,
        }
    }

    /// Records a direct edit of a form-card quantity, mirroring
    /// [`LockPair::unlock_run`].
    #[must_use]
    pub fn unlock_form(self, changing: FormLock) -> Self {
        let run = if changing == FormLock::Pace && self.run.current() == RunLock::Pace {
            self.run.unlock(RunLock::Pace)
        } else {
            self.run
        };
        Self {
            run,
            form: self.form.unlock(changing),
        }
    }
}

impl Default for LockPair {
    fn default() -> Self {
        Self {
            run: LockHistory::new(RunLock::Distance, RunLock::Pace),
            form: LockHistory::new(FormLock::Cadence, FormLock::Pace),
        }
    }
}

/// One input event against the deck.
///
/// Run-side and form-side pace edits are distinct actions because they
/// resolve against different locks: the run card's pace knob answers to
/// the run lock, the form card's to the form lock.
#[derive(Debug, Clone, Copy)]
pub enum DeckAction {
    /// Edit distance on the run card.
    ChangeDistance(Edit),
    /// Edit time on the run card.
    ChangeTime(Edit),
    /// Edit pace on the run card.
    ChangeRunPace(Edit),
    /// Edit cadence on the form card.
    ChangeCadence(Edit),
    /// Edit stride on the form card.
    ChangeStride(Edit),
    /// Edit pace on the form card.
    ChangeFormPace(Edit),
    /// Lock a run-card quantity.
    SetRunLock(RunLock),
    /// Announce a direct edit of a run-card quantity.
    UnlockRun(RunLock),
    /// Lock a form-card quantity.
    SetFormLock(FormLock),
    /// Announce a direct edit of a form-card quantity.
    UnlockForm(FormLock),
}

/// Combined state of the coupled run/form pair.
///
/// Stride is not stored: it is derived from the deck pace and cadence, so
/// the run card's pace and the form card's pace can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    locks: LockPair,
    distance_m: f64,
    time_s: f64,
    cadence_spm: f64,
}

impl Deck {
    /// Creates a deck with default locks after validating the stored
    /// quantities.
    pub fn new(distance_m: f64, time_s: f64, cadence_spm: f64) -> Result<Self, PacerError> {
        Ok(Self {
            locks: LockPair::default(),
            distance_m: check_positive("distance", distance_m)?,
            time_s: check_positive("time", time_s)?,
            cadence_spm: check_positive("cadence", cadence_spm)?,
        })
    }

    /// The lock histories of both cards.
    pub fn locks(&self) -> LockPair {
        self.locks
    }

    /// Distance in meters.
    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    /// Time in seconds.
    pub fn time_s(&self) -> f64 {
        self.time_s
    }

    /// Cadence in steps per minute.
    pub fn cadence_spm(&self) -> f64 {
        self.cadence_spm
    }

    /// Shared pace in seconds per meter.
    pub fn pace_s_per_m(&self) -> f64 {
        self.time_s / self.distance_m
    }

    /// Derived stride in centimeters.
    pub fn stride_cm(&self) -> f64 {
        crate::form::stride_from_pace(self.pace_s_per_m(), self.cadence_spm)
    }

    /// The run card's view of the deck.
    pub fn run_watch(&self) -> RunWatch {
        RunWatch::from_raw(self.distance_m, self.time_s)
    }

    /// The form card's view of the deck.
    pub fn form_watch(&self) -> FormWatch {
        FormWatch::from_raw(self.cadence_spm, self.stride_cm())
    }

    /// Returns whether a stored quantity has become non-finite or
    /// non-positive. Hosts can check this before committing a gesture.
    pub fn is_degenerate(&self) -> bool {
        !(self.distance_m.is_finite()
            && self.time_s.is_finite()
            && self.cadence_spm.is_finite()
            && self.distance_m > 0.0
            && self.time_s > 0.0
            && self.cadence_spm > 0.0)
    }

    /// Applies one input event and returns the next deck state.
    #[must_use]
    pub fn apply(self, action: DeckAction) -> Self {
        match action {
            DeckAction::ChangeDistance(edit) => {
                self.run_edit(|watch, lock| watch.change_distance(lock, edit))
            }
            DeckAction::ChangeTime(edit) => {
                self.run_edit(|watch, lock| watch.change_time(lock, edit))
            }
            DeckAction::ChangeRunPace(edit) => {
                self.run_edit(|watch, lock| watch.change_pace(lock, edit))
            }
            DeckAction::ChangeCadence(edit) => {
                self.form_edit(|watch, lock| watch.change_cadence(lock, edit))
            }
            DeckAction::ChangeStride(edit) => {
                self.form_edit(|watch, lock| watch.change_stride(lock, edit))
            }
            DeckAction::ChangeFormPace(edit) => {
                self.form_edit(|watch, lock| watch.change_pace(lock, edit))
            }
            DeckAction::SetRunLock(next) => Self {
                locks: self.locks.set_run(next),
                ..self
            },
            DeckAction::UnlockRun(changing) => Self {
                locks: self.locks.unlock_run(changing),
                ..self
            },
            DeckAction::SetFormLock(next) => Self {
                locks: self.locks.set_form(next),
                ..self
            },
            DeckAction::UnlockForm(changing) => Self {
                locks: self.locks.unlock_form(changing),
                ..self
            },
        }
    }

    /// Loads a historical activity into the deck: distance and time are
    /// overwritten, and cadence follows when the activity reports one.
    /// Trackers report single-leg cadence, so the value is doubled; a zero
    /// cadence counts as not reported.
    pub fn import(self, activity: ActivityImport) -> Result<Self, PacerError> {
        activity.validate()?;
        let cadence_spm = activity.cadence_contribution().unwrap_or(self.cadence_spm);
        Ok(Self {
            locks: self.locks,
            distance_m: activity.distance_m,
            time_s: activity.moving_time_s,
            cadence_spm,
        })
    }

    /// Run-card edit followed by the form-side write-back: with stride
    /// locked, cadence is recomputed from the next pace and the pre-edit
    /// stride; otherwise cadence stays and stride floats.
    fn run_edit(self, f: impl FnOnce(RunWatch, RunLock) -> RunWatch) -> Self {
        let stride_before = self.stride_cm();
        let next = f(self.run_watch(), self.locks.run.current());
        let cadence_spm = if self.locks.form.current() == FormLock::Stride {
            cadence_from_pace(next.pace_s_per_m(), stride_before)
        } else {
            self.cadence_spm
        };
        Self {
            locks: self.locks,
            distance_m: next.distance_m(),
            time_s: next.time_s(),
            cadence_spm,
        }
    }

    /// Form-card edit followed by the run-side write-back: the next pace
    /// lands in time when distance is locked, in distance otherwise.
    fn form_edit(self, f: impl FnOnce(FormWatch, FormLock) -> FormWatch) -> Self {
        let next = f(self.form_watch(), self.locks.form.current());
        let next_pace = next.pace_s_per_m();
        let (distance_m, time_s) = if self.locks.run.current() == RunLock::Distance {
            (self.distance_m, next_pace * self.distance_m)
        } else {
            (self.time_s / next_pace, self.time_s)
        };
        Self {
            locks: self.locks,
            distance_m,
            time_s,
            cadence_spm: next.cadence_spm(),
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            locks: LockPair::default(),
            distance_m: DEFAULT_DISTANCE_M,
            time_s: DEFAULT_TIME_S,
            cadence_spm: DEFAULT_CADENCE_SPM,
        }
    }
}
