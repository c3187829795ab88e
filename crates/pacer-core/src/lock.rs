//! Lock names and the one-slot lock history.
//!
//! Each watch holds three related quantities; the lock names the one that
//! must not be recomputed when another is edited. The history remembers the
//! previous lock so that unlocking the currently locked quantity falls back
//! to a sensible prior choice instead of an arbitrary default.

use serde::{Deserialize, Serialize};

/// Lockable quantities of the distance/time watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunLock {
    /// Distance stays fixed.
    Distance,
    /// Pace stays fixed.
    Pace,
    /// Time stays fixed.
    Time,
}

/// Lockable quantities of the cadence/stride watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormLock {
    /// Cadence stays fixed.
    Cadence,
    /// Pace stays fixed.
    Pace,
    /// Stride stays fixed.
    Stride,
}

/// Lockable quantities of the height/weight watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyLock {
    /// Height stays fixed.
    Height,
    /// BMI stays fixed.
    Bmi,
    /// Weight stays fixed.
    Weight,
}

/// Two-slot lock record: the active lock and the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockHistory<L> {
    current: L,
    last: L,
}

impl<L: Copy + PartialEq> LockHistory<L> {
    /// Creates a history with the given active and fallback locks.
    pub fn new(current: L, last: L) -> Self {
        Self { current, last }
    }

    /// Returns the active lock.
    pub fn current(&self) -> L {
        self.current
    }

    /// Returns the previously active lock.
    pub fn last(&self) -> L {
        self.last
    }

    /// Activates `next`, remembering the outgoing lock.
    ///
    /// Re-locking the already active quantity is a no-op so the fallback
    /// slot is not clobbered with a duplicate.
    #[must_use]
    pub fn set(self, next: L) -> Self {
        if next == self.current {
            return self;
        }
        Self {
            current: next,
            last: self.current,
        }
    }

    /// Records that `changing` is about to be edited directly.
    ///
    /// Editing the locked quantity releases the lock to the fallback slot;
    /// editing an unlocked quantity only updates the fallback so a later
    /// release lands on the most recently touched quantity.
    #[must_use]
    pub fn unlock(self, changing: L) -> Self {
        if changing != self.current {
            return Self {
                current: self.current,
                last: changing,
            };
        }
        Self {
            current: self.last,
            last: changing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_pushes_current_into_last() {
        let history = LockHistory::new(RunLock::Distance, RunLock::Pace);
        let next = history.set(RunLock::Time);
        assert_eq!(next.current(), RunLock::Time);
        assert_eq!(next.last(), RunLock::Distance);
    }

    #[test]
    fn set_same_lock_is_noop() {
        let history = LockHistory::new(RunLock::Distance, RunLock::Pace);
        assert_eq!(history.set(RunLock::Distance), history);
    }

    #[test]
    fn unlock_locked_quantity_swaps() {
        let history = LockHistory::new(RunLock::Distance, RunLock::Pace);
        let next = history.unlock(RunLock::Distance);
        assert_eq!(next.current(), RunLock::Pace);
        assert_eq!(next.last(), RunLock::Distance);
    }

    #[test]
    fn unlock_other_quantity_tracks_fallback() {
        let history = LockHistory::new(RunLock::Distance, RunLock::Pace);
        let next = history.unlock(RunLock::Time);
        assert_eq!(next.current(), RunLock::Distance);
        assert_eq!(next.last(), RunLock::Time);
    }
}
