//! Delayed mismatch clears on a logical clock.
//!
//! A mismatched pair stays face up for a fixed delay before the turn passes.
//! The scheduler holds that one pending action, stamped with the round it
//! belongs to. Time only moves through [`Scheduler::advance`], so front ends
//! decide how wall time maps onto the game and tests stay deterministic.
//!
//! ## Staleness
//!
//! At most one clear is pending. Replacing the round cancels it, and the
//! controller also compares the task's round id against the live round
//! before applying it, so a clear can never land on a newer round.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::rules::RoundId;
//! use memory_match::schedule::Scheduler;
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.schedule(RoundId::new(1), Duration::from_millis(1000));
//!
//! assert!(scheduler.advance(Duration::from_millis(600)).is_none());
//! let due = scheduler.advance(Duration::from_millis(400)).unwrap();
//! assert_eq!(due.round, RoundId::new(1));
//! assert!(scheduler.pending().is_none());
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rules::RoundId;

/// A pending "turn the mismatched pair back down" action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledClear {
    /// Round that scheduled it.
    pub round: RoundId,
    /// Logical time at which it fires.
    pub due: Duration,
}

/// Single-slot scheduler over a logical clock.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    pending: Option<ScheduledClear>,
}

impl Scheduler {
    /// Create a scheduler at time zero with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// The pending clear, if any.
    #[must_use]
    pub fn pending(&self) -> Option<ScheduledClear> {
        self.pending
    }

    /// Time left before the pending clear fires.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.pending.map(|task| task.due.saturating_sub(self.now))
    }

    /// Schedule a clear for `round` after `delay`, replacing any pending one.
    pub fn schedule(&mut self, round: RoundId, delay: Duration) -> ScheduledClear {
        let task = ScheduledClear {
            round,
            due: self.now.saturating_add(delay),
        };
        if let Some(replaced) = self.pending.replace(task) {
            debug!(round = %replaced.round, "replaced pending clear");
        }
        debug!(%round, ?delay, "scheduled clear");
        task
    }

    /// Drop the pending clear without running it.
    pub fn cancel(&mut self) -> Option<ScheduledClear> {
        let cancelled = self.pending.take();
        if let Some(task) = cancelled {
            debug!(round = %task.round, "cancelled clear");
        }
        cancelled
    }

    /// Move the clock forward. Returns the clear if it became due.
    ///
    /// The clock saturates at `Duration::MAX`; anything pending then fires.
    pub fn advance(&mut self, elapsed: Duration) -> Option<ScheduledClear> {
        self.now = self.now.saturating_add(elapsed);
        match self.pending {
            Some(task) if task.due <= self.now => self.pending.take(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_fires_exactly_at_due_time() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(RoundId::new(3), SECOND);

        assert_eq!(scheduler.remaining(), Some(SECOND));
        assert!(scheduler.advance(Duration::from_millis(999)).is_none());
        assert_eq!(scheduler.remaining(), Some(Duration::from_millis(1)));

        let task = scheduler.advance(Duration::from_millis(1)).unwrap();
        assert_eq!(
            task,
            ScheduledClear {
                round: RoundId::new(3),
                due: SECOND,
            }
        );
        assert!(scheduler.advance(SECOND).is_none());
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(RoundId::new(1), SECOND);

        assert!(scheduler.cancel().is_some());
        assert!(scheduler.cancel().is_none());
        assert!(scheduler.advance(SECOND * 5).is_none());
    }

    #[test]
    fn test_single_slot() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(RoundId::new(1), SECOND);
        scheduler.advance(Duration::from_millis(500));
        scheduler.schedule(RoundId::new(2), SECOND);

        assert!(scheduler.advance(Duration::from_millis(500)).is_none());
        let task = scheduler.advance(Duration::from_millis(500)).unwrap();
        assert_eq!(task.round, RoundId::new(2));
        assert_eq!(scheduler.now(), Duration::from_millis(1500));
    }

    #[test]
    fn test_overshoot_still_fires() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(RoundId::new(1), SECOND);

        assert!(scheduler.advance(SECOND * 10).is_some());
    }

    #[test]
    fn test_clock_saturates() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(RoundId::new(1), SECOND);

        assert!(scheduler.advance(Duration::MAX).is_some());
        assert!(scheduler.advance(Duration::from_millis(1)).is_none());
        assert_eq!(scheduler.now(), Duration::MAX);

        let task = scheduler.schedule(RoundId::new(2), SECOND);
        assert_eq!(task.due, Duration::MAX);
        assert_eq!(scheduler.advance(Duration::ZERO), Some(task));
    }
}
