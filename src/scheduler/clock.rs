//! Logical simulation clock.

use log::trace;

use crate::models::ProcessResult;

/// Integer logical clock shared by all strategies.
///
/// There is no wall-clock coupling; only the strategies move it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Clock {
    now: i64,
}

impl Clock {
    /// Creates a clock at `now`.
    pub(crate) fn at(now: i64) -> Self {
        Self { now }
    }

    /// Current instant.
    #[inline]
    pub(crate) fn now(&self) -> i64 {
        self.now
    }

    /// Moves forward by `units`.
    #[inline]
    pub(crate) fn advance(&mut self, units: i64) {
        self.now += units;
    }

    /// Moves forward to `instant` (never backwards).
    #[inline]
    pub(crate) fn advance_to(&mut self, instant: i64) {
        self.now = self.now.max(instant);
    }

    /// Idles one tick at a time until some pending process has arrived.
    ///
    /// Returns `false` without moving when nothing is pending. The clock
    /// never jumps more than one unit per step, so idle gaps are walked
    /// exactly.
    pub(crate) fn idle_until_ready<'a, I>(&mut self, pending: I) -> bool
    where
        I: IntoIterator<Item = &'a ProcessResult>,
        I::IntoIter: Clone,
    {
        let pending = pending.into_iter();
        if pending.clone().next().is_none() {
            return false;
        }
        while !pending.clone().any(|p| p.has_arrived(self.now)) {
            trace!("cpu idle at t={}", self.now);
            self.now += 1;
        }
        true
    }
}
