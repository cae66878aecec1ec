//! Process model.
//!
//! A process is one unit of CPU work to be scheduled. The input record
//! ([`Process`]) is immutable; every simulation run derives its own
//! [`ProcessResult`] records from it and returns them by value.
//!
//! # Time Representation
//! All times are integer ticks of a logical clock starting at t=0.

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Priority Convention
/// **Lower value = more urgent.** Priority 0 is the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier within a run.
    pub pid: String,
    /// Instant the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent).
    #[serde(default)]
    pub priority: i32,
}

impl Process {
    /// Creates a new process with priority 0.
    pub fn new(pid: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `now`.
    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival_time <= now
    }
}

/// Per-process simulation record.
///
/// Starts as a copy of the [`Process`] inputs with `remaining_time = burst_time`
/// and no timing fields. Strategies advance it with [`execute`](Self::execute)
/// and close it with [`finish`](Self::finish).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub pid: String,
    /// Arrival instant (copied from input).
    pub arrival_time: i64,
    /// Total CPU demand (copied from input).
    pub burst_time: i64,
    /// Priority (copied from input).
    pub priority: i32,
    /// CPU time still owed.
    pub remaining_time: i64,
    /// Instant of first execution. `None` = not yet started.
    pub start_time: Option<i64>,
    /// Completion instant.
    pub end_time: Option<i64>,
    /// `turnaround_time - burst_time`.
    pub waiting_time: Option<i64>,
    /// `end_time - arrival_time`.
    pub turnaround_time: Option<i64>,
}

impl ProcessResult {
    /// Creates a fresh, not-yet-started record for `process`.
    pub fn pending(process: &Process) -> Self {
        Self {
            pid: process.pid.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            remaining_time: process.burst_time,
            start_time: None,
            end_time: None,
            waiting_time: None,
            turnaround_time: None,
        }
    }

    /// Whether the process has arrived by `now`.
    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival_time <= now
    }

    /// Whether the process has been dispatched at least once.
    #[inline]
    pub fn is_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether all timing fields are populated.
    pub fn is_complete(&self) -> bool {
        self.end_time.is_some() && self.waiting_time.is_some() && self.turnaround_time.is_some()
    }

    /// Runs the process for up to `units` ticks starting at `now`.
    ///
    /// Records `start_time` on first execution. Returns the ticks actually
    /// executed, which never exceed `remaining_time`.
    pub fn execute(&mut self, now: i64, units: i64) -> i64 {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
        let executed = units.min(self.remaining_time).max(0);
        self.remaining_time -= executed;
        executed
    }

    /// Finalizes timing metrics with completion at `end`.
    pub fn finish(&mut self, end: i64) {
        if self.start_time.is_none() {
            self.start_time = Some(end);
        }
        let turnaround = end - self.arrival_time;
        self.end_time = Some(end);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }

    /// Runs the whole burst to completion starting at `start`.
    ///
    /// Used by non-preemptive strategies. Returns the completion instant.
    pub fn run_to_completion(&mut self, start: i64) -> i64 {
        let executed = self.execute(start, self.remaining_time);
        let end = start + executed;
        self.finish(end);
        end
    }
}

impl From<&Process> for ProcessResult {
    fn from(process: &Process) -> Self {
        Self::pending(process)
    }
}
