//! Selection rules for the shared dispatch engines.
//!
//! # Score Convention
//! **Lower key = dispatched first.** Among equal keys the candidate seen
//! first (earliest in arrival order) wins.

use std::fmt::Debug;

use crate::models::ProcessResult;

/// A rule that ranks eligible processes at a decision point.
pub trait SelectionRule: Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Ranking key; lower = higher priority.
    fn key(&self, process: &ProcessResult) -> i64;
}

/// Shortest Job First: ranks by total burst time.
#[derive(Debug, Clone, Copy)]
pub struct ShortestJob;

impl SelectionRule for ShortestJob {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, process: &ProcessResult) -> i64 {
        process.burst_time
    }
}

/// Shortest Remaining Time: ranks by CPU time still owed.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn key(&self, process: &ProcessResult) -> i64 {
        process.remaining_time
    }
}

/// Most urgent priority first (lowest priority value).
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &ProcessResult) -> i64 {
        i64::from(process.priority)
    }
}

/// Index of the best eligible candidate at `now`, if any.
///
/// Ties resolve to the lowest index.
pub(crate) fn select<R: SelectionRule + ?Sized>(
    rule: &R,
    candidates: &[ProcessResult],
    now: i64,
) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .filter(|(_, p)| p.has_arrived(now))
        .min_by_key(|(_, p)| rule.key(p))
        .map(|(i, _)| i)
}
