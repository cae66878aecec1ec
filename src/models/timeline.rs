//! Execution timeline model.
//!
//! A timeline is the ordered list of execution slices produced by one
//! simulation run. Idle CPU time is never recorded, so gaps between
//! consecutive entries are idle periods.

use serde::{Deserialize, Serialize};

/// One contiguous execution slice `[start, end)` of a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Executing process.
    pub pid: String,
    /// Slice start (inclusive).
    pub start: i64,
    /// Slice end (exclusive).
    pub end: i64,
}

impl TimelineEntry {
    /// Creates a new slice.
    pub fn new(pid: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            pid: pid.into(),
            start,
            end,
        }
    }

    /// Slice length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Tuple view `(pid, start, end)`.
    pub fn as_tuple(&self) -> (&str, i64, i64) {
        (&self.pid, self.start, self.end)
    }
}

/// Ordered sequence of execution slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn push(&mut self, entry: TimelineEntry) {
        self.entries.push(entry);
    }

    /// Appends a slice `[start, end)` for `pid`.
    pub fn record(&mut self, pid: &str, start: i64, end: i64) {
        self.push(TimelineEntry::new(pid, start, end));
    }

    /// All slices in execution order.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no slice was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total CPU busy time (sum of slice durations).
    pub fn busy_time(&self) -> i64 {
        self.entries.iter().map(TimelineEntry::duration).sum()
    }

    /// Latest slice end, or 0 for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.entries.iter().map(|e| e.end).max().unwrap_or(0)
    }

    /// Slices belonging to `pid`, in execution order.
    pub fn entries_for(&self, pid: &str) -> Vec<&TimelineEntry> {
        self.entries.iter().filter(|e| e.pid == pid).collect()
    }

    /// Whether slices, sorted by start, never overlap.
    pub fn is_non_overlapping(&self) -> bool {
        let mut sorted: Vec<&TimelineEntry> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.start);
        sorted.windows(2).all(|w| w[0].end <= w[1].start)
    }

    /// Coalesces adjacent, contiguous slices of the same process.
    ///
    /// Preemptive strategies emit one slice per tick; the merged view gives
    /// one bar per uninterrupted run, as drawn on a Gantt chart.
    pub fn merged(&self) -> Timeline {
        let mut merged: Vec<TimelineEntry> = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            match merged.last_mut() {
                Some(last) if last.pid == entry.pid && last.end == entry.start => {
                    last.end = entry.end;
                }
                _ => merged.push(entry.clone()),
            }
        }
        Timeline { entries: merged }
    }

    /// Number of times `pid` was interrupted before finishing.
    pub fn preemption_count(&self, pid: &str) -> usize {
        self.merged().entries_for(pid).len().saturating_sub(1)
    }

    /// Tuple view `(pid, start, end)` of every slice.
    pub fn to_tuples(&self) -> Vec<(&str, i64, i64)> {
        self.entries.iter().map(TimelineEntry::as_tuple).collect()
    }
}

impl FromIterator<TimelineEntry> for Timeline {
    fn from_iter<I: IntoIterator<Item = TimelineEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
