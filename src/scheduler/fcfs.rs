//! First-Come, First-Served.
//!
//! # Algorithm
//!
//! 1. Stable sort by arrival time (ties keep input order).
//! 2. Each process starts at `max(now, arrival)` and runs to completion.
//!
//! No preemption, no tie-break beyond arrival order.

use log::debug;

use super::clock::Clock;
use crate::models::{Process, ProcessResult, SimulationOutcome, Timeline};

/// Label reported by [`fcfs`].
pub const FCFS: &str = "FCFS (Non-Preemptive)";

/// Schedules processes in arrival order.
///
/// Results are returned in arrival order.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::fcfs;
///
/// let processes = vec![Process::new("P1", 0, 4), Process::new("P2", 1, 3)];
/// let outcome = fcfs(&processes);
/// assert_eq!(outcome.timeline.to_tuples(), vec![("P1", 0, 4), ("P2", 4, 7)]);
/// ```
pub fn fcfs(processes: &[Process]) -> SimulationOutcome {
    let mut results: Vec<ProcessResult> = processes.iter().map(ProcessResult::pending).collect();
    results.sort_by_key(|p| p.arrival_time);

    let mut clock = Clock::default();
    let mut timeline = Timeline::new();

    for process in &mut results {
        let start = clock.now().max(process.arrival_time);
        let end = process.run_to_completion(start);
        debug!("FCFS: {} runs t={}..{}", process.pid, start, end);
        timeline.record(&process.pid, start, end);
        clock.advance_to(end);
    }

    SimulationOutcome::new(results, FCFS, timeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_determinism() {
        let processes = vec![
            Process::new("P1", 0, 4),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 3),
        ];
        let outcome = fcfs(&processes);

        let starts: Vec<_> = outcome.results.iter().map(|r| r.start_time).collect();
        let ends: Vec<_> = outcome.results.iter().map(|r| r.end_time).collect();
        assert_eq!(starts, vec![Some(0), Some(4), Some(7)]);
        assert_eq!(ends, vec![Some(4), Some(7), Some(10)]);
        assert_eq!(outcome.algorithm, "FCFS (Non-Preemptive)");
    }

    #[test]
    fn test_fcfs_metrics() {
        let processes = vec![Process::new("P1", 0, 4), Process::new("P2", 1, 3)];
        let outcome = fcfs(&processes);
        let p2 = outcome.result_for("P2").unwrap();
        assert_eq!(p2.waiting_time, Some(3)); // starts 4, arrived 1
        assert_eq!(p2.turnaround_time, Some(6)); // ends 7
    }

    #[test]
    fn test_fcfs_sorts_by_arrival_stably() {
        let processes = vec![
            Process::new("late", 5, 1),
            Process::new("first", 0, 2),
            Process::new("second", 0, 1),
        ];
        let outcome = fcfs(&processes);
        let order: Vec<&str> = outcome.results.iter().map(|r| r.pid.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "late"]);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![Process::new("P1", 0, 2), Process::new("P2", 6, 1)];
        let outcome = fcfs(&processes);
        assert_eq!(outcome.timeline.to_tuples(), vec![("P1", 0, 2), ("P2", 6, 7)]);
        assert_eq!(outcome.result_for("P2").unwrap().waiting_time, Some(0));
    }

    #[test]
    fn test_fcfs_does_not_touch_input() {
        let processes = vec![Process::new("P2", 3, 1), Process::new("P1", 0, 1)];
        let before = processes.clone();
        let _ = fcfs(&processes);
        assert_eq!(processes, before);
    }

    #[test]
    fn test_fcfs_empty() {
        let outcome = fcfs(&[]);
        assert!(outcome.results.is_empty());
        assert!(outcome.timeline.is_empty());
    }
}
