//! Shortest Job First, in both flavours.
//!
//! - [`sjf_non_preemptive`]: shortest burst among arrived processes runs
//!   to completion.
//! - [`sjf_preemptive`] (SRTF): shortest *remaining* time is re-selected
//!   every tick.
//!
//! # Reference
//! Silberschatz et al., "Operating System Concepts", Ch. 5.3.2

use super::engine::{run_non_preemptive, run_preemptive};
use super::rules::{ShortestJob, ShortestRemaining};
use crate::models::{Process, SimulationOutcome};

/// Label reported by [`sjf_non_preemptive`].
pub const SJF_NON_PREEMPTIVE: &str = "SJF (Non-Preemptive)";
/// Label reported by [`sjf_preemptive`].
pub const SJF_PREEMPTIVE: &str = "SJF (Preemptive - SRTF)";

/// Non-preemptive SJF. Results are in completion order.
pub fn sjf_non_preemptive(processes: &[Process]) -> SimulationOutcome {
    run_non_preemptive(processes, &ShortestJob, SJF_NON_PREEMPTIVE)
}

/// Shortest Remaining Time First. Results are in completion order.
pub fn sjf_preemptive(processes: &[Process]) -> SimulationOutcome {
    run_preemptive(processes, &ShortestRemaining, SJF_PREEMPTIVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pids(outcome: &SimulationOutcome) -> Vec<&str> {
        outcome.results.iter().map(|r| r.pid.as_str()).collect()
    }

    #[test]
    fn test_sjf_picks_shortest_arrived() {
        // At t=0 only A is eligible; at t=7 B, C and D all wait
        let processes = vec![
            Process::new("A", 0, 7),
            Process::new("B", 2, 4),
            Process::new("C", 4, 1),
            Process::new("D", 5, 4),
        ];
        let outcome = sjf_non_preemptive(&processes);
        assert_eq!(pids(&outcome), vec!["A", "C", "B", "D"]);
        assert_eq!(
            outcome.timeline.to_tuples(),
            vec![("A", 0, 7), ("C", 7, 8), ("B", 8, 12), ("D", 12, 16)]
        );
        assert_eq!(outcome.algorithm, "SJF (Non-Preemptive)");
    }

    #[test]
    fn test_sjf_tie_goes_to_earlier_arrival() {
        let processes = vec![Process::new("late", 1, 3), Process::new("early", 0, 3)];
        let outcome = sjf_non_preemptive(&processes);
        assert_eq!(pids(&outcome), vec!["early", "late"]);
    }

    #[test]
    fn test_sjf_idles_until_arrival() {
        let processes = vec![Process::new("A", 4, 2)];
        let outcome = sjf_non_preemptive(&processes);
        let a = outcome.result_for("A").unwrap();
        assert_eq!(a.start_time, Some(4));
        assert_eq!(a.waiting_time, Some(0));
    }

    #[test]
    fn test_srtf_preemption() {
        let processes = vec![
            Process::new("P1", 0, 7),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 1),
        ];
        let outcome = sjf_preemptive(&processes);

        assert_eq!(
            outcome.timeline.merged().to_tuples(),
            vec![("P1", 0, 1), ("P2", 1, 2), ("P3", 2, 3), ("P2", 3, 6), ("P1", 6, 12)]
        );
        // P3 finishes before P1 or P2 resume
        assert_eq!(pids(&outcome), vec!["P3", "P2", "P1"]);
        assert!(outcome.timeline.preemption_count("P1") >= 1);

        let p1 = outcome.result_for("P1").unwrap();
        assert_eq!(p1.start_time, Some(0));
        assert_eq!(p1.end_time, Some(12));
        assert_eq!(p1.waiting_time, Some(5));
        assert_eq!(outcome.algorithm, "SJF (Preemptive - SRTF)");
    }

    #[test]
    fn test_srtf_unit_slices() {
        let processes = vec![Process::new("A", 0, 3)];
        let outcome = sjf_preemptive(&processes);
        assert_eq!(outcome.timeline.len(), 3);
        assert!(outcome.timeline.entries().iter().all(|e| e.duration() == 1));
    }

    #[test]
    fn test_srtf_tie_keeps_incumbent_by_arrival() {
        // Equal remaining time: earlier arrival wins, so A is not preempted
        let processes = vec![Process::new("A", 0, 2), Process::new("B", 1, 1)];
        let outcome = sjf_preemptive(&processes);
        assert_eq!(
            outcome.timeline.merged().to_tuples(),
            vec![("A", 0, 2), ("B", 2, 3)]
        );
    }
}
