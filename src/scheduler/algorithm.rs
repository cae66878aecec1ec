//! Strategy selection as data.

use serde::{Deserialize, Serialize};

use super::adaptive::{adaptive, AdaptiveConfig};
use super::fcfs::{fcfs, FCFS};
use super::priority::{
    priority_non_preemptive, priority_preemptive, PRIORITY_NON_PREEMPTIVE, PRIORITY_PREEMPTIVE,
};
use super::round_robin::{round_robin, ROUND_ROBIN};
use super::sjf::{sjf_non_preemptive, sjf_preemptive, SJF_NON_PREEMPTIVE, SJF_PREEMPTIVE};
use crate::models::{Process, SimulationOutcome};

/// A scheduling strategy and its parameters.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::Algorithm;
///
/// let processes = vec![Process::new("P1", 0, 3), Process::new("P2", 0, 1)];
/// let outcome = Algorithm::SjfNonPreemptive.run(&processes);
/// assert_eq!(outcome.results[0].pid, "P2");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First, run to completion.
    SjfNonPreemptive,
    /// Shortest Remaining Time First.
    SjfPreemptive,
    /// Round Robin with a fixed time quantum.
    RoundRobin {
        /// Time slice per turn.
        quantum: i64,
    },
    /// Most urgent priority first, run to completion.
    PriorityNonPreemptive,
    /// Most urgent priority first, re-selected every tick.
    PriorityPreemptive,
    /// SJF or Round Robin depending on mean burst.
    Adaptive(AdaptiveConfig),
}

impl Algorithm {
    /// Label the strategy reports in its outcome.
    ///
    /// `Adaptive` reports its delegate's label at run time; here it is
    /// simply `"Adaptive"`.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => FCFS,
            Algorithm::SjfNonPreemptive => SJF_NON_PREEMPTIVE,
            Algorithm::SjfPreemptive => SJF_PREEMPTIVE,
            Algorithm::RoundRobin { .. } => ROUND_ROBIN,
            Algorithm::PriorityNonPreemptive => PRIORITY_NON_PREEMPTIVE,
            Algorithm::PriorityPreemptive => PRIORITY_PREEMPTIVE,
            Algorithm::Adaptive(_) => "Adaptive",
        }
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Algorithm::SjfPreemptive | Algorithm::RoundRobin { .. } | Algorithm::PriorityPreemptive
        )
    }

    /// Runs the strategy on `processes`.
    pub fn run(&self, processes: &[Process]) -> SimulationOutcome {
        match self {
            Algorithm::Fcfs => fcfs(processes),
            Algorithm::SjfNonPreemptive => sjf_non_preemptive(processes),
            Algorithm::SjfPreemptive => sjf_preemptive(processes),
            Algorithm::RoundRobin { quantum } => round_robin(processes, *quantum),
            Algorithm::PriorityNonPreemptive => priority_non_preemptive(processes),
            Algorithm::PriorityPreemptive => priority_preemptive(processes),
            Algorithm::Adaptive(config) => adaptive(processes, config),
        }
    }

    /// Every strategy, with `quantum` for the time-sliced ones.
    pub fn all(quantum: i64) -> Vec<Algorithm> {
        vec![
            Algorithm::Fcfs,
            Algorithm::SjfNonPreemptive,
            Algorithm::SjfPreemptive,
            Algorithm::RoundRobin { quantum },
            Algorithm::PriorityNonPreemptive,
            Algorithm::PriorityPreemptive,
            Algorithm::Adaptive(AdaptiveConfig::default().with_quantum(quantum)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_outcomes() {
        let processes = vec![Process::new("P1", 0, 2)];
        for algorithm in Algorithm::all(2) {
            if matches!(algorithm, Algorithm::Adaptive(_)) {
                continue;
            }
            assert_eq!(algorithm.run(&processes).algorithm, algorithm.name());
        }
    }

    #[test]
    fn test_all_has_seven() {
        assert_eq!(Algorithm::all(3).len(), 7);
        assert!(Algorithm::all(3).contains(&Algorithm::RoundRobin { quantum: 3 }));
    }

    #[test]
    fn test_is_preemptive() {
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert!(Algorithm::SjfPreemptive.is_preemptive());
        assert!(Algorithm::RoundRobin { quantum: 1 }.is_preemptive());
        assert!(!Algorithm::PriorityNonPreemptive.is_preemptive());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Algorithm::RoundRobin { quantum: 4 }).unwrap();
        assert_eq!(json, r#"{"kind":"round_robin","quantum":4}"#);

        let parsed: Algorithm = serde_json::from_str(r#"{"kind":"sjf_preemptive"}"#).unwrap();
        assert_eq!(parsed, Algorithm::SjfPreemptive);

        let parsed: Algorithm = serde_json::from_str(
            r#"{"kind":"adaptive","burst_threshold":3.0,"quantum":1}"#,
        )
        .unwrap();
        assert_eq!(
            parsed,
            Algorithm::Adaptive(AdaptiveConfig::new().with_burst_threshold(3.0).with_quantum(1))
        );
    }
}
