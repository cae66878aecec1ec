//! Simulation outcome model.

use serde::{Deserialize, Serialize};

use super::{ProcessResult, Timeline};
use crate::error::Result;
use crate::scheduler::SimulationKpi;

/// The result of running one scheduling strategy.
///
/// Mirrors the `(processes, algorithm name, timeline)` triple: the
/// completed per-process records, a human-readable strategy label and the
/// ordered execution slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Completed per-process records.
    pub results: Vec<ProcessResult>,
    /// Strategy label, e.g. `"Round Robin"`.
    pub algorithm: String,
    /// Execution slices in order.
    pub timeline: Timeline,
}

impl SimulationOutcome {
    /// Creates an outcome.
    pub fn new(
        results: Vec<ProcessResult>,
        algorithm: impl Into<String>,
        timeline: Timeline,
    ) -> Self {
        Self {
            results,
            algorithm: algorithm.into(),
            timeline,
        }
    }

    /// Finds the record for `pid`.
    pub fn result_for(&self, pid: &str) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.pid == pid)
    }

    /// Completion time of the last process, or 0 when nothing ran.
    pub fn makespan(&self) -> i64 {
        self.results
            .iter()
            .filter_map(|r| r.end_time)
            .max()
            .unwrap_or(0)
    }

    /// Summary statistics for this run.
    pub fn kpi(&self) -> Result<SimulationKpi> {
        SimulationKpi::calculate(&self.results)
    }

    /// Splits into `(results, algorithm, timeline)`.
    pub fn into_parts(self) -> (Vec<ProcessResult>, String, Timeline) {
        (self.results, self.algorithm, self.timeline)
    }
}
