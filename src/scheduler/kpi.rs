//! Simulation quality metrics (KPIs).
//!
//! Computes summary statistics from a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(turnaround - burst) |
//! | Avg Turnaround Time | mean(end - arrival) |
//! | CPU Utilization | sum(burst) / makespan × 100 |
//! | Throughput | process count / makespan |
//! | Makespan | Latest completion time |
//!
//! With a zero makespan, utilization and throughput are 0.

use serde::Serialize;

use crate::error::{Result, SimulationError};
use crate::models::ProcessResult;

/// Run performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationKpi {
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// CPU busy share of the makespan, in percent (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Number of processes.
    pub process_count: usize,
    /// Longest single waiting time.
    pub max_waiting_time: i64,
}

impl SimulationKpi {
    /// Computes KPIs from completed process records.
    ///
    /// # Errors
    /// `InvalidInput` if `results` is empty or any record lacks
    /// `end_time`, `waiting_time` or `turnaround_time`.
    pub fn calculate(results: &[ProcessResult]) -> Result<Self> {
        if results.is_empty() {
            return Err(SimulationError::InvalidInput(
                "no processes to aggregate".to_string(),
            ));
        }

        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut total_burst: i64 = 0;
        let mut max_waiting: i64 = 0;
        let mut makespan: i64 = 0;

        for r in results {
            let (Some(end), Some(waiting), Some(turnaround)) =
                (r.end_time, r.waiting_time, r.turnaround_time)
            else {
                return Err(SimulationError::InvalidInput(format!(
                    "process '{}' has no computed timing",
                    r.pid
                )));
            };
            total_waiting += waiting;
            total_turnaround += turnaround;
            total_burst += r.burst_time;
            max_waiting = max_waiting.max(waiting);
            makespan = makespan.max(end);
        }

        let count = results.len() as f64;
        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                total_burst as f64 / makespan as f64 * 100.0,
                count / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            avg_waiting_time: total_waiting as f64 / count,
            avg_turnaround_time: total_turnaround as f64 / count,
            cpu_utilization,
            throughput,
            makespan,
            process_count: results.len(),
            max_waiting_time: max_waiting,
        })
    }

    /// `(avg waiting, avg turnaround, utilization %, throughput)`.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (
            self.avg_waiting_time,
            self.avg_turnaround_time,
            self.cpu_utilization,
            self.throughput,
        )
    }
}
