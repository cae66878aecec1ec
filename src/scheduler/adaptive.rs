//! Adaptive strategy selection.
//!
//! Picks SJF non-preemptive when the mean burst is below a threshold and
//! Round Robin otherwise.

use log::debug;
use serde::{Deserialize, Serialize};

use super::Algorithm;
use crate::models::{Process, SimulationOutcome};

/// Default mean-burst threshold below which SJF is chosen.
pub const DEFAULT_BURST_THRESHOLD: f64 = 5.0;
/// Default Round Robin quantum for the adaptive path.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Parameters for [`adaptive`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveConfig {
    /// Mean burst strictly below this selects SJF non-preemptive.
    pub burst_threshold: f64,
    /// Quantum used when Round Robin is selected.
    pub quantum: i64,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            burst_threshold: DEFAULT_BURST_THRESHOLD,
            quantum: DEFAULT_QUANTUM,
        }
    }
}

impl AdaptiveConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the mean-burst threshold.
    pub fn with_burst_threshold(mut self, threshold: f64) -> Self {
        self.burst_threshold = threshold;
        self
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Chooses the delegate strategy for `processes`.
    ///
    /// An empty set has no mean burst and maps to SJF non-preemptive.
    pub fn choose(&self, processes: &[Process]) -> Algorithm {
        match mean_burst(processes) {
            Some(mean) if mean >= self.burst_threshold => Algorithm::RoundRobin {
                quantum: self.quantum,
            },
            _ => Algorithm::SjfNonPreemptive,
        }
    }
}

/// Mean burst time, or `None` for an empty set.
pub fn mean_burst(processes: &[Process]) -> Option<f64> {
    if processes.is_empty() {
        return None;
    }
    let total: i64 = processes.iter().map(|p| p.burst_time).sum();
    Some(total as f64 / processes.len() as f64)
}

/// Runs SJF non-preemptive or Round Robin depending on mean burst.
///
/// The outcome carries the delegate's own label.
pub fn adaptive(processes: &[Process], config: &AdaptiveConfig) -> SimulationOutcome {
    let choice = config.choose(processes);
    debug!(
        "Adaptive: mean burst {:?} vs threshold {} → {}",
        mean_burst(processes),
        config.burst_threshold,
        choice.name()
    );
    choice.run(processes)
}
