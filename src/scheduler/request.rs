//! Validated simulation requests.

use serde::{Deserialize, Serialize};

use super::Algorithm;
use crate::error::Result;
use crate::models::{Process, SimulationOutcome};
use crate::validation::{validate_processes, validate_quantum, ValidationResult};

/// Input container for one simulation run.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{Algorithm, SimulationRequest};
///
/// let request = SimulationRequest::new(vec![Process::new("P1", 0, 3)])
///     .with_algorithm(Algorithm::RoundRobin { quantum: 2 });
/// let outcome = request.run().unwrap();
/// assert_eq!(outcome.timeline.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Strategy to run.
    pub algorithm: Algorithm,
}

impl SimulationRequest {
    /// Creates a request using FCFS.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            algorithm: Algorithm::Fcfs,
        }
    }

    /// Sets the strategy.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Adds a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    /// Checks processes and, for time-sliced strategies, the quantum.
    ///
    /// All issues are collected.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = validate_processes(&self.processes).err().unwrap_or_default();

        let quantum = match &self.algorithm {
            Algorithm::RoundRobin { quantum } => Some(*quantum),
            Algorithm::Adaptive(config) => Some(config.quantum),
            _ => None,
        };
        if let Some(quantum) = quantum {
            if let Err(quantum_errors) = validate_quantum(quantum) {
                errors.extend(quantum_errors);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates, then runs the strategy.
    pub fn run(&self) -> Result<SimulationOutcome> {
        self.validate()?;
        Ok(self.algorithm.run(&self.processes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_run_default_fcfs() {
        let request = SimulationRequest::new(vec![])
            .with_process(Process::new("P1", 0, 2))
            .with_process(Process::new("P2", 0, 1));
        let outcome = request.run().unwrap();
        assert_eq!(outcome.algorithm, "FCFS (Non-Preemptive)");
        assert_eq!(outcome.timeline.to_tuples(), vec![("P1", 0, 2), ("P2", 2, 3)]);
    }

    #[test]
    fn test_rejects_invalid_processes() {
        let request = SimulationRequest::new(vec![
            Process::new("P1", 0, 2),
            Process::new("P1", 0, 0),
        ]);
        match request.run() {
            Err(SimulationError::Validation(errors)) => {
                assert!(errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::DuplicateId));
                assert!(errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::InvalidBurst));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_quantum() {
        let request = SimulationRequest::new(vec![Process::new("P1", 0, 2)])
            .with_algorithm(Algorithm::RoundRobin { quantum: 0 });
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);
    }

    #[test]
    fn test_quantum_ignored_for_non_sliced() {
        let request = SimulationRequest::new(vec![Process::new("P1", 0, 2)])
            .with_algorithm(Algorithm::PriorityPreemptive);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "processes": [
                {"pid": "P1", "arrival_time": 0, "burst_time": 4, "priority": 2},
                {"pid": "P2", "arrival_time": 1, "burst_time": 1}
            ],
            "algorithm": {"kind": "priority_non_preemptive"}
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.processes[1].priority, 0);
        let outcome = request.run().unwrap();
        assert_eq!(outcome.algorithm, "Priority (Non-Preemptive)");
    }
}
