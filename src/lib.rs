//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates classical uniprocessor scheduling over a fixed process set in
//! logical time and reports per-process timing, an execution timeline,
//! and summary KPIs. Intended for teaching and analysis.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessResult`, `Timeline`,
//!   `TimelineEntry`, `SimulationOutcome`
//! - **`scheduler`**: Strategies (FCFS, SJF, SRTF, Round Robin, Priority,
//!   Adaptive), `Algorithm`, `SimulationRequest`, `SimulationKpi`
//! - **`validation`**: Input integrity checks (duplicate IDs, bursts, quantum)
//! - **`error`**: `SimulationError`
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler::{sjf_preemptive, SimulationKpi};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 7),
//!     Process::new("P2", 1, 4),
//!     Process::new("P3", 2, 1),
//! ];
//! let outcome = sjf_preemptive(&processes);
//! assert_eq!(outcome.algorithm, "SJF (Preemptive - SRTF)");
//!
//! let kpi = SimulationKpi::calculate(&outcome.results).unwrap();
//! assert_eq!(kpi.makespan, 12);
//! ```
//!
//! # Logging
//!
//! Scheduling decisions are emitted through the `log` facade (`debug!`
//! per dispatch, `trace!` per tick). No logger is installed by this crate.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, SimulationError};
