//! CPU scheduling strategies and KPI evaluation.
//!
//! # Strategies
//!
//! | Function | Preemptive | Selection |
//! |----------|-----------|-----------|
//! | [`fcfs`] | no | arrival order |
//! | [`sjf_non_preemptive`] | no | shortest burst |
//! | [`sjf_preemptive`] | per tick | shortest remaining time |
//! | [`round_robin`] | per quantum | FIFO |
//! | [`priority_non_preemptive`] | no | lowest priority value |
//! | [`priority_preemptive`] | per tick | lowest priority value |
//! | [`adaptive`] | delegate | SJF or RR by mean burst |
//!
//! Every strategy borrows its input and returns a fresh
//! [`SimulationOutcome`](crate::models::SimulationOutcome).
//!
//! # KPI
//!
//! [`SimulationKpi`] computes mean waiting time, mean turnaround time,
//! CPU utilization and throughput.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod adaptive;
mod algorithm;
mod clock;
mod engine;
mod fcfs;
mod kpi;
mod priority;
mod request;
mod round_robin;
pub mod rules;
mod sjf;

pub use adaptive::{adaptive, mean_burst, AdaptiveConfig, DEFAULT_BURST_THRESHOLD, DEFAULT_QUANTUM};
pub use algorithm::Algorithm;
pub use fcfs::{fcfs, FCFS};
pub use kpi::SimulationKpi;
pub use priority::{
    priority_non_preemptive, priority_preemptive, PRIORITY_NON_PREEMPTIVE, PRIORITY_PREEMPTIVE,
};
pub use request::SimulationRequest;
pub use round_robin::{round_robin, ROUND_ROBIN};
pub use sjf::{sjf_non_preemptive, sjf_preemptive, SJF_NON_PREEMPTIVE, SJF_PREEMPTIVE};
