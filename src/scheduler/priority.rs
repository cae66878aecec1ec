//! Priority scheduling (lower priority value = more urgent).

use super::engine::{run_non_preemptive, run_preemptive};
use super::rules::HighestPriority;
use crate::models::{Process, SimulationOutcome};

/// Label reported by [`priority_non_preemptive`].
pub const PRIORITY_NON_PREEMPTIVE: &str = "Priority (Non-Preemptive)";
/// Label reported by [`priority_preemptive`].
pub const PRIORITY_PREEMPTIVE: &str = "Priority (Preemptive)";

/// Most urgent arrived process runs to completion. Results are in
/// completion order.
pub fn priority_non_preemptive(processes: &[Process]) -> SimulationOutcome {
    run_non_preemptive(processes, &HighestPriority, PRIORITY_NON_PREEMPTIVE)
}

/// Most urgent arrived process is re-selected every tick. Results are in
/// completion order.
pub fn priority_preemptive(processes: &[Process]) -> SimulationOutcome {
    run_preemptive(processes, &HighestPriority, PRIORITY_PREEMPTIVE)
}
