//! CPU scheduling domain models.
//!
//! Provides the input record for a process, the per-run result records,
//! and the execution timeline.
//!
//! # Lifecycle
//!
//! | Type | Owned by | Mutated |
//! |------|----------|---------|
//! | Process | Caller | Never |
//! | ProcessResult | One simulation run | During the run only |
//! | Timeline | One simulation run | Append-only during the run |
//! | SimulationOutcome | Caller, after the run | No |

mod outcome;
mod process;
mod timeline;

pub use outcome::SimulationOutcome;
pub use process::{Process, ProcessResult};
pub use timeline::{Timeline, TimelineEntry};
