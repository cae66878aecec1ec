//! Round Robin.
//!
//! # Algorithm
//!
//! 1. Processes that have arrived at the earliest arrival instant enter a
//!    FIFO ready queue in arrival order.
//! 2. The head runs for `min(quantum, remaining)` and the clock advances.
//! 3. Every process that has arrived by the new instant and was never
//!    queued is appended in arrival order.
//! 4. Only then is the incumbent re-appended if it still has work.
//!
//! Step 3 before step 4 means new arrivals get the CPU before the
//! process that was just preempted. When the queue drains while work is
//! still to arrive, the clock idles tick by tick.

use std::collections::VecDeque;

use log::{debug, trace, warn};

use super::clock::Clock;
use crate::models::{Process, ProcessResult, SimulationOutcome, Timeline};

/// Label reported by [`round_robin`].
pub const ROUND_ROBIN: &str = "Round Robin";

/// Round Robin with a fixed time `quantum`.
///
/// Results are returned in input order. A non-positive quantum is
/// treated as 1.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::round_robin;
///
/// let processes = vec![Process::new("A", 0, 3), Process::new("B", 0, 2)];
/// let outcome = round_robin(&processes, 2);
/// assert_eq!(
///     outcome.timeline.to_tuples(),
///     vec![("A", 0, 2), ("B", 2, 4), ("A", 4, 5)]
/// );
/// ```
pub fn round_robin(processes: &[Process], quantum: i64) -> SimulationOutcome {
    let quantum = if quantum > 0 {
        quantum
    } else {
        warn!("Round Robin quantum {quantum} is not positive, using 1");
        1
    };

    let mut results: Vec<ProcessResult> = processes.iter().map(ProcessResult::pending).collect();
    let mut arrival_order: Vec<usize> = (0..results.len()).collect();
    arrival_order.sort_by_key(|&i| results[i].arrival_time);

    let mut clock = Clock::at(arrival_order.first().map_or(0, |&i| results[i].arrival_time));
    let mut timeline = Timeline::new();
    let mut ready = ReadyQueue::new(results.len());
    ready.admit_arrivals(&arrival_order, &results, clock.now());

    loop {
        let Some(idx) = ready.pop() else {
            let waiting = arrival_order
                .iter()
                .filter(|&&i| !ready.was_admitted(i))
                .map(|&i| &results[i]);
            if !clock.idle_until_ready(waiting) {
                break;
            }
            ready.admit_arrivals(&arrival_order, &results, clock.now());
            continue;
        };

        let now = clock.now();
        let process = &mut results[idx];
        let executed = process.execute(now, quantum);
        if executed > 0 {
            trace!("RR: {} runs t={}..{}", process.pid, now, now + executed);
            timeline.record(&process.pid, now, now + executed);
            clock.advance(executed);
        }

        ready.admit_arrivals(&arrival_order, &results, clock.now());

        let process = &mut results[idx];
        if process.remaining_time > 0 {
            ready.push(idx);
        } else {
            process.finish(clock.now());
            debug!("RR: {} completes at t={}", process.pid, clock.now());
        }
    }

    SimulationOutcome::new(results, ROUND_ROBIN, timeline)
}

/// FIFO of process indices with an explicit admission flag per process.
#[derive(Debug)]
struct ReadyQueue {
    queue: VecDeque<usize>,
    admitted: Vec<bool>,
}

impl ReadyQueue {
    fn new(len: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(len),
            admitted: vec![false; len],
        }
    }

    fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    fn push(&mut self, idx: usize) {
        self.queue.push_back(idx);
    }

    fn was_admitted(&self, idx: usize) -> bool {
        self.admitted[idx]
    }

    /// Enqueues, in arrival order, every never-admitted process arrived by `now`.
    ///
    /// A never-admitted process has not run yet, so it still owes its
    /// whole burst.
    fn admit_arrivals(&mut self, arrival_order: &[usize], results: &[ProcessResult], now: i64) {
        for &i in arrival_order {
            if !self.admitted[i] && results[i].has_arrived(now) {
                self.admitted[i] = true;
                self.queue.push_back(i);
            }
        }
    }
}
