//! Shared dispatch loops for rule-driven strategies.
//!
//! SJF and Priority come in two flavours that differ only in their
//! [`SelectionRule`]:
//!
//! - **Non-preemptive**: at each decision point the best eligible process
//!   runs to completion. One timeline entry per process.
//! - **Preemptive**: the choice is re-evaluated every tick. One timeline
//!   entry per executed tick.
//!
//! Both walk idle gaps with [`Clock::idle_until_ready`].

use log::{debug, trace};

use super::clock::Clock;
use super::rules::{select, SelectionRule};
use crate::models::{Process, ProcessResult, SimulationOutcome, Timeline};

/// Runs `rule` non-preemptively.
///
/// Input is stably sorted once by `(arrival_time, rule key)`; the clock
/// starts at 0. Results are returned in completion order.
pub(crate) fn run_non_preemptive<R: SelectionRule>(
    processes: &[Process],
    rule: &R,
    algorithm: &str,
) -> SimulationOutcome {
    let mut remaining: Vec<ProcessResult> = processes.iter().map(ProcessResult::pending).collect();
    remaining.sort_by_key(|p| (p.arrival_time, rule.key(p)));

    let mut clock = Clock::default();
    let mut completed = Vec::with_capacity(remaining.len());
    let mut timeline = Timeline::new();

    while clock.idle_until_ready(&remaining) {
        let Some(idx) = select(rule, &remaining, clock.now()) else {
            break;
        };
        let mut process = remaining.remove(idx);
        let start = clock.now();
        let end = process.run_to_completion(start);
        debug!(
            "{}: dispatch {} at t={} (key {}), completes at t={}",
            rule.name(),
            process.pid,
            start,
            rule.key(&process),
            end
        );
        timeline.record(&process.pid, start, end);
        clock.advance_to(end);
        completed.push(process);
    }

    SimulationOutcome::new(completed, algorithm, timeline)
}

/// Runs `rule` preemptively, one tick at a time.
///
/// Input is stably sorted by arrival; the clock starts at the earliest
/// arrival (0 for empty input). Results are returned in completion order.
pub(crate) fn run_preemptive<R: SelectionRule>(
    processes: &[Process],
    rule: &R,
    algorithm: &str,
) -> SimulationOutcome {
    let mut remaining: Vec<ProcessResult> = processes.iter().map(ProcessResult::pending).collect();
    remaining.sort_by_key(|p| p.arrival_time);

    let mut clock = Clock::at(remaining.first().map_or(0, |p| p.arrival_time));
    let mut completed = Vec::with_capacity(remaining.len());
    let mut timeline = Timeline::new();

    while clock.idle_until_ready(&remaining) {
        let Some(idx) = select(rule, &remaining, clock.now()) else {
            break;
        };
        let now = clock.now();
        let process = &mut remaining[idx];
        let executed = process.execute(now, 1);
        if executed > 0 {
            trace!("{}: run {} at t={}", rule.name(), process.pid, now);
            timeline.record(&process.pid, now, now + executed);
            clock.advance(executed);
        }

        if process.remaining_time <= 0 {
            let mut done = remaining.remove(idx);
            done.finish(clock.now());
            debug!("{}: {} completes at t={}", rule.name(), done.pid, clock.now());
            completed.push(done);
        }
    }

    SimulationOutcome::new(completed, algorithm, timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::rules::{HighestPriority, ShortestJob, ShortestRemaining};

    #[test]
    fn test_non_preemptive_idle_gap() {
        // CPU idles 0..3 before anything arrives
        let processes = vec![Process::new("A", 3, 2), Process::new("B", 10, 1)];
        let outcome = run_non_preemptive(&processes, &ShortestJob, "test");
        assert_eq!(outcome.timeline.to_tuples(), vec![("A", 3, 5), ("B", 10, 11)]);
    }

    #[test]
    fn test_preemptive_idle_gap() {
        let processes = vec![Process::new("A", 0, 1), Process::new("B", 4, 2)];
        let outcome = run_preemptive(&processes, &ShortestRemaining, "test");
        assert_eq!(
            outcome.timeline.merged().to_tuples(),
            vec![("A", 0, 1), ("B", 4, 6)]
        );
        assert_eq!(outcome.result_for("B").and_then(|r| r.start_time), Some(4));
    }

    #[test]
    fn test_preemptive_starts_at_earliest_arrival() {
        let processes = vec![Process::new("A", 7, 2), Process::new("B", 5, 1)];
        let outcome = run_preemptive(&processes, &HighestPriority, "test");
        assert_eq!(outcome.timeline.entries()[0].start, 5);
    }

    #[test]
    fn test_zero_burst_terminates() {
        let processes = vec![Process::new("A", 0, 0), Process::new("B", 0, 2)];
        let outcome = run_preemptive(&processes, &ShortestRemaining, "test");
        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.result_for("A").and_then(|r| r.end_time), Some(0));
        assert_eq!(outcome.timeline.busy_time(), 2);
    }

    #[test]
    fn test_empty() {
        let outcome = run_preemptive(&[], &ShortestRemaining, "test");
        assert!(outcome.results.is_empty());
        assert!(outcome.timeline.is_empty());

        let outcome = run_non_preemptive(&[], &ShortestJob, "test");
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.algorithm, "test");
    }
}
