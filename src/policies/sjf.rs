//! Shortest-Job-First (non-preemptive).
//!
//! Processes run to completion in ascending burst order. Equal bursts run
//! in ascending id order; the tie-break lives in [`Process`]'s `Ord`, so it
//! does not depend on how the heap orders equal keys.
//!
//! # Algorithm
//! 1. Heapify `(burst, id)` keys into a min-heap: O(n).
//! 2. Pop processes one at a time: O(log n) each.
//! 3. Each popped process waits for the running sum of bursts popped
//!    before it; the result is written back at its original index.
//!
//! # Complexity
//! O(n log n) time, O(n) space.
//!
//! # Reference
//! Smith (1956), SPT is optimal for mean flow time on a single machine.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::models::{Process, TimeSlice};
use crate::validation::{validate_burst_times, ValidationResult};

/// Computes SJF waiting times. The quantum is ignored.
pub fn calc_waiting_time(burst_times: &[i64], _quantum: i64) -> ValidationResult<Vec<i64>> {
    validate_burst_times(burst_times)?;

    let mut waiting_times = vec![0; burst_times.len()];
    let mut clock = 0;
    for process in execution_order(burst_times) {
        waiting_times[process.id] = clock;
        clock += process.burst_time;
    }
    Ok(waiting_times)
}

/// Computes the SJF execution timeline: one slice per process with work,
/// in execution order.
pub fn timeline(burst_times: &[i64], _quantum: i64) -> ValidationResult<Vec<TimeSlice>> {
    validate_burst_times(burst_times)?;

    let mut slices = Vec::with_capacity(burst_times.len());
    let mut clock = 0;
    for process in execution_order(burst_times).filter(|p| !p.is_finished()) {
        slices.push(TimeSlice::new(process.id, clock, clock + process.burst_time));
        clock += process.burst_time;
    }
    Ok(slices)
}

/// Processes in the order SJF runs them.
fn execution_order(burst_times: &[i64]) -> impl Iterator<Item = Process> {
    let mut heap: BinaryHeap<Reverse<Process>> = Process::from_bursts(burst_times)
        .into_iter()
        .map(Reverse)
        .collect();
    std::iter::from_fn(move || heap.pop().map(|Reverse(process)| process))
}
