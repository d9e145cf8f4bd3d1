//! First-Come-First-Served.
//!
//! Processes run to completion in index order. Process 0 waits 0; every
//! later process waits for the sum of all bursts before it.
//!
//! # Complexity
//! O(n) time and space.

use crate::models::TimeSlice;
use crate::validation::{validate_burst_times, ValidationResult};

/// Computes FCFS waiting times. The quantum is ignored.
pub fn calc_waiting_time(burst_times: &[i64], _quantum: i64) -> ValidationResult<Vec<i64>> {
    validate_burst_times(burst_times)?;

    let mut waiting_times = Vec::with_capacity(burst_times.len());
    let mut clock = 0;
    for &burst in burst_times {
        waiting_times.push(clock);
        clock += burst;
    }

    log::trace!("FCFS: {} processes finish at t={clock}", burst_times.len());
    Ok(waiting_times)
}

/// Computes the FCFS execution timeline: one slice per process with work.
pub fn timeline(burst_times: &[i64], _quantum: i64) -> ValidationResult<Vec<TimeSlice>> {
    validate_burst_times(burst_times)?;

    let mut slices = Vec::with_capacity(burst_times.len());
    let mut clock = 0;
    for (id, &burst) in burst_times.iter().enumerate() {
        if burst > 0 {
            slices.push(TimeSlice::new(id, clock, clock + burst));
            clock += burst;
        }
    }
    Ok(slices)
}
