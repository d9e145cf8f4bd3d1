//! Round Robin with a fixed time quantum.
//!
//! Process membership never changes (everyone arrives at t=0, nobody
//! joins later), so the ready queue is a fixed array scanned cyclically
//! in index order. Finished processes stay in the scan and are skipped.
//!
//! # Algorithm
//! For each process with `remaining > 0`:
//! - `remaining > quantum`: run one quantum, stay unfinished.
//! - otherwise: run the remainder and finish; waiting time is
//!   `finish_time - burst`.
//!
//! The scan repeats until a full pass finds nothing left to run.
//!
//! # Complexity
//! O(n · max_burst / quantum).

use crate::models::TimeSlice;
use crate::validation::{validate_round_robin, ValidationResult};

/// Computes Round Robin waiting times.
///
/// Fails when `quantum <= 0` or any burst time is negative.
pub fn calc_waiting_time(burst_times: &[i64], quantum: i64) -> ValidationResult<Vec<i64>> {
    validate_round_robin(burst_times, quantum)?;

    let mut waiting_times = vec![0; burst_times.len()];
    simulate(burst_times, quantum, |slice, finished| {
        if finished {
            waiting_times[slice.process_id] = slice.end - burst_times[slice.process_id];
        }
    });
    Ok(waiting_times)
}

/// Computes the Round Robin execution timeline: one slice per grant.
pub fn timeline(burst_times: &[i64], quantum: i64) -> ValidationResult<Vec<TimeSlice>> {
    validate_round_robin(burst_times, quantum)?;

    let mut slices = Vec::new();
    simulate(burst_times, quantum, |slice, _| slices.push(slice));
    Ok(slices)
}

/// Runs the cyclic scan, reporting every grant and whether it finished
/// the process. Returns the number of passes that ran something.
fn simulate(
    burst_times: &[i64],
    quantum: i64,
    mut on_grant: impl FnMut(TimeSlice, bool),
) -> usize {
    let mut remaining = burst_times.to_vec();
    let mut time = 0;
    let mut passes = 0;

    loop {
        let mut all_finished = true;

        for (id, left) in remaining.iter_mut().enumerate() {
            if *left <= 0 {
                continue;
            }
            all_finished = false;

            let start = time;
            if *left > quantum {
                time += quantum;
                *left -= quantum;
                on_grant(TimeSlice::new(id, start, time), false);
            } else {
                time += *left;
                *left = 0;
                on_grant(TimeSlice::new(id, start, time), true);
            }
        }

        if all_finished {
            break;
        }
        passes += 1;
    }

    log::trace!(
        "RR: {} processes, quantum {quantum}, {passes} passes, finished at t={time}",
        burst_times.len()
    );
    passes
}
