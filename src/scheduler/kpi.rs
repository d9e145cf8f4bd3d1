//! Batch quality metrics (KPIs).
//!
//! Summarizes the per-process sequences produced by a policy.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Waiting | Sum of waiting times |
//! | Avg Waiting | Mean waiting time |
//! | Total Turnaround | Sum of turnaround times |
//! | Avg Turnaround | Mean turnaround time |
//! | Max Waiting | Longest single wait |
//! | Makespan | Completion time of the last process (sum of bursts) |
//!
//! For an empty batch every metric is zero.

use serde::{Deserialize, Serialize};

use crate::validation::{validate_aligned, ValidationError, ValidationErrorKind, ValidationResult};

/// Batch performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of processes in the batch.
    pub process_count: usize,
    /// Sum of waiting times.
    pub total_waiting_time: i64,
    /// Sum of turnaround times.
    pub total_turnaround_time: i64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Largest waiting time of any single process.
    pub max_waiting_time: i64,
    /// Time at which the CPU goes idle.
    pub makespan: i64,
}

impl ScheduleKpi {
    /// Computes KPIs from index-aligned burst, waiting and turnaround times.
    pub fn calculate(
        burst_times: &[i64],
        waiting_times: &[i64],
        turnaround_times: &[i64],
    ) -> ValidationResult<Self> {
        let mut errors = validate_aligned(burst_times, waiting_times, "waiting times")
            .err()
            .unwrap_or_default();
        if let Err(more) = validate_aligned(burst_times, turnaround_times, "turnaround times") {
            errors.extend(more);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let total_waiting_time = checked_total(waiting_times, "waiting time", &mut errors);
        let total_turnaround_time = checked_total(turnaround_times, "turnaround time", &mut errors);
        let makespan = checked_total(burst_times, "burst time", &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }

        let process_count = burst_times.len();
        Ok(Self {
            process_count,
            total_waiting_time,
            total_turnaround_time,
            avg_waiting_time: mean(total_waiting_time, process_count),
            avg_turnaround_time: mean(total_turnaround_time, process_count),
            max_waiting_time: waiting_times.iter().copied().max().unwrap_or(0),
            makespan,
        })
    }
}

/// Sums `values`, recording a `TimeOverflow` error if the total does not fit.
fn checked_total(values: &[i64], what: &str, errors: &mut Vec<ValidationError>) -> i64 {
    values
        .iter()
        .try_fold(0i64, |acc, &v| acc.checked_add(v))
        .unwrap_or_else(|| {
            errors.push(ValidationError::new(
                ValidationErrorKind::TimeOverflow,
                format!("Total {what} of {} processes overflows", values.len()),
            ));
            0
        })
}

fn mean(total: i64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}
