//! Turnaround time calculation.
//!
//! With every process arriving at t=0, turnaround (arrival to completion)
//! is simply burst time plus waiting time.

use crate::validation::{validate_aligned, ValidationError, ValidationErrorKind, ValidationResult};

/// Computes `burst_times[i] + waiting_times[i]` for every process.
///
/// Fails with `LengthMismatch` if the sequences are not index-aligned.
///
/// # Example
/// ```
/// use u_cpu_schedule::scheduler::calc_turn_around_time;
///
/// let turnaround = calc_turn_around_time(&[5, 15, 4, 3], &[0, 5, 20, 24]).unwrap();
/// assert_eq!(turnaround, vec![5, 20, 24, 27]);
/// ```
pub fn calc_turn_around_time(
    burst_times: &[i64],
    waiting_times: &[i64],
) -> ValidationResult<Vec<i64>> {
    validate_aligned(burst_times, waiting_times, "waiting times")?;

    let mut errors = Vec::new();
    let turnaround_times: Vec<i64> = burst_times
        .iter()
        .zip(waiting_times)
        .enumerate()
        .map(|(id, (&burst, &waiting))| {
            burst.checked_add(waiting).unwrap_or_else(|| {
                errors.push(ValidationError::new(
                    ValidationErrorKind::TimeOverflow,
                    format!("Turnaround of process {id} overflows ({burst} + {waiting})"),
                ));
                0
            })
        })
        .collect();

    if errors.is_empty() {
        Ok(turnaround_times)
    } else {
        Err(errors)
    }
}
