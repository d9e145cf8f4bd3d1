//! Random burst-time workloads.
//!
//! Generators take the RNG from the caller so runs are reproducible with
//! a seeded generator.
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_cpu_schedule::workload;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let bursts = workload::uniform_bursts(8, 1, 20, &mut rng).unwrap();
//! assert_eq!(bursts.len(), 8);
//! assert!(bursts.iter().all(|&b| (1..=20).contains(&b)));
//! ```

use rand::Rng;

use crate::validation::{ValidationError, ValidationErrorKind, ValidationResult};

/// Draws `count` burst times uniformly from `min..=max`.
pub fn uniform_bursts<R: Rng + ?Sized>(
    count: usize,
    min: i64,
    max: i64,
    rng: &mut R,
) -> ValidationResult<Vec<i64>> {
    let mut errors = Vec::new();
    if min < 0 {
        errors.push(invalid(format!("Minimum burst {min} is negative")));
    }
    if min > max {
        errors.push(invalid(format!("Empty burst range {min}..={max}")));
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok((0..count).map(|_| rng.random_range(min..=max)).collect())
}

/// Mix of short and long jobs: each burst is `short` with probability
/// `p_short`, otherwise `long`.
pub fn bimodal_bursts<R: Rng + ?Sized>(
    count: usize,
    p_short: f64,
    short: i64,
    long: i64,
    rng: &mut R,
) -> ValidationResult<Vec<i64>> {
    let mut errors = Vec::new();
    if !(0.0..=1.0).contains(&p_short) {
        errors.push(invalid(format!(
            "Short-job probability {p_short} is outside [0, 1]"
        )));
    }
    if short < 0 || long < 0 {
        errors.push(invalid(format!(
            "Burst lengths must be non-negative (short {short}, long {long})"
        )));
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok((0..count)
        .map(|_| if rng.random_bool(p_short) { short } else { long })
        .collect())
}

fn invalid(message: String) -> ValidationError {
    ValidationError::new(ValidationErrorKind::InvalidWorkload, message)
}
