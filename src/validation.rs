//! Input validation for scheduling calls.
//!
//! Every public operation checks its inputs here before building any
//! algorithm state (heaps, remaining-time arrays). Detects:
//! - Negative burst times
//! - Non-positive Round Robin quanta
//! - Index-misaligned burst / waiting sequences
//! - Total burst time exceeding the `i64` clock
//!
//! All problems in an input are collected and reported together.
//! An empty burst sequence is valid.

use std::fmt;

/// Validation result.
///
/// `Ok(T)` on success, `Err(errors)` with every detected issue otherwise.
pub type ValidationResult<T = ()> = Result<T, Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process has a burst time below zero.
    NegativeBurstTime,
    /// Round Robin was given a quantum of zero or less.
    NonPositiveQuantum,
    /// Two sequences that must be index-aligned differ in length.
    LengthMismatch,
    /// The sum of all burst times does not fit in the clock type.
    TimeOverflow,
    /// Workload generator parameters are inconsistent.
    InvalidWorkload,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a burst-time sequence.
///
/// Checks:
/// 1. Every burst time is non-negative
/// 2. The total burst time fits in `i64` (so every simulated clock does)
pub fn validate_burst_times(burst_times: &[i64]) -> ValidationResult {
    let mut errors = Vec::new();

    for (id, &burst) in burst_times.iter().enumerate() {
        if burst < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeBurstTime,
                format!("Process {id} has negative burst time {burst}"),
            ));
        }
    }

    // Only meaningful once all values are non-negative
    if errors.is_empty()
        && burst_times
            .iter()
            .try_fold(0i64, |acc, &b| acc.checked_add(b))
            .is_none()
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!(
                "Total burst time of {} processes overflows the clock",
                burst_times.len()
            ),
        ));
    }

    into_result(errors)
}

/// Validates a Round Robin time quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum > 0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Round Robin quantum must be positive, got {quantum}"),
        )])
    }
}

/// Validates inputs for Round Robin: burst times and quantum together.
pub fn validate_round_robin(burst_times: &[i64], quantum: i64) -> ValidationResult {
    let mut errors = validate_burst_times(burst_times).err().unwrap_or_default();
    if let Err(quantum_errors) = validate_quantum(quantum) {
        errors.extend(quantum_errors);
    }
    into_result(errors)
}

/// Validates that a derived sequence is index-aligned with the burst times.
pub fn validate_aligned(burst_times: &[i64], other: &[i64], other_name: &str) -> ValidationResult {
    if burst_times.len() == other.len() {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "Expected {} {other_name} (one per process), got {}",
                burst_times.len(),
                other.len()
            ),
        )])
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
