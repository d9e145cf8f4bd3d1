//! Batch evaluation: waiting → turnaround → KPI.
//!
//! # Algorithm
//!
//! 1. The policy computes waiting times (validating its inputs).
//! 2. Turnaround times are derived elementwise.
//! 3. KPIs summarize both sequences.

use serde::{Deserialize, Serialize};

use super::{calc_turn_around_time, ScheduleKpi};
use crate::policies::Policy;
use crate::validation::ValidationResult;

/// Quantum used when a request does not name one.
pub const DEFAULT_QUANTUM: i64 = 3;

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

/// Input container for evaluation.
///
/// Deserializes from JSON such as
/// `{"burst_times": [5, 15, 4, 3], "quantum": 3, "policy": "rr"}`.
/// `quantum` defaults to [`DEFAULT_QUANTUM`]; a missing `policy` means
/// every policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Burst time per process (index = process id).
    pub burst_times: Vec<i64>,
    /// Round Robin time slice.
    #[serde(default = "default_quantum")]
    pub quantum: i64,
    /// Policy to evaluate. `None` = all policies.
    #[serde(default)]
    pub policy: Option<Policy>,
}

impl ScheduleRequest {
    /// Creates a request for every policy with the default quantum.
    pub fn new(burst_times: Vec<i64>) -> Self {
        Self {
            burst_times,
            quantum: DEFAULT_QUANTUM,
            policy: None,
        }
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Restricts the request to a single policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Policies this request covers.
    pub fn policies(&self) -> Vec<Policy> {
        match self.policy {
            Some(policy) => vec![policy],
            None => Policy::ALL.to_vec(),
        }
    }

    /// Evaluates every covered policy.
    pub fn evaluate(&self) -> ValidationResult<Vec<ScheduleOutcome>> {
        self.policies()
            .into_iter()
            .map(|policy| evaluate(policy, &self.burst_times, self.quantum))
            .collect()
    }
}

/// Result of running one policy over a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Policy that produced the result.
    pub policy: Policy,
    /// Quantum the policy was given.
    pub quantum: i64,
    /// Input burst times.
    pub burst_times: Vec<i64>,
    /// Waiting time per process.
    pub waiting_times: Vec<i64>,
    /// Turnaround time per process.
    pub turnaround_times: Vec<i64>,
    /// Summary metrics.
    pub kpi: ScheduleKpi,
}

impl ScheduleOutcome {
    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.burst_times.len()
    }
}

/// Runs one policy over a batch.
///
/// # Example
/// ```
/// use u_cpu_schedule::policies::Policy;
/// use u_cpu_schedule::scheduler::evaluate;
///
/// let outcome = evaluate(Policy::Fcfs, &[5, 15, 4, 3], 3).unwrap();
/// assert_eq!(outcome.waiting_times, vec![0, 5, 20, 24]);
/// assert_eq!(outcome.turnaround_times, vec![5, 20, 24, 27]);
/// assert_eq!(outcome.kpi.makespan, 27);
/// ```
pub fn evaluate(
    policy: Policy,
    burst_times: &[i64],
    quantum: i64,
) -> ValidationResult<ScheduleOutcome> {
    log::debug!(
        "evaluating {} over {} processes (quantum {quantum})",
        policy.name(),
        burst_times.len()
    );

    let waiting_times = policy.calc_waiting_time(burst_times, quantum)?;
    let turnaround_times = calc_turn_around_time(burst_times, &waiting_times)?;
    let kpi = ScheduleKpi::calculate(burst_times, &waiting_times, &turnaround_times)?;

    Ok(ScheduleOutcome {
        policy,
        quantum,
        burst_times: burst_times.to_vec(),
        waiting_times,
        turnaround_times,
        kpi,
    })
}

/// Runs every policy over the same batch, in [`Policy::ALL`] order.
pub fn evaluate_all(
    burst_times: &[i64],
    quantum: i64,
) -> ValidationResult<Vec<ScheduleOutcome>> {
    Policy::ALL
        .iter()
        .map(|&policy| evaluate(policy, burst_times, quantum))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    const BURSTS: [i64; 4] = [5, 15, 4, 3];

    #[test]
    fn test_evaluate_all_scenario() {
        let outcomes = evaluate_all(&BURSTS, 3).unwrap();
        assert_eq!(outcomes.len(), 3);

        assert_eq!(outcomes[0].policy, Policy::Fcfs);
        assert_eq!(outcomes[0].waiting_times, vec![0, 5, 20, 24]);

        assert_eq!(outcomes[1].policy, Policy::Sjf);
        assert_eq!(outcomes[1].waiting_times, vec![7, 12, 3, 0]);
        assert_eq!(outcomes[1].turnaround_times, vec![12, 27, 7, 3]);
        assert!((outcomes[1].kpi.avg_waiting_time - 5.5).abs() < 1e-10);

        assert_eq!(outcomes[2].policy, Policy::RoundRobin);
        assert_eq!(outcomes[2].waiting_times, vec![9, 12, 14, 9]);
        assert_eq!(outcomes[2].turnaround_times, vec![14, 27, 18, 12]);
        assert!((outcomes[2].kpi.avg_turnaround_time - 17.75).abs() < 1e-10);

        assert!(outcomes.iter().all(|o| o.kpi.makespan == 27));
    }

    #[test]
    fn test_turnaround_is_waiting_plus_burst() {
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..10 {
            let bursts: Vec<i64> = (0..rng.random_range(0..20))
                .map(|_| rng.random_range(0..25))
                .collect();
            let quantum = rng.random_range(1..6);
            for outcome in evaluate_all(&bursts, quantum).unwrap() {
                for i in 0..bursts.len() {
                    assert_eq!(
                        outcome.turnaround_times[i],
                        outcome.waiting_times[i] + bursts[i]
                    );
                    assert!(outcome.waiting_times[i] >= 0);
                }
            }
        }
    }

    #[test]
    fn test_sjf_minimizes_average_wait() {
        let outcomes = evaluate_all(&[8, 1, 6, 2, 9, 3], 2).unwrap();
        let sjf = &outcomes[1].kpi;
        assert!(outcomes
            .iter()
            .all(|o| sjf.avg_waiting_time <= o.kpi.avg_waiting_time));
    }

    #[test]
    fn test_invalid_input_reported_once() {
        let errors = evaluate(Policy::RoundRobin, &[-1, 3], 0).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(evaluate_all(&[2, -5], 3).is_err());
    }

    #[test]
    fn test_evaluate_reports_total_overflow() {
        let half = i64::MAX / 2;
        let errors = evaluate(Policy::Fcfs, &[half, half, 0, 0], 1).unwrap_err();
        assert!(!errors.is_empty());
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::TimeOverflow));
    }

    #[test]
    fn test_request_defaults_from_json() {
        let request: ScheduleRequest =
            serde_json::from_str(r#"{"burst_times": [5, 15, 4, 3]}"#).unwrap();
        assert_eq!(request, ScheduleRequest::new(BURSTS.to_vec()));
        assert_eq!(request.quantum, DEFAULT_QUANTUM);
        assert_eq!(request.policies(), Policy::ALL.to_vec());
    }

    #[test]
    fn test_request_single_policy() {
        let json = r#"{"burst_times": [5, 15, 4, 3], "quantum": 4, "policy": "rr"}"#;
        let request: ScheduleRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.quantum, 4);
        let outcomes = request.evaluate().unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].policy, Policy::RoundRobin);
        assert_eq!(outcomes[0].quantum, 4);
    }

    #[test]
    fn test_request_builder() {
        let request = ScheduleRequest::new(vec![1, 2])
            .with_quantum(5)
            .with_policy(Policy::Sjf);
        assert_eq!(request.quantum, 5);
        assert_eq!(request.policies(), vec![Policy::Sjf]);
    }

    #[test]
    fn test_request_invalid_quantum_fails_for_all() {
        let errors = ScheduleRequest::new(vec![1, 2])
            .with_quantum(0)
            .evaluate()
            .unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveQuantum);
    }

    #[test]
    fn test_parallel_batches() {
        let batches: Vec<Vec<i64>> = (1..=4).map(|k| vec![k, 2 * k, 3 * k]).collect();
        let results: Vec<Vec<ScheduleOutcome>> = std::thread::scope(|s| {
            let handles: Vec<_> = batches
                .iter()
                .map(|b| s.spawn(move || evaluate_all(b, 2).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for (batch, outcomes) in batches.iter().zip(&results) {
            assert_eq!(outcomes, &evaluate_all(batch, 2).unwrap());
        }
    }
}
