//! Plain-text rendering of evaluation results.
//!
//! ```text
//! Policy: FCFS (First-Come-First-Served)
//! Process  Burst Time  Waiting Time  Turnaround Time
//! =======  ==========  ============  ===============
//! 0        5           0             5
//! ...
//!
//! Average waiting time = 12.25
//! Average turnaround time = 19.00
//! ```

use std::fmt;

use crate::models::TimeSlice;
use crate::scheduler::ScheduleOutcome;

const SEPARATOR: &str = "=======  ==========  ============  ===============";

/// Table view of one [`ScheduleOutcome`], optionally with its timeline.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    outcome: &'a ScheduleOutcome,
    timeline: Option<&'a [TimeSlice]>,
}

impl<'a> Report<'a> {
    /// Creates a report for an outcome.
    pub fn new(outcome: &'a ScheduleOutcome) -> Self {
        Self {
            outcome,
            timeline: None,
        }
    }

    /// Appends the execution timeline to the report.
    pub fn with_timeline(mut self, timeline: &'a [TimeSlice]) -> Self {
        self.timeline = Some(timeline);
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.outcome;
        let policy = outcome.policy;

        if policy.is_preemptive() {
            writeln!(
                f,
                "Policy: {} ({}, quantum {})",
                policy.name(),
                policy.description(),
                outcome.quantum
            )?;
        } else {
            writeln!(f, "Policy: {} ({})", policy.name(), policy.description())?;
        }

        writeln!(
            f,
            "{:<9}{:<12}{:<14}{}",
            "Process", "Burst Time", "Waiting Time", "Turnaround Time"
        )?;
        writeln!(f, "{SEPARATOR}")?;
        for id in 0..outcome.process_count() {
            writeln!(
                f,
                "{:<9}{:<12}{:<14}{}",
                id, outcome.burst_times[id], outcome.waiting_times[id], outcome.turnaround_times[id]
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Average waiting time = {:.2}", outcome.kpi.avg_waiting_time)?;
        write!(
            f,
            "Average turnaround time = {:.2}",
            outcome.kpi.avg_turnaround_time
        )?;

        if let Some(timeline) = self.timeline {
            write!(f, "\nTimeline: {}", render_timeline(timeline))?;
        }
        Ok(())
    }
}

/// Renders slices as `P0[0,3) P1[3,6) ...`; `(idle)` when empty.
pub fn render_timeline(timeline: &[TimeSlice]) -> String {
    if timeline.is_empty() {
        return "(idle)".to_string();
    }
    timeline
        .iter()
        .map(|s| format!("P{}[{},{})", s.process_id, s.start, s.end))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::Policy;
    use crate::scheduler::evaluate;

    #[test]
    fn test_fcfs_table() {
        let outcome = evaluate(Policy::Fcfs, &[5, 15, 4, 3], 3).unwrap();
        let expected = "\
Policy: FCFS (First-Come-First-Served)
Process  Burst Time  Waiting Time  Turnaround Time
=======  ==========  ============  ===============
0        5           0             5
1        15          5             20
2        4           20            24
3        3           24            27

Average waiting time = 12.25
Average turnaround time = 19.00";
        assert_eq!(Report::new(&outcome).to_string(), expected);
    }

    #[test]
    fn test_round_robin_header_names_quantum() {
        let outcome = evaluate(Policy::RoundRobin, &[5, 15, 4, 3], 3).unwrap();
        let text = Report::new(&outcome).to_string();
        assert!(text.starts_with("Policy: RR (Round Robin, quantum 3)\n"));
        assert!(text.contains("Average waiting time = 11.00"));
    }

    #[test]
    fn test_empty_batch() {
        let outcome = evaluate(Policy::Sjf, &[], 3).unwrap();
        let text = Report::new(&outcome).to_string();
        assert!(text.contains(SEPARATOR));
        assert!(text.contains("Average waiting time = 0.00"));
    }

    #[test]
    fn test_with_timeline() {
        let outcome = evaluate(Policy::Sjf, &[5, 0, 2], 3).unwrap();
        let timeline = Policy::Sjf.timeline(&[5, 0, 2], 3).unwrap();
        let text = Report::new(&outcome).with_timeline(&timeline).to_string();
        assert!(text.ends_with("\nTimeline: P2[0,2) P0[2,7)"));
    }

    #[test]
    fn test_render_empty_timeline() {
        assert_eq!(render_timeline(&[]), "(idle)");
    }
}
