//! Execution timeline model.
//!
//! A timeline is the ordered list of CPU grants a policy makes while
//! running a batch. It is recomputed per call and never stored.

use serde::{Deserialize, Serialize};

/// One contiguous interval of CPU time granted to a process.
///
/// Covers `[start, end)`. Zero-length slices are never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Process that held the CPU.
    pub process_id: usize,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl TimeSlice {
    /// Creates a new slice.
    pub fn new(process_id: usize, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length of the slice.
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Completion time of the last slice, 0 for an empty timeline.
pub fn makespan(timeline: &[TimeSlice]) -> i64 {
    timeline.iter().map(|s| s.end).max().unwrap_or(0)
}

/// Total CPU time granted to `process_id` across the timeline.
pub fn cpu_time_of(timeline: &[TimeSlice], process_id: usize) -> i64 {
    timeline
        .iter()
        .filter(|s| s.process_id == process_id)
        .map(TimeSlice::duration)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        assert_eq!(TimeSlice::new(0, 3, 7).duration(), 4);
    }

    #[test]
    fn test_makespan() {
        let timeline = vec![TimeSlice::new(0, 0, 3), TimeSlice::new(1, 3, 10)];
        assert_eq!(makespan(&timeline), 10);
        assert_eq!(makespan(&[]), 0);
    }

    #[test]
    fn test_cpu_time_of() {
        let timeline = vec![
            TimeSlice::new(0, 0, 3),
            TimeSlice::new(1, 3, 6),
            TimeSlice::new(0, 6, 8),
        ];
        assert_eq!(cpu_time_of(&timeline, 0), 5);
        assert_eq!(cpu_time_of(&timeline, 1), 3);
        assert_eq!(cpu_time_of(&timeline, 2), 0);
    }
}
