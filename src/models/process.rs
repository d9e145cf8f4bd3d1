//! Process model.
//!
//! A process is identified by its zero-based position in the burst-time
//! sequence. All processes arrive at t=0, so the burst time is the only
//! attribute that distinguishes them.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A CPU process awaiting execution.
///
/// # Ordering
/// `Ord` is the shortest-job-first key: burst time ascending, then id
/// ascending. Equal bursts always resolve by id, independent of the
/// container the processes are held in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Index of the process in the input sequence.
    pub id: usize,
    /// Total CPU time required to run to completion.
    pub burst_time: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: usize, burst_time: i64) -> Self {
        Self { id, burst_time }
    }

    /// Builds one process per burst time, ids taken from positions.
    pub fn from_bursts(burst_times: &[i64]) -> Vec<Self> {
        burst_times
            .iter()
            .enumerate()
            .map(|(id, &burst_time)| Self::new(id, burst_time))
            .collect()
    }

    /// Whether the process needs no CPU time at all.
    pub fn is_finished(&self) -> bool {
        self.burst_time == 0
    }
}

impl Ord for Process {
    fn cmp(&self, other: &Self) -> Ordering {
        self.burst_time
            .cmp(&other.burst_time)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Process {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
