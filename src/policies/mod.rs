//! CPU scheduling policies.
//!
//! Each policy turns a burst-time sequence (process id = index) into a
//! waiting-time sequence of the same length. All processes arrive at t=0.
//!
//! | Policy | Preemptive | Order |
//! |--------|-----------|-------|
//! | FCFS | no | index |
//! | SJF | no | burst ascending, then id |
//! | Round Robin | yes (quantum) | cyclic index scan |
//!
//! The quantum is accepted by every policy so they share one signature;
//! only Round Robin reads it.
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::policies::Policy;
//!
//! let bursts = [5, 15, 4, 3];
//! let waiting = Policy::Sjf.calc_waiting_time(&bursts, 3).unwrap();
//! assert_eq!(waiting, vec![7, 12, 3, 0]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod fcfs;
pub mod round_robin;
pub mod sjf;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::TimeSlice;
use crate::validation::ValidationResult;

/// A scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive, ties broken by id.
    Sjf,
    /// Round Robin with a fixed time quantum.
    #[serde(alias = "rr")]
    RoundRobin,
}

impl Policy {
    /// Every policy, in presentation order.
    pub const ALL: [Policy; 3] = [Policy::Fcfs, Policy::Sjf, Policy::RoundRobin];

    /// Short name (e.g., "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::RoundRobin => "RR",
        }
    }

    /// Policy description.
    pub fn description(&self) -> &'static str {
        match self {
            Policy::Fcfs => "First-Come-First-Served",
            Policy::Sjf => "Shortest-Job-First",
            Policy::RoundRobin => "Round Robin",
        }
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }

    /// Computes per-process waiting times.
    ///
    /// `quantum` is ignored by FCFS and SJF.
    pub fn calc_waiting_time(
        &self,
        burst_times: &[i64],
        quantum: i64,
    ) -> ValidationResult<Vec<i64>> {
        match self {
            Policy::Fcfs => fcfs::calc_waiting_time(burst_times, quantum),
            Policy::Sjf => sjf::calc_waiting_time(burst_times, quantum),
            Policy::RoundRobin => round_robin::calc_waiting_time(burst_times, quantum),
        }
    }

    /// Computes the sequence of CPU grants the policy makes.
    pub fn timeline(
        &self,
        burst_times: &[i64],
        quantum: i64,
    ) -> ValidationResult<Vec<TimeSlice>> {
        match self {
            Policy::Fcfs => fcfs::timeline(burst_times, quantum),
            Policy::Sjf => sjf::timeline(burst_times, quantum),
            Policy::RoundRobin => round_robin::timeline(burst_times, quantum),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePolicyError {
    input: String,
}

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown scheduling policy '{}' (expected fcfs, sjf or rr)",
            self.input
        )
    }
}

impl std::error::Error for ParsePolicyError {}

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Policy::Fcfs),
            "sjf" | "spt" => Ok(Policy::Sjf),
            "rr" | "round-robin" | "round_robin" | "roundrobin" => Ok(Policy::RoundRobin),
            _ => Err(ParsePolicyError {
                input: s.to_string(),
            }),
        }
    }
}
