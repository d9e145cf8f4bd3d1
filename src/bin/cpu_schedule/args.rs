//! Command-line argument parsing.

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::{ArgAction, Parser};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use u_cpu_schedule::policies::{ParsePolicyError, Policy};
use u_cpu_schedule::scheduler::{ScheduleRequest, DEFAULT_QUANTUM};
use u_cpu_schedule::workload;

use crate::validation_failure;

/// Burst times used when none are given.
pub const DEMO_BURST_TIMES: [i64; 4] = [5, 15, 4, 3];

/// Range random workloads draw from.
const RANDOM_BURST_RANGE: (i64, i64) = (1, 20);

/// CPU scheduling metrics
#[derive(Parser, Debug)]
#[command(name = "cpu-schedule")]
#[command(about = "Waiting and turnaround times under FCFS, SJF and Round Robin")]
pub struct ScheduleArgs {
    /// Burst times, comma separated; the position is the process id
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub bursts: Vec<i64>,

    /// Round Robin time quantum
    #[arg(short, long, default_value_t = DEFAULT_QUANTUM, allow_hyphen_values = true)]
    pub quantum: i64,

    /// Policy to run: fcfs, sjf, rr or all
    #[arg(short, long, default_value = "all")]
    pub policy: PolicySelection,

    /// JSON request file ({"burst_times": [...], "quantum": N, "policy": "..."});
    /// the file supplies the quantum and policy too
    #[arg(long, conflicts_with_all = ["bursts", "random", "quantum", "policy"])]
    pub input: Option<PathBuf>,

    /// Generate this many random burst times instead
    #[arg(long, conflicts_with = "bursts")]
    pub random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Print the execution timeline under each table
    #[arg(long)]
    pub timeline: bool,

    /// Emit JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Which policies to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicySelection {
    All,
    Only(Policy),
}

impl FromStr for PolicySelection {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(PolicySelection::All)
        } else {
            s.parse().map(PolicySelection::Only)
        }
    }
}

impl ScheduleArgs {
    /// Builds the request from a file, a random workload or the flags.
    pub fn build_request(&self) -> anyhow::Result<ScheduleRequest> {
        if let Some(path) = &self.input {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading request file {}", path.display()))?;
            let request = serde_json::from_str(&text)
                .with_context(|| format!("parsing request file {}", path.display()))?;
            return Ok(request);
        }

        let burst_times = if let Some(count) = self.random {
            let mut rng = SmallRng::seed_from_u64(self.seed);
            let (min, max) = RANDOM_BURST_RANGE;
            workload::uniform_bursts(count, min, max, &mut rng).map_err(validation_failure)?
        } else if self.bursts.is_empty() {
            DEMO_BURST_TIMES.to_vec()
        } else {
            self.bursts.clone()
        };

        let request = ScheduleRequest::new(burst_times).with_quantum(self.quantum);
        Ok(match self.policy {
            PolicySelection::All => request,
            PolicySelection::Only(policy) => request.with_policy(policy),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> ScheduleArgs {
        ScheduleArgs::try_parse_from(std::iter::once("cpu-schedule").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults_use_demo_batch() {
        let request = parse(&[]).build_request().unwrap();
        assert_eq!(request.burst_times, DEMO_BURST_TIMES.to_vec());
        assert_eq!(request.quantum, DEFAULT_QUANTUM);
        assert_eq!(request.policy, None);
    }

    #[test]
    fn test_explicit_bursts_and_policy() {
        let request = parse(&["--bursts", "4,2,7", "-q", "2", "-p", "rr"])
            .build_request()
            .unwrap();
        assert_eq!(request.burst_times, vec![4, 2, 7]);
        assert_eq!(request.quantum, 2);
        assert_eq!(request.policy, Some(Policy::RoundRobin));
    }

    #[test]
    fn test_random_is_seeded() {
        let a = parse(&["--random", "6", "--seed", "9"]).build_request().unwrap();
        let b = parse(&["--random", "6", "--seed", "9"]).build_request().unwrap();
        assert_eq!(a.burst_times.len(), 6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_bad_policy_rejected() {
        let result = ScheduleArgs::try_parse_from(["cpu-schedule", "--policy", "lottery"]);
        assert!(result.is_err());
    }

    fn request_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_input_file_request() {
        let file = request_file(r#"{"burst_times": [4, 2], "quantum": 5, "policy": "sjf"}"#);
        let path = file.path().to_str().unwrap();
        let request = parse(&["--input", path]).build_request().unwrap();
        assert_eq!(request.burst_times, vec![4, 2]);
        assert_eq!(request.quantum, 5);
        assert_eq!(request.policy, Some(Policy::Sjf));
    }

    #[test]
    fn test_input_file_defaults() {
        let file = request_file(r#"{"burst_times": [1, 2, 3]}"#);
        let path = file.path().to_str().unwrap();
        let request = parse(&["--input", path]).build_request().unwrap();
        assert_eq!(request, ScheduleRequest::new(vec![1, 2, 3]));
    }

    #[test]
    fn test_malformed_input_file() {
        let file = request_file(r#"{"burst_times": [1, "two"]}"#);
        let path = file.path().to_str().unwrap();
        let err = parse(&["--input", path]).build_request().unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("parsing request file"));
        assert!(message.contains(path));
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let path = missing.to_str().unwrap();
        let err = parse(&["--input", path]).build_request().unwrap_err();
        assert!(format!("{err:#}").contains("reading request file"));
    }

    #[test]
    fn test_input_conflicts_with_flags() {
        for extra in [["-q", "4"], ["-p", "rr"], ["--bursts", "1,2"], ["--random", "3"]] {
            let argv = ["cpu-schedule", "--input", "request.json", extra[0], extra[1]];
            assert!(ScheduleArgs::try_parse_from(argv).is_err(), "{extra:?}");
        }
    }

    #[test]
    fn test_verbosity_counts() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
    }
}
