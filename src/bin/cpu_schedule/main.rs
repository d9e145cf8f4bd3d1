//! `cpu-schedule`: prints waiting and turnaround times for a batch of
//! processes under FCFS, SJF and Round Robin.
//!
//! ```text
//! cpu-schedule                           # demo batch 5,15,4,3 with quantum 3
//! cpu-schedule --bursts 8,1,6 -p sjf
//! cpu-schedule --random 10 --seed 7 --timeline
//! cpu-schedule --input request.json --json
//! ```

mod args;
mod logger;

use anyhow::anyhow;
use clap::Parser;
use serde::Serialize;
use u_cpu_schedule::models::TimeSlice;
use u_cpu_schedule::report::Report;
use u_cpu_schedule::scheduler::{ScheduleOutcome, ScheduleRequest};
use u_cpu_schedule::validation::ValidationError;

use args::ScheduleArgs;

#[derive(Serialize)]
struct JsonOutcome<'a> {
    #[serde(flatten)]
    outcome: &'a ScheduleOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeline: Option<Vec<TimeSlice>>,
}

fn main() -> anyhow::Result<()> {
    let args = ScheduleArgs::parse();
    logger::init(args.verbose).map_err(|e| anyhow!("installing logger: {e}"))?;

    let request = args.build_request()?;
    log::info!(
        "{} processes, quantum {}, policies {:?}",
        request.burst_times.len(),
        request.quantum,
        request.policies()
    );

    let outcomes = request.evaluate().map_err(validation_failure)?;
    let timelines = if args.timeline {
        Some(timelines_for(&request, &outcomes)?)
    } else {
        None
    };

    if args.json {
        let rendered: Vec<JsonOutcome> = outcomes
            .iter()
            .enumerate()
            .map(|(i, outcome)| JsonOutcome {
                outcome,
                timeline: timelines.as_ref().map(|t| t[i].clone()),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rendered)?);
        return Ok(());
    }

    for (i, outcome) in outcomes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let report = Report::new(outcome);
        match &timelines {
            Some(t) => println!("{}", report.with_timeline(&t[i])),
            None => println!("{report}"),
        }
    }
    Ok(())
}

fn timelines_for(
    request: &ScheduleRequest,
    outcomes: &[ScheduleOutcome],
) -> anyhow::Result<Vec<Vec<TimeSlice>>> {
    outcomes
        .iter()
        .map(|o| {
            o.policy
                .timeline(&request.burst_times, request.quantum)
                .map_err(validation_failure)
        })
        .collect()
}

/// Joins validation errors into one reportable error.
pub(crate) fn validation_failure(errors: Vec<ValidationError>) -> anyhow::Error {
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    anyhow!("invalid input: {}", messages.join("; "))
}
