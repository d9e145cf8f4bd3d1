//! Batch evaluation and KPIs.
//!
//! Combines a policy's waiting times with the turnaround calculator and
//! summary metrics.
//!
//! # KPI
//!
//! `ScheduleKpi` computes totals and averages of waiting and turnaround
//! time, the longest wait and the makespan.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2

mod kpi;
mod request;
mod turnaround;

pub use kpi::ScheduleKpi;
pub use request::{evaluate, evaluate_all, ScheduleOutcome, ScheduleRequest, DEFAULT_QUANTUM};
pub use turnaround::calc_turn_around_time;
