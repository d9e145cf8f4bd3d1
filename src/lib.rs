//! CPU scheduling metrics for batches of processes.
//!
//! Computes per-process waiting and turnaround times under the classical
//! single-CPU disciplines. Every process arrives at t=0 and is described
//! only by its burst time; its id is its index in the input.
//!
//! # Modules
//!
//! - **`policies`**: FCFS, SJF and Round Robin waiting-time algorithms and
//!   execution timelines, selected through the `Policy` enum
//! - **`scheduler`**: Turnaround calculation, KPIs and batch evaluation
//! - **`models`**: `Process` and `TimeSlice`
//! - **`validation`**: Input checks shared by every operation
//! - **`report`**: Plain-text tables
//! - **`workload`**: Random burst-time generators
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::policies::Policy;
//! use u_cpu_schedule::scheduler::calc_turn_around_time;
//!
//! let bursts = [5, 15, 4, 3];
//! let waiting = Policy::RoundRobin.calc_waiting_time(&bursts, 3).unwrap();
//! let turnaround = calc_turn_around_time(&bursts, &waiting).unwrap();
//! assert_eq!(waiting, vec![9, 12, 14, 9]);
//! assert_eq!(turnaround, vec![14, 27, 18, 12]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod models;
pub mod policies;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;
