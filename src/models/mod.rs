//! CPU scheduling domain models.
//!
//! Processes are identified by their index in the burst-time sequence and
//! all arrive at t=0. Nothing here outlives a single evaluation.
//!
//! | Type | Meaning |
//! |------|---------|
//! | Process | `(id, burst_time)` pair, ordered shortest-first |
//! | TimeSlice | One CPU grant `[start, end)` to a process |

mod process;
pub mod timeline;

pub use process::Process;
pub use timeline::TimeSlice;
