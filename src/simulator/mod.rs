//! Monte Carlo bean machine simulator.
//!
//! Drops many beans through a `Machine` per run and aggregates the landing
//! slots into a report:
//! - Slot histogram and per-run averages
//! - Mean and variance of the landing slot
//! - Skill level histogram in skill mode

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run, RunStats};
