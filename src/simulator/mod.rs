//! Headless simulator for tuning and regression checks.
//!
//! Plays many games with a simple autopilot against the same [`GameLoop`]
//! the terminal game uses, on a virtual clock, and aggregates the results.
//!
//! [`GameLoop`]: crate::core::game_loop::GameLoop

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::should_jump;
pub use config::SimConfig;
pub use report::{RunOutcome, RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
