//! Simulation configuration.

use crate::core::config::GameConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Ticks after which a still-running game counts as timed out
    pub max_ticks_per_run: u64,

    /// Game tuning shared by every run
    pub game: GameConfig,

    /// Log verbosity (0 = silent, 1 = progress every tenth of the runs, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            // 10 minutes of play at 20ms per tick
            max_ticks_per_run: 30_000,
            game: GameConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small deterministic config for tests.
    pub fn quick_test(seed: u64) -> Self {
        Self {
            num_runs: 5,
            seed: Some(seed),
            max_ticks_per_run: 2_000,
            verbosity: 0,
            ..Default::default()
        }
    }
}
