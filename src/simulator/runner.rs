//! Simulation runner driving [`FlappyGame`] through the [`GameLoop`] trait.
//!
//! Time is virtual: tick `n` happens at `n * tick_interval_ms`, so a run is
//! fully determined by its seed.

use super::autopilot::should_jump;
use super::config::SimConfig;
use super::report::{RunOutcome, RunStats, SimReport};
use crate::core::game_loop::GameLoop;
use crate::core::tick::{TickEvent, TickInput};
use crate::game::types::FlappyGame;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    let step = progress_step(config.num_runs);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(run_seed(seed, run_idx)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);
        if config.verbosity == 1 && (run_idx + 1) % step == 0 {
            println!("  ... {}/{} runs", run_idx + 1, config.num_runs);
        }
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - score {}, ticks {}, {:?}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.ticks,
                stats.outcome
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

/// Seed for run `run_idx`; wraps so any `--seed` value is accepted.
fn run_seed(seed: u64, run_idx: u32) -> u64 {
    seed.wrapping_add(run_idx as u64)
}

/// Runs between progress lines at verbosity 1 (about ten lines per simulation).
fn progress_step(num_runs: u32) -> u32 {
    (num_runs / 10).max(1)
}

/// Play one game to its end (or the tick limit).
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut game = match FlappyGame::new(config.game.clone()) {
        Ok(game) => game,
        Err(e) => {
            tracing::warn!(error = %e, "invalid simulator game config, using defaults");
            FlappyGame::default()
        }
    };
    let tick_ms = game.config().tick_interval_ms;

    let mut stats = RunStats {
        score: 0,
        ticks: 0,
        jumps: 0,
        pairs_spawned: 0,
        coins_missed: 0,
        outcome: RunOutcome::TimedOut,
    };

    while stats.ticks < config.max_ticks_per_run {
        let input = TickInput {
            jump: should_jump(&game),
            restart: false,
        };
        let now_ms = stats.ticks * tick_ms;
        let events = game.update(input, now_ms, rng);
        stats.ticks += 1;

        for event in &events {
            match event {
                TickEvent::PlaySound(crate::audio::SoundCue::Jump) => stats.jumps += 1,
                TickEvent::ObstacleSpawned { .. } => stats.pairs_spawned += 1,
                TickEvent::CoinMissed => stats.coins_missed += 1,
                TickEvent::CoinCollected { score } => stats.score = *score,
                TickEvent::GameOver { cause, score } => {
                    stats.score = *score;
                    stats.outcome = RunOutcome::Crashed(*cause);
                }
                _ => {}
            }
        }

        if game.is_game_over() {
            break;
        }
    }

    stats
}
