//! Integration test: headless simulator

use flappy::simulator::{run_simulation, simulate_single_run, RunOutcome, SimConfig};
use flappy::GameConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_simulation_report_counts_every_run() {
    let report = run_simulation(&SimConfig::quick_test(42));
    assert_eq!(report.num_runs, 5);
    assert_eq!(report.run_stats.len(), 5);
    assert_eq!(
        report.obstacle_crashes + report.bounds_crashes + report.timeouts,
        5
    );
    assert!(report.max_score as f64 >= report.avg_score);
}

#[test]
fn test_autopilot_outlives_idle_bird() {
    // An idle bird hits the floor on its 24th tick.
    let config = SimConfig::quick_test(3);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let stats = simulate_single_run(&config, &mut rng);
    assert!(stats.ticks > 24);
    assert!(stats.jumps > 0);
}

#[test]
fn test_score_never_exceeds_spawned_pairs() {
    let report = run_simulation(&SimConfig::quick_test(77));
    for run in &report.run_stats {
        assert!(run.score as u64 <= run.pairs_spawned);
        assert!(run.score as u64 + run.coins_missed <= run.pairs_spawned);
    }
}

#[test]
fn test_invalid_game_config_falls_back_to_defaults() {
    let config = SimConfig {
        game: GameConfig {
            obstacle_gap: 10_000,
            ..Default::default()
        },
        max_ticks_per_run: 5,
        ..SimConfig::quick_test(1)
    };
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let stats = simulate_single_run(&config, &mut rng);
    assert_eq!(stats.ticks, 5);
    assert_eq!(stats.outcome, RunOutcome::TimedOut);
}
