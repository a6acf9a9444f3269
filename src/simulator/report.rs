//! Simulation report generation.

use crate::game::types::GameOverCause;
use serde::Serialize;

/// How a single simulated game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunOutcome {
    Crashed(GameOverCause),
    TimedOut,
}

/// Statistics for one simulated game.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub score: u32,
    pub ticks: u64,
    pub jumps: u64,
    pub pairs_spawned: u64,
    pub coins_missed: u64,
    pub outcome: RunOutcome,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub avg_score: f64,
    pub max_score: u32,
    pub avg_ticks: f64,
    /// Coins collected / pairs spawned, across all runs.
    pub coin_rate: f64,
    pub obstacle_crashes: u32,
    pub bounds_crashes: u32,
    pub timeouts: u32,
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = (num_runs.max(1)) as f64;

        let count = |outcome: RunOutcome| runs.iter().filter(|r| r.outcome == outcome).count() as u32;
        let total_coins: u64 = runs.iter().map(|r| r.score as u64).sum();
        let total_pairs: u64 = runs.iter().map(|r| r.pairs_spawned).sum();

        Self {
            num_runs,
            avg_score: total_coins as f64 / divisor,
            max_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            avg_ticks: runs.iter().map(|r| r.ticks as f64).sum::<f64>() / divisor,
            coin_rate: if total_pairs > 0 {
                total_coins as f64 / total_pairs as f64
            } else {
                0.0
            },
            obstacle_crashes: count(RunOutcome::Crashed(GameOverCause::Obstacle)),
            bounds_crashes: count(RunOutcome::Crashed(GameOverCause::OutOfBounds)),
            timeouts: count(RunOutcome::TimedOut),
            run_stats: runs,
        }
    }

    /// Human-readable summary.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("Results\n");
        out.push_str("───────────────────────────────────────\n");
        out.push_str(&format!("  Runs:              {}\n", self.num_runs));
        out.push_str(&format!("  Average score:     {:.2}\n", self.avg_score));
        out.push_str(&format!("  Best score:        {}\n", self.max_score));
        out.push_str(&format!("  Average ticks:     {:.0}\n", self.avg_ticks));
        out.push_str(&format!("  Coin pickup rate:  {:.1}%\n", self.coin_rate * 100.0));
        out.push('\n');
        out.push_str("Endings\n");
        out.push_str("───────────────────────────────────────\n");
        out.push_str(&format!("  Hit obstacle:      {}\n", self.obstacle_crashes));
        out.push_str(&format!("  Left playfield:    {}\n", self.bounds_crashes));
        out.push_str(&format!("  Timed out:         {}\n", self.timeouts));
        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u32, ticks: u64, pairs: u64, outcome: RunOutcome) -> RunStats {
        RunStats {
            score,
            ticks,
            jumps: 0,
            pairs_spawned: pairs,
            coins_missed: pairs - score as u64,
            outcome,
        }
    }

    #[test]
    fn test_aggregates() {
        let report = SimReport::from_runs(vec![
            run(2, 100, 4, RunOutcome::Crashed(GameOverCause::Obstacle)),
            run(4, 300, 4, RunOutcome::Crashed(GameOverCause::OutOfBounds)),
            run(0, 200, 0, RunOutcome::TimedOut),
        ]);

        assert_eq!(report.num_runs, 3);
        assert!((report.avg_score - 2.0).abs() < f64::EPSILON);
        assert_eq!(report.max_score, 4);
        assert!((report.avg_ticks - 200.0).abs() < f64::EPSILON);
        assert!((report.coin_rate - 0.75).abs() < f64::EPSILON);
        assert_eq!(report.obstacle_crashes, 1);
        assert_eq!(report.bounds_crashes, 1);
        assert_eq!(report.timeouts, 1);
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.max_score, 0);
        assert!(report.to_text().contains("Runs:              0"));
    }

    #[test]
    fn test_json_skips_run_details() {
        let report = SimReport::from_runs(vec![run(1, 10, 1, RunOutcome::TimedOut)]);
        let json = report.to_json();
        assert!(json.contains("\"max_score\": 1"));
        assert!(!json.contains("run_stats"));
    }
}
