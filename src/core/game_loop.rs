//! Shared game loop trait for the terminal game and the headless simulator.
//!
//! Both drivers advance the game through this trait, so the interactive
//! binary and the simulator exercise exactly the same state transitions.

use crate::core::config::GameConfig;
use crate::core::tick::{TickEvent, TickInput};
use crate::game::types::GameState;
use rand::Rng;

/// Core game loop trait - implemented by the game engine.
pub trait GameLoop {
    /// Advance one fixed tick. `now_ms` is read from a monotonic clock.
    /// Returns what happened so the caller can play sounds and log.
    fn update(&mut self, input: TickInput, now_ms: u64, rng: &mut impl Rng) -> Vec<TickEvent>;

    /// Reset to the initial state. Safe to call at any time.
    fn restart(&mut self);

    /// Current game state (read-only), for rendering.
    fn state(&self) -> &GameState;

    /// Configuration the game was created with.
    fn config(&self) -> &GameConfig;

    /// Whether the game is waiting for a restart.
    fn is_game_over(&self) -> bool {
        self.state().is_game_over()
    }
}
