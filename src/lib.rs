//! Flappy - terminal Flappy Bird with coins.
//!
//! This library exposes the game logic for testing, the headless simulator
//! and the terminal binary.

pub mod audio;
pub mod core;
pub mod game;
pub mod input;
pub mod simulator;
pub mod utils;

pub use crate::core::config::GameConfig;
pub use crate::core::constants::*;
pub use crate::core::game_loop::GameLoop;
pub use crate::core::tick::{TickEvent, TickInput};
pub use game::types::{FlappyGame, GameOverCause, GameState};
