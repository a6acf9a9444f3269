//! Core game configuration, tick events and the game loop contract.

pub mod config;
pub mod constants;
pub mod game_loop;
pub mod tick;

pub use config::*;
pub use constants::*;
pub use game_loop::*;
pub use tick::*;
