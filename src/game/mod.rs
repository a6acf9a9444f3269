//! Flappy Bird game.
//!
//! A square bird falls under constant gravity and jumps on key press. Pairs
//! of obstacles scroll in from the right with a gap the bird must fly
//! through, and each pair carries a coin worth one point. Touching an
//! obstacle, the ceiling or the floor ends the game until a restart.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
