//! Events produced by a single game tick.
//!
//! The game loop never performs I/O itself. Everything the outside world
//! should react to (sounds, log lines) is returned as a [`TickEvent`] and
//! handled by the presentation layer.

use crate::audio::SoundCue;
use crate::game::types::GameOverCause;

/// A single event produced by a game tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// A sound should be played (fire-and-forget).
    PlaySound(SoundCue),

    /// A new obstacle pair and coin entered at the right edge.
    ObstacleSpawned { gap_top: i32 },

    /// The bird picked up the coin.
    CoinCollected { score: u32 },

    /// The coin scrolled off the left edge without being collected.
    CoinMissed,

    /// The bird crashed this tick.
    GameOver { cause: GameOverCause, score: u32 },

    /// A restart request reset the game.
    Restarted,
}

/// Edge-triggered intents gathered between two ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// A jump key was pressed since the previous tick.
    pub jump: bool,
    /// The restart key was pressed since the previous tick.
    pub restart: bool,
}

impl TickInput {
    pub const NONE: TickInput = TickInput {
        jump: false,
        restart: false,
    };
    pub const JUMP: TickInput = TickInput {
        jump: true,
        restart: false,
    };
    pub const RESTART: TickInput = TickInput {
        jump: false,
        restart: true,
    };
}
