//! Flappy Bird data structures.
//!
//! All positions are integer playfield units (the reference playfield is
//! 800x600). The renderer scales them to whatever terminal it has.

use crate::core::config::{ConfigError, GameConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in playfield units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Strict overlap test. Shared edges do not count and an empty
    /// rectangle never intersects anything.
    pub fn intersects(&self, other: &Bounds) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// The player-controlled square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bird {
    /// Left edge; never changes during a game.
    pub x: i32,
    /// Top edge (row 0 = ceiling).
    pub y: i32,
    /// Vertical velocity per tick (positive = downward).
    pub velocity: i32,
    pub size: i32,
}

impl Bird {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.size, self.size)
    }
}

/// Which half of an obstacle pair a rectangle is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Top,
    Bottom,
}

/// One half of a top/bottom obstacle pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub bounds: Bounds,
    pub kind: ObstacleKind,
}

/// Collectible worth one point. Drawn as a circle inscribed in `bounds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coin {
    pub bounds: Bounds,
}

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverCause {
    /// The bird hit an obstacle rectangle.
    Obstacle,
    /// The bird left the playfield through the ceiling or floor.
    OutOfBounds,
}

/// Everything that changes while playing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub bird: Bird,
    /// Spawn order, which is also left-to-right order.
    pub obstacles: Vec<Obstacle>,
    /// At most one coin is live at a time.
    pub coin: Option<Coin>,
    pub score: u32,
    pub game_over: Option<GameOverCause>,
    /// Monotonic time of the last spawn; `None` means a spawn is due now.
    pub last_spawn_ms: Option<u64>,
}

impl GameState {
    /// Fresh state: bird centred, nothing on screen, score zero.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            bird: Bird {
                x: config.bird_x(),
                y: config.bird_start_y(),
                velocity: 0,
                size: config.bird_size,
            },
            obstacles: Vec::new(),
            coin: None,
            score: 0,
            game_over: None,
            last_spawn_ms: None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }
}

/// A game: its configuration plus the mutable state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub config: GameConfig,
    pub state: GameState,
}

impl Default for FlappyGame {
    fn default() -> Self {
        Self::from_valid(GameConfig::default())
    }
}

impl FlappyGame {
    /// Create a new game, rejecting configs that cannot place gaps or coins.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: GameConfig) -> Self {
        let state = GameState::new(&config);
        Self { config, state }
    }

    /// Spawn an obstacle pair and a coin at the right edge with random
    /// gap and coin heights. Returns the gap's top edge.
    pub fn spawn_obstacle_pair<R: Rng>(&mut self, now_ms: u64, rng: &mut R) -> i32 {
        let gap_top = rng.gen_range(0..self.config.height - self.config.obstacle_gap);
        let coin_offset = rng.gen_range(0..self.config.obstacle_gap - self.config.coin_diameter);
        self.place_obstacle_pair(gap_top, coin_offset, now_ms);
        gap_top
    }

    /// Push a top/bottom pair whose gap starts at `gap_top`, plus a coin
    /// `coin_offset` units below the gap's top edge.
    pub fn place_obstacle_pair(&mut self, gap_top: i32, coin_offset: i32, now_ms: u64) {
        let c = &self.config;
        let x = c.width;
        let gap_bottom = gap_top + c.obstacle_gap;

        self.state.obstacles.push(Obstacle {
            bounds: Bounds::new(x, 0, c.obstacle_width, gap_top),
            kind: ObstacleKind::Top,
        });
        self.state.obstacles.push(Obstacle {
            bounds: Bounds::new(x, gap_bottom, c.obstacle_width, c.height - gap_bottom),
            kind: ObstacleKind::Bottom,
        });
        self.state.coin = Some(Coin {
            bounds: Bounds::new(
                x + c.obstacle_width / 2 - c.coin_diameter / 2,
                gap_top + coin_offset,
                c.coin_diameter,
                c.coin_diameter,
            ),
        });
        self.state.last_spawn_ms = Some(now_ms);
    }
}
