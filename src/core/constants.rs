// Playfield
pub const PLAYFIELD_WIDTH: i32 = 800;
pub const PLAYFIELD_HEIGHT: i32 = 600;

// Bird physics (per tick, integer Euler step)
pub const BIRD_SIZE: i32 = 40;
pub const GRAVITY: i32 = 1;
pub const JUMP_SPEED: i32 = -10;

// Obstacles and coins
pub const OBSTACLE_WIDTH: i32 = 60;
pub const OBSTACLE_GAP: i32 = 200;
pub const OBSTACLE_INTERVAL_MS: u64 = 1500;
pub const SCROLL_SPEED: i32 = 10;
pub const COIN_DIAMETER: i32 = 30;

// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 20;

// Files under ~/.flappy/
pub const DATA_DIR_NAME: &str = ".flappy";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "flappy.log";
pub const DEFAULT_SOUNDS_DIR: &str = "sounds";
