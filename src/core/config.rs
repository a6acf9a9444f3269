//! Tunable game configuration.
//!
//! Every constant the game loop reads lives in [`GameConfig`]. The defaults
//! reproduce the reference 800x600 playfield; a JSON file in `~/.flappy/` can
//! override any subset of fields.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A size, speed or interval that must be strictly positive is not.
    #[error("'{field}' must be positive, got {value}")]
    NonPositive { field: &'static str, value: i64 },

    #[error("obstacle gap {gap} must be smaller than playfield height {height}")]
    GapTooLarge { gap: i32, height: i32 },

    #[error("coin diameter {diameter} must be smaller than obstacle gap {gap}")]
    CoinTooLarge { diameter: i32, gap: i32 },

    #[error("bird size {size} does not fit a {width}x{height} playfield")]
    BirdTooLarge { size: i32, width: i32, height: i32 },
}

/// All tuning constants for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub bird_size: i32,
    /// Velocity added every tick (positive = downward).
    pub gravity: i32,
    /// Velocity assigned on jump (negative = upward).
    pub jump_speed: i32,
    pub obstacle_width: i32,
    pub obstacle_gap: i32,
    /// Minimum milliseconds between two obstacle spawns.
    pub obstacle_interval_ms: u64,
    /// Leftward movement of obstacles and coins per tick.
    pub scroll_speed: i32,
    pub coin_diameter: i32,
    pub tick_interval_ms: u64,
    /// Directory holding `jump.wav` and `coin.wav`.
    pub sounds_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            bird_size: BIRD_SIZE,
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_gap: OBSTACLE_GAP,
            obstacle_interval_ms: OBSTACLE_INTERVAL_MS,
            scroll_speed: SCROLL_SPEED,
            coin_diameter: COIN_DIAMETER,
            tick_interval_ms: TICK_INTERVAL_MS,
            sounds_dir: PathBuf::from(DEFAULT_SOUNDS_DIR),
        }
    }
}

impl GameConfig {
    /// Fixed horizontal position of the bird's left edge.
    pub fn bird_x(&self) -> i32 {
        self.width / 4 - self.bird_size / 2
    }

    /// Starting (and restart) vertical position of the bird.
    pub fn bird_start_y(&self) -> i32 {
        self.height / 2
    }

    /// Check that the geometry leaves room for random gap and coin placement.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive: [(&'static str, i64); 8] = [
            ("width", self.width as i64),
            ("height", self.height as i64),
            ("bird_size", self.bird_size as i64),
            ("obstacle_width", self.obstacle_width as i64),
            ("obstacle_gap", self.obstacle_gap as i64),
            ("scroll_speed", self.scroll_speed as i64),
            ("coin_diameter", self.coin_diameter as i64),
            ("tick_interval_ms", self.tick_interval_ms as i64),
        ];
        if let Some(&(field, value)) = positive.iter().find(|(_, v)| *v <= 0) {
            return Err(ConfigError::NonPositive { field, value });
        }

        if self.obstacle_gap >= self.height {
            return Err(ConfigError::GapTooLarge {
                gap: self.obstacle_gap,
                height: self.height,
            });
        }
        if self.coin_diameter >= self.obstacle_gap {
            return Err(ConfigError::CoinTooLarge {
                diameter: self.coin_diameter,
                gap: self.obstacle_gap,
            });
        }
        if self.bird_size >= self.height || self.bird_x() < 0 {
            return Err(ConfigError::BirdTooLarge {
                size: self.bird_size,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Load a config file. Returns `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Load a config file, falling back to defaults on any problem.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(Some(config)) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!(error = %e, "ignoring config file, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.bird_x(), 180);
        assert_eq!(config.bird_start_y(), 300);
    }

    #[test]
    fn test_gap_must_fit_playfield() {
        let config = GameConfig {
            obstacle_gap: 600,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GapTooLarge { gap: 600, height: 600 })
        ));
    }

    #[test]
    fn test_coin_must_fit_gap() {
        let config = GameConfig {
            coin_diameter: 200,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CoinTooLarge { .. })
        ));
    }

    #[test]
    fn test_zero_scroll_speed_rejected() {
        let config = GameConfig {
            scroll_speed: 0,
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::NonPositive { field, value }) => {
                assert_eq!(field, "scroll_speed");
                assert_eq!(value, 0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"gravity": 2}"#).unwrap();
        assert_eq!(config.gravity, 2);
        assert_eq!(config.jump_speed, JUMP_SPEED);
        assert_eq!(config.obstacle_gap, OBSTACLE_GAP);
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let path = std::env::temp_dir().join("flappy_config_missing_12345.json");
        let _ = fs::remove_file(&path);
        assert!(GameConfig::load(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_malformed_file_falls_back() {
        let path = std::env::temp_dir().join("flappy_config_malformed_test.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
        assert_eq!(GameConfig::load_or_default(&path), GameConfig::default());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_invalid_geometry_falls_back() {
        let path = std::env::temp_dir().join("flappy_config_invalid_test.json");
        fs::write(&path, r#"{"obstacle_gap": 900}"#).unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::GapTooLarge { .. })
        ));
        assert_eq!(GameConfig::load_or_default(&path), GameConfig::default());
        fs::remove_file(path).ok();
    }
}
