//! Tunable game constants.
//!
//! Every value has a default matching the stock game, so a TOML file only
//! needs the keys it wants to change.

use std::path::Path;

use serde::Deserialize;

/// Shortest weapon fire interval accepted, in seconds.
pub const MIN_FIRE_INTERVAL: f32 = 0.001;

/// Largest window extent accepted, in pixels.
pub const MAX_WINDOW_EXTENT: u32 = 1 << 20;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Pixel size of a sprite, as the asset layer would report it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct SpriteSize {
    pub width: u32,
    pub height: u32,
}

impl SpriteSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Half the width, rounded down to a whole pixel.
    pub fn half_width(&self) -> f32 {
        (self.width / 2) as f32
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,

    /// Pixels per second along each pressed axis.
    pub player_speed: f32,
    pub monster_speed: f32,

    pub player_max_health: i32,

    /// Health the player loses per frame for each monster it touches.
    pub monster_damage: i32,
    /// One-off hit a monster lands when its attack cooldown has run out.
    pub monster_attack_damage: i32,
    /// Seconds before a monster may land another attack.
    pub monster_attack_cooldown: f32,
    /// Knockback strength. Loaded and carried, but nothing applies it.
    pub monster_push_force: f32,

    /// Seconds between monster spawns.
    pub spawn_interval: f32,
    /// Seconds between weapon shots.
    pub weapon_fire_interval: f32,
    /// Most shots one weapon update may fire. A longer backlog is dropped.
    pub weapon_max_burst: u32,
    pub bullet_speed: f32,

    /// Score for each monster killed.
    pub kill_score: u32,

    pub player_sprite: SpriteSize,
    pub monster_sprite: SpriteSize,
    pub bullet_sprite: SpriteSize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            player_speed: 300.0,
            monster_speed: 100.0,
            player_max_health: 100,
            monster_damage: 1,
            monster_attack_damage: 10,
            monster_attack_cooldown: 1000.0,
            monster_push_force: 50.0,
            spawn_interval: 1.0,
            weapon_fire_interval: 0.5,
            weapon_max_burst: 64,
            bullet_speed: 500.0,
            kill_score: 10,
            player_sprite: SpriteSize::new(99, 75),
            monster_sprite: SpriteSize::new(101, 84),
            bullet_sprite: SpriteSize::new(9, 37),
        }
    }
}

impl GameConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Invalid(
                "window dimensions must be positive".to_string(),
            ));
        }
        if self.window_width > MAX_WINDOW_EXTENT || self.window_height > MAX_WINDOW_EXTENT {
            return Err(ConfigError::Invalid(format!(
                "window dimensions must not exceed {MAX_WINDOW_EXTENT}"
            )));
        }
        for (name, sprite) in [
            ("player_sprite", self.player_sprite),
            ("monster_sprite", self.monster_sprite),
            ("bullet_sprite", self.bullet_sprite),
        ] {
            if sprite.width == 0 || sprite.height == 0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must have a positive size"
                )));
            }
        }
        if !self.weapon_fire_interval.is_finite() || self.weapon_fire_interval < MIN_FIRE_INTERVAL {
            return Err(ConfigError::Invalid(format!(
                "weapon_fire_interval must be at least {MIN_FIRE_INTERVAL} s"
            )));
        }
        if self.weapon_max_burst == 0 {
            return Err(ConfigError::Invalid(
                "weapon_max_burst must be at least 1".to_string(),
            ));
        }
        if !is_positive(self.spawn_interval) {
            return Err(ConfigError::Invalid(
                "spawn_interval must be positive".to_string(),
            ));
        }
        if self.player_max_health <= 0 {
            return Err(ConfigError::Invalid(
                "player_max_health must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn width(&self) -> f32 {
        self.window_width as f32
    }

    pub fn height(&self) -> f32 {
        self.window_height as f32
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
