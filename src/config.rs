//! Gameplay configuration
//!
//! Every tunable the simulation reads lives here. Defaults are the
//! shipped balance; a JSON file can override any subset of fields, and
//! every load path validates before the loop starts.

use std::fmt;
use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Configuration failure, surfaced at startup
#[derive(Debug)]
pub enum ConfigError {
    /// Config file exists but could not be read
    Io(std::io::Error),
    /// Config file is not valid JSON for `GameConfig`
    Parse(serde_json::Error),
    /// Values fail the sanity checks
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config read failed: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse failed: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

/// Gameplay tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen & timing ===
    /// Playfield dimensions in pixels
    pub screen: Vec2,
    /// Fixed simulation rate (ticks per second)
    pub tick_hz: u32,

    // === Player ===
    /// Horizontal distance covered per tick while an input is held
    pub player_speed: f32,
    /// Starting health
    pub player_health: i32,
    /// Sprite rectangle
    pub player_size: Vec2,

    // === Basic enemies ===
    /// Horizontal distance covered per tick
    pub enemy_speed: f32,
    /// Sprite rectangle
    pub enemy_size: Vec2,
    /// Vertical drop applied when an enemy bounces off a screen edge
    pub enemy_descent: f32,
    /// Live enemy population, kept constant by respawns
    pub enemy_count: usize,
    /// Top-left corner of the spawn band
    pub spawn_band_min: Vec2,
    /// Bottom-right corner of the spawn band
    pub spawn_band_max: Vec2,

    // === Bullets ===
    /// Sprite rectangle (shared by player and boss bullets)
    pub bullet_size: Vec2,
    /// Per-tick vertical speed of player bullets (negative = upward)
    pub player_bullet_speed: f32,

    // === Boss ===
    /// Starting health
    pub boss_health: i32,
    /// Horizontal distance covered per tick
    pub boss_speed: f32,
    /// Sprite rectangle
    pub boss_size: Vec2,
    /// Per-tick vertical speed of boss bullets (positive = downward)
    pub boss_bullet_speed: f32,
    /// Boss fires when a uniform draw from [1, odds] lands on 1
    pub boss_fire_odds: u32,
    /// Kill count that summons the boss
    pub boss_spawn_kills: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen: Vec2::new(800.0, 600.0),
            tick_hz: 60,

            player_speed: 5.0,
            player_health: 50,
            player_size: Vec2::new(50.0, 50.0),

            enemy_speed: 3.0,
            enemy_size: Vec2::new(40.0, 40.0),
            enemy_descent: 40.0,
            enemy_count: 5,
            spawn_band_min: Vec2::new(50.0, 50.0),
            spawn_band_max: Vec2::new(750.0, 200.0),

            bullet_size: Vec2::new(10.0, 20.0),
            player_bullet_speed: -7.0,

            boss_health: 500,
            boss_speed: 2.0,
            boss_size: Vec2::new(100.0, 100.0),
            boss_bullet_speed: 5.0,
            boss_fire_odds: 15,
            boss_spawn_kills: 30,
        }
    }
}

impl GameConfig {
    /// Rightmost x the player can occupy
    pub fn player_max_x(&self) -> f32 {
        self.screen.x - self.player_size.x
    }

    /// Rightmost x a basic enemy can occupy
    pub fn enemy_max_x(&self) -> f32 {
        self.screen.x - self.enemy_size.x
    }

    /// Rightmost x the boss can occupy
    pub fn boss_max_x(&self) -> f32 {
        self.screen.x - self.boss_size.x
    }

    /// Sanity-check every tunable. Runs on every load path so a bad
    /// config never reaches the loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn rect(v: Vec2) -> bool {
            v.x > 0.0 && v.y > 0.0
        }
        let fail = |msg: String| Err(ConfigError::Invalid(msg));

        if !rect(self.screen) {
            return fail(format!("screen must be positive, got {}", self.screen));
        }
        if self.tick_hz == 0 {
            return fail("tick_hz must be at least 1".into());
        }
        if !rect(self.player_size) || !rect(self.enemy_size) || !rect(self.bullet_size) || !rect(self.boss_size) {
            return fail("sprite sizes must be positive".into());
        }
        if self.player_size.x > self.screen.x
            || self.enemy_size.x > self.screen.x
            || self.boss_size.x > self.screen.x
        {
            return fail("sprites must fit inside the screen".into());
        }
        if self.player_speed <= 0.0 || self.enemy_speed <= 0.0 || self.boss_speed <= 0.0 {
            return fail("movement speeds must be positive".into());
        }
        if self.player_bullet_speed >= 0.0 {
            return fail(format!(
                "player_bullet_speed must be negative (upward), got {}",
                self.player_bullet_speed
            ));
        }
        if self.boss_bullet_speed <= 0.0 {
            return fail(format!(
                "boss_bullet_speed must be positive (downward), got {}",
                self.boss_bullet_speed
            ));
        }
        if self.player_health <= 0 || self.boss_health <= 0 {
            return fail("starting health must be positive".into());
        }
        if self.enemy_count == 0 {
            return fail("enemy_count must be at least 1".into());
        }
        if self.enemy_descent <= 0.0 {
            return fail("enemy_descent must be positive".into());
        }
        if self.spawn_band_min.x > self.spawn_band_max.x || self.spawn_band_min.y > self.spawn_band_max.y {
            return fail(format!(
                "spawn band is inverted: {} .. {}",
                self.spawn_band_min, self.spawn_band_max
            ));
        }
        if self.spawn_band_min.x < 0.0
            || self.spawn_band_min.y < 0.0
            || self.spawn_band_max.x > self.enemy_max_x()
            || self.spawn_band_max.y > self.screen.y
        {
            return fail("spawn band must sit inside the enemy patrol bounds".into());
        }
        if self.boss_fire_odds == 0 {
            return fail("boss_fire_odds must be at least 1".into());
        }
        if self.boss_spawn_kills == 0 {
            return fail("boss_spawn_kills must be at least 1".into());
        }
        Ok(())
    }

    /// Load from a JSON file, falling back to defaults when the file is
    /// absent. Any override still goes through `validate`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        let text = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Self = serde_json::from_str(&text).map_err(ConfigError::Parse)?;
        config.validate()?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }
}
