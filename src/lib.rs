//! Nova Invaders - a fixed-timestep arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `platform`: Input/presenter seams and the 60 Hz loop driver
//! - `config`: Gameplay tunables with fail-fast validation

pub mod config;
pub mod platform;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Fixed layout anchors that are not gameplay tunables
pub mod consts {
    use glam::Vec2;

    /// Player spawn height above the bottom screen edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 70.0;
    /// Bullet mount point relative to the player's top-left corner
    /// (centers the 10-wide bullet on the 50-wide ship)
    pub const PLAYER_MUZZLE: Vec2 = Vec2::new(20.0, 0.0);
    /// Bullet mount point relative to the boss's top-left corner
    pub const BOSS_MUZZLE: Vec2 = Vec2::new(65.0, 90.0);
    /// Vertical position the boss patrols at
    pub const BOSS_SPAWN_Y: f32 = 50.0;
}
