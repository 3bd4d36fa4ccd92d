//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (insertion order, removals are two-phase)
//! - No rendering or platform dependencies

pub mod collision;
pub mod scene;
pub mod state;
pub mod tick;

pub use collision::point_in_rect;
pub use scene::{HudText, Scene, Sprite, SpriteKind, build_scene};
pub use state::{Bullet, Enemy, GamePhase, GameState, MasterEnemy, Player};
pub use tick::{TickInput, tick};
