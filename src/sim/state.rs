//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here. Entities are plain value
//! records owned by the state's collections; nothing is shared.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::GameConfig;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Boss destroyed; terminal
    Won,
    /// Player destroyed; terminal
    Lost,
}

impl GamePhase {
    /// True for Won and Lost
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    /// Horizontal distance covered per tick while an input is held
    pub speed: f32,
    pub health: i32,
}

impl Player {
    /// Ship centered horizontally, just above the bottom edge
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                (config.screen.x - config.player_size.x) / 2.0,
                config.screen.y - PLAYER_BOTTOM_MARGIN,
            ),
            speed: config.player_speed,
            health: config.player_health,
        }
    }

    pub fn take_damage(&mut self) {
        self.health -= 1;
    }
}

/// A patrolling basic enemy
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    /// Horizontal distance covered per tick
    pub speed: f32,
    /// +1.0 rightward, -1.0 leftward
    pub direction: f32,
}

/// A projectile. Negative speed travels up (player), positive down (boss).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    /// Per-tick vertical speed, signed
    pub speed: f32,
    /// Cleared when the bullet leaves the screen vertically
    pub active: bool,
}

impl Bullet {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            speed,
            active: true,
        }
    }
}

/// The boss. Owns the bullets it fires.
#[derive(Debug, Clone, PartialEq)]
pub struct MasterEnemy {
    pub pos: Vec2,
    /// Horizontal distance covered per tick
    pub speed: f32,
    /// +1.0 rightward, -1.0 leftward
    pub direction: f32,
    pub health: i32,
    /// Bullets this boss has in flight
    pub bullets: Vec<Bullet>,
}

impl MasterEnemy {
    /// Boss centered horizontally at its patrol height
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new((config.screen.x - config.boss_size.x) / 2.0, BOSS_SPAWN_Y),
            speed: config.boss_speed,
            direction: 1.0,
            health: config.boss_health,
            bullets: Vec::new(),
        }
    }

    pub fn take_damage(&mut self) {
        self.health -= 1;
    }
}

/// Complete game state for one session (deterministic given seed + inputs)
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Session seed, kept for reporting
    pub seed: u64,
    /// Tunables the session was started with
    pub config: GameConfig,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Cleared by the quit signal; the loop driver stops once false
    pub running: bool,
    pub player: Player,
    /// Live basic enemies; population stays at `config.enemy_count`
    pub enemies: Vec<Enemy>,
    /// Bullets the player has in flight
    pub bullets: Vec<Bullet>,
    /// Basic enemies defeated so far (doubles as the score)
    pub kills: u32,
    /// Present once `kills` reaches `config.boss_spawn_kills`
    pub boss: Option<MasterEnemy>,
    /// Session RNG; every draw flows through here in tick order
    pub rng: Pcg32,
}

impl GameState {
    /// Create a session with the given tunables and seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut state = Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Playing,
            running: true,
            player: Player::new(&config),
            enemies: Vec::with_capacity(config.enemy_count),
            bullets: Vec::new(),
            kills: 0,
            boss: None,
            rng: Pcg32::seed_from_u64(seed),
            config,
        };
        for _ in 0..state.config.enemy_count {
            state.spawn_enemy();
        }
        state
    }

    /// Spawn one enemy at a random position inside the band, moving right
    pub fn spawn_enemy(&mut self) {
        let band_min = self.config.spawn_band_min;
        let band_max = self.config.spawn_band_max;
        let pos = Vec2::new(
            self.rng.random_range(band_min.x..=band_max.x),
            self.rng.random_range(band_min.y..=band_max.y),
        );
        self.enemies.push(Enemy {
            pos,
            speed: self.config.enemy_speed,
            direction: 1.0,
        });
    }

    /// Whether the kill counter has reached the boss threshold
    pub fn boss_due(&self) -> bool {
        self.kills >= self.config.boss_spawn_kills
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_matches_config() {
        let config = GameConfig::default();
        let state = GameState::new(config.clone(), 7);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.enemies.len(), config.enemy_count);
        assert_eq!(state.player.health, config.player_health);
        assert_eq!(state.player.pos, Vec2::new(375.0, 530.0));
        assert_eq!(state.kills, 0);
        assert!(state.boss.is_none());
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_initial_enemies_inside_band() {
        let state = GameState::new(GameConfig::default(), 42);
        for enemy in &state.enemies {
            assert!(enemy.pos.x >= 50.0 && enemy.pos.x <= 750.0, "x = {}", enemy.pos.x);
            assert!(enemy.pos.y >= 50.0 && enemy.pos.y <= 200.0, "y = {}", enemy.pos.y);
            assert_eq!(enemy.direction, 1.0);
        }
    }

    #[test]
    fn test_boss_spawns_centered() {
        let boss = MasterEnemy::new(&GameConfig::default());
        assert_eq!(boss.pos, Vec2::new(350.0, 50.0));
        assert_eq!(boss.health, 500);
        assert!(boss.bullets.is_empty());
    }

    #[test]
    fn test_same_seed_same_state() {
        let a = GameState::new(GameConfig::default(), 99);
        let b = GameState::new(GameConfig::default(), 99);
        assert_eq!(a, b);
    }
}
