//! Self-playing input source for headless runs

use super::InputSource;
use crate::sim::{GameState, TickInput};

/// Chases the most pressing threat column and never stops firing.
///
/// Steers the ship center under the boss while one is up, otherwise
/// under the lowest basic enemy.
#[derive(Debug, Default)]
pub struct Autopilot;

impl InputSource for Autopilot {
    fn sample(&mut self, state: &GameState) -> TickInput {
        let config = &state.config;
        let ship_center = state.player.pos.x + config.player_size.x / 2.0;

        let target = if let Some(boss) = &state.boss {
            Some(boss.pos.x + config.boss_size.x / 2.0)
        } else {
            state
                .enemies
                .iter()
                .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
                .map(|e| e.pos.x + config.enemy_size.x / 2.0)
        };

        let mut input = TickInput {
            fire: true,
            ..Default::default()
        };
        if let Some(target_x) = target {
            // Dead zone one step wide (prevents jitter over the target)
            if target_x < ship_center - config.player_speed {
                input.left = true;
            } else if target_x > ship_center + config.player_speed {
                input.right = true;
            }
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;
    use crate::sim::MasterEnemy;

    #[test]
    fn test_always_fires() {
        let state = GameState::new(GameConfig::default(), 3);
        let input = Autopilot.sample(&state);
        assert!(input.fire);
        assert!(!input.quit);
    }

    #[test]
    fn test_steers_toward_lowest_enemy() {
        let mut state = GameState::new(GameConfig::default(), 3);
        // Drop one enemy below the rest, far to the left of the ship
        state.enemies[2].pos.x = 60.0;
        state.enemies[2].pos.y = 400.0;

        let input = Autopilot.sample(&state);
        assert!(input.left);
        assert!(!input.right);
    }

    #[test]
    fn test_prefers_boss_over_enemies() {
        let mut state = GameState::new(GameConfig::default(), 3);
        let mut boss = MasterEnemy::new(&state.config);
        boss.pos.x = 690.0;
        state.boss = Some(boss);
        // Lowest enemy sits on the opposite side of the ship
        state.enemies[0].pos.x = 10.0;
        state.enemies[0].pos.y = 500.0;

        let input = Autopilot.sample(&state);
        assert!(input.right);
        assert!(!input.left);
    }

    #[test]
    fn test_holds_still_inside_dead_zone() {
        let mut state = GameState::new(GameConfig::default(), 3);
        let ship_center = state.player.pos.x + state.config.player_size.x / 2.0;
        for enemy in &mut state.enemies {
            enemy.pos.x = ship_center - state.config.enemy_size.x / 2.0;
        }

        let input = Autopilot.sample(&state);
        assert!(!input.left);
        assert!(!input.right);
        assert!(input.fire);
    }
}
