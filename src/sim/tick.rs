//! Per-tick simulation update
//!
//! One call to [`tick`] advances the world by exactly one fixed step:
//! apply input, move everything, resolve collisions (mark first, filter
//! after), run the boss, evaluate win/loss.

use rand::Rng;

use super::collision::point_in_rect;
use super::state::{Bullet, Enemy, GamePhase, GameState, MasterEnemy, Player};
use crate::GameConfig;
use crate::consts::*;

/// Held input signals sampled once per tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move-left held
    pub left: bool,
    /// Move-right held
    pub right: bool,
    /// Fire held (spawns one bullet every tick it is held; no cooldown)
    pub fire: bool,
    /// Quit requested; the loop driver exits once the tick finishes
    pub quit: bool,
}

/// Advance the simulation by one tick. No-op once the phase is terminal.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase.is_terminal() {
        return;
    }

    // Input: steer, then fire from the fresh position
    move_player(&mut state.player, input, &state.config);
    if input.fire {
        state.bullets.push(Bullet::new(
            state.player.pos + PLAYER_MUZZLE,
            state.config.player_bullet_speed,
        ));
    }

    // Movement
    for enemy in &mut state.enemies {
        move_enemy(enemy, &state.config);
    }
    for bullet in &mut state.bullets {
        move_bullet(bullet, state.config.screen.y);
    }

    // Purge bullets that left the screen
    state.bullets.retain(|b| b.active);

    resolve_enemy_hits(state);

    // The boss joins on the same tick the counter reaches the threshold
    // and acts immediately
    if state.boss_due() {
        if state.boss.is_none() {
            state.boss = Some(MasterEnemy::new(&state.config));
            log::info!("boss spawned at {} kills", state.kills);
        }
        boss_phase(state);
    }

    // Terminal evaluation, boss condition first
    if state.boss.as_ref().is_some_and(|b| b.health <= 0) {
        state.phase = GamePhase::Won;
        log::info!("boss destroyed, final score {}", state.kills);
    } else if state.player.health <= 0 {
        state.phase = GamePhase::Lost;
        log::info!("player destroyed, final score {}", state.kills);
    }

    state.time_ticks += 1;
}

/// Apply held directional input; opposing inputs cancel. The position is
/// clamped so the whole sprite stays on screen.
fn move_player(player: &mut Player, input: &TickInput, config: &GameConfig) {
    let mut dx = 0.0;
    if input.left {
        dx -= player.speed;
    }
    if input.right {
        dx += player.speed;
    }
    player.pos.x = (player.pos.x + dx).clamp(0.0, config.player_max_x());
}

/// Patrol one step; bounce off either screen edge and drop down
fn move_enemy(enemy: &mut Enemy, config: &GameConfig) {
    enemy.pos.x += enemy.speed * enemy.direction;
    let max_x = config.enemy_max_x();
    if enemy.pos.x >= max_x {
        enemy.pos.x = max_x;
        enemy.direction = -1.0;
        enemy.pos.y += config.enemy_descent;
    } else if enemy.pos.x <= 0.0 {
        enemy.pos.x = 0.0;
        enemy.direction = 1.0;
        enemy.pos.y += config.enemy_descent;
    }
}

/// Advance one step; deactivate once outside the vertical screen range
fn move_bullet(bullet: &mut Bullet, screen_h: f32) {
    bullet.pos.y += bullet.speed;
    if bullet.pos.y < 0.0 || bullet.pos.y > screen_h {
        bullet.active = false;
    }
}

/// Player bullets vs basic enemies. The scan marks hits without touching
/// either collection: first match wins per bullet, and an enemy already
/// marked dead cannot be hit again. Removal, scoring, and respawns happen
/// after the scan, so replacements are not hittable until the next tick.
fn resolve_enemy_hits(state: &mut GameState) {
    let mut dead_enemies: Vec<usize> = Vec::new();
    let mut spent_bullets: Vec<usize> = Vec::new();

    for (bi, bullet) in state.bullets.iter().enumerate() {
        for (ei, enemy) in state.enemies.iter().enumerate() {
            if dead_enemies.contains(&ei) {
                continue;
            }
            if point_in_rect(bullet.pos, enemy.pos, state.config.enemy_size) {
                dead_enemies.push(ei);
                spent_bullets.push(bi);
                break;
            }
        }
    }

    if dead_enemies.is_empty() {
        return;
    }

    let mut index = 0;
    state.enemies.retain(|_| {
        let keep = !dead_enemies.contains(&index);
        index += 1;
        keep
    });
    let mut index = 0;
    state.bullets.retain(|_| {
        let keep = !spent_bullets.contains(&index);
        index += 1;
        keep
    });

    for _ in 0..dead_enemies.len() {
        state.kills += 1;
        log::debug!("enemy down, kills = {}", state.kills);
        state.spawn_enemy();
    }
}

/// Move the boss, roll its fire chance, fly its bullets at the player,
/// then let surviving player bullets chip the boss.
fn boss_phase(state: &mut GameState) {
    let Some(boss) = state.boss.as_mut() else {
        return;
    };
    let config = &state.config;

    // Patrol like the basic enemies, but no descent
    boss.pos.x += boss.speed * boss.direction;
    let max_x = config.boss_max_x();
    if boss.pos.x >= max_x {
        boss.pos.x = max_x;
        boss.direction = -1.0;
    } else if boss.pos.x <= 0.0 {
        boss.pos.x = 0.0;
        boss.direction = 1.0;
    }

    // Fire on a 1-in-odds draw; the new bullet flies this very tick
    if state.rng.random_range(1..=config.boss_fire_odds) == 1 {
        boss.bullets.push(Bullet::new(
            boss.pos + BOSS_MUZZLE,
            config.boss_bullet_speed,
        ));
    }

    // Boss bullets: advance, hit the player, or fall off the bottom
    let player = &mut state.player;
    boss.bullets.retain_mut(|bullet| {
        move_bullet(bullet, config.screen.y);
        if point_in_rect(bullet.pos, player.pos, config.player_size) {
            player.take_damage();
            return false;
        }
        bullet.active
    });

    // Player bullets vs the boss rect; several can land in one tick, and
    // each landing bullet is consumed
    let boss_pos = boss.pos;
    state.bullets.retain(|bullet| {
        if point_in_rect(bullet.pos, boss_pos, config.boss_size) {
            boss.take_damage();
            false
        } else {
            true
        }
    });
}
