//! Drawable scene emission
//!
//! [`build_scene`] turns the current state into plain draw commands:
//! sprites in draw order plus HUD text. Read-only over the state; actual
//! rendering lives behind [`crate::platform::Presenter`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};

/// RGB color for text and the clear pass
pub type Color = [u8; 3];

pub const WHITE: Color = [255, 255, 255];
pub const RED: Color = [255, 0, 0];
pub const GREEN: Color = [0, 255, 0];
pub const BLACK: Color = [0, 0, 0];

/// Which sprite to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Player,
    Enemy,
    Bullet,
    Boss,
}

/// One textured rectangle, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub pos: Vec2,
    pub size: Vec2,
}

/// One line of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudText {
    pub text: String,
    pub pos: Vec2,
    pub color: Color,
}

/// Draw commands for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Phase the frame was captured in
    pub phase: GamePhase,
    /// Fill color applied before any sprite
    pub clear: Color,
    /// Sprites in draw order
    pub sprites: Vec<Sprite>,
    /// Text drawn on top
    pub texts: Vec<HudText>,
}

const SCORE_ANCHOR: Vec2 = Vec2::new(10.0, 10.0);
const PLAYER_HP_ANCHOR: Vec2 = Vec2::new(10.0, 40.0);
/// Boss HP anchor: this far in from the right screen edge
const BOSS_HP_MARGIN: f32 = 220.0;
/// Banner lines sit this far left of and above/below screen center
const BANNER_OFFSET: Vec2 = Vec2::new(-100.0, 20.0);

/// Build the frame for the current state. Terminal phases produce the
/// two-line message screen instead of the playfield.
pub fn build_scene(state: &GameState) -> Scene {
    match state.phase {
        GamePhase::Playing => playfield_scene(state),
        GamePhase::Won => banner_scene(state, "YOU WIN!"),
        GamePhase::Lost => banner_scene(state, "GAME OVER!"),
    }
}

fn playfield_scene(state: &GameState) -> Scene {
    let config = &state.config;
    let mut sprites = Vec::with_capacity(
        1 + state.enemies.len()
            + state.bullets.len()
            + state.boss.as_ref().map_or(0, |b| 1 + b.bullets.len()),
    );

    sprites.push(Sprite {
        kind: SpriteKind::Player,
        pos: state.player.pos,
        size: config.player_size,
    });
    for enemy in &state.enemies {
        sprites.push(Sprite {
            kind: SpriteKind::Enemy,
            pos: enemy.pos,
            size: config.enemy_size,
        });
    }
    for bullet in &state.bullets {
        sprites.push(Sprite {
            kind: SpriteKind::Bullet,
            pos: bullet.pos,
            size: config.bullet_size,
        });
    }
    if let Some(boss) = &state.boss {
        sprites.push(Sprite {
            kind: SpriteKind::Boss,
            pos: boss.pos,
            size: config.boss_size,
        });
        for bullet in &boss.bullets {
            sprites.push(Sprite {
                kind: SpriteKind::Bullet,
                pos: bullet.pos,
                size: config.bullet_size,
            });
        }
    }

    let mut texts = vec![HudText {
        text: format!("Player HP: {}", state.player.health),
        pos: PLAYER_HP_ANCHOR,
        color: GREEN,
    }];
    if let Some(boss) = &state.boss {
        texts.push(HudText {
            text: format!("Boss HP: {}", boss.health),
            pos: Vec2::new(config.screen.x - BOSS_HP_MARGIN, 10.0),
            color: RED,
        });
    }
    texts.push(HudText {
        text: format!("Enemies Defeated: {}", state.kills),
        pos: SCORE_ANCHOR,
        color: WHITE,
    });

    Scene {
        phase: state.phase,
        clear: BLACK,
        sprites,
        texts,
    }
}

fn banner_scene(state: &GameState, headline: &str) -> Scene {
    let center = state.config.screen / 2.0;
    Scene {
        phase: state.phase,
        clear: BLACK,
        sprites: Vec::new(),
        texts: vec![
            HudText {
                text: headline.to_string(),
                pos: center + Vec2::new(BANNER_OFFSET.x, -BANNER_OFFSET.y),
                color: WHITE,
            },
            HudText {
                text: format!("Total Points: {}", state.kills),
                pos: center + BANNER_OFFSET,
                color: WHITE,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;
    use crate::sim::state::MasterEnemy;

    fn new_state(seed: u64) -> GameState {
        GameState::new(GameConfig::default(), seed)
    }

    #[test]
    fn test_playfield_draw_order() {
        let state = new_state(3);
        let scene = build_scene(&state);

        // Player first, then the five enemies; no boss yet
        assert_eq!(scene.sprites.len(), 6);
        assert_eq!(scene.sprites[0].kind, SpriteKind::Player);
        assert!(scene.sprites[1..].iter().all(|s| s.kind == SpriteKind::Enemy));
        assert_eq!(scene.clear, BLACK);
    }

    #[test]
    fn test_hud_without_boss() {
        let state = new_state(3);
        let scene = build_scene(&state);

        assert_eq!(scene.texts.len(), 2);
        assert_eq!(scene.texts[0].text, "Player HP: 50");
        assert_eq!(scene.texts[0].color, GREEN);
        assert_eq!(scene.texts[1].text, "Enemies Defeated: 0");
        assert_eq!(scene.texts[1].color, WHITE);
    }

    #[test]
    fn test_boss_adds_sprite_and_hud_line() {
        let mut state = new_state(3);
        state.boss = Some(MasterEnemy::new(&state.config));
        let scene = build_scene(&state);

        assert_eq!(scene.sprites.len(), 7);
        assert_eq!(scene.sprites.last().map(|s| s.kind), Some(SpriteKind::Boss));
        let boss_line = scene
            .texts
            .iter()
            .find(|t| t.text.starts_with("Boss HP"))
            .expect("boss HUD line");
        assert_eq!(boss_line.text, "Boss HP: 500");
        assert_eq!(boss_line.color, RED);
        assert_eq!(boss_line.pos, Vec2::new(580.0, 10.0));
    }

    #[test]
    fn test_win_banner() {
        let mut state = new_state(3);
        state.kills = 31;
        state.phase = GamePhase::Won;
        let scene = build_scene(&state);

        assert!(scene.sprites.is_empty());
        assert_eq!(scene.texts[0].text, "YOU WIN!");
        assert_eq!(scene.texts[0].pos, Vec2::new(300.0, 280.0));
        assert_eq!(scene.texts[1].text, "Total Points: 31");
        assert_eq!(scene.texts[1].pos, Vec2::new(300.0, 320.0));
    }

    #[test]
    fn test_loss_banner() {
        let mut state = new_state(3);
        state.kills = 12;
        state.phase = GamePhase::Lost;
        let scene = build_scene(&state);

        assert_eq!(scene.texts[0].text, "GAME OVER!");
        assert_eq!(scene.texts[1].text, "Total Points: 12");
    }
}
