//! Frame composition
//!
//! Turns a `GameState` snapshot into an ordered draw list plus HUD text
//! for an external compositor. Nothing here touches a device; the output
//! is plain data.

pub mod sprites;

pub use sprites::SpriteId;

use glam::Vec2;

use crate::Settings;
use crate::consts::*;
use crate::secs_from_ms;
use crate::sim::state::{GamePhase, GameState, HazardKind};
use crate::sim::Rect;

/// One sprite blit: which image, where
#[derive(Debug, Clone)]
pub struct DrawCommand {
    pub sprite: SpriteId,
    pub dest: Rect,
}

/// Where a text run is anchored on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// `pos` is the top-left corner of the rendered text
    TopLeft,
    /// `pos` is the center of the rendered text
    Center,
}

/// A literal text run for the external font renderer
#[derive(Debug, Clone)]
pub struct HudText {
    pub text: String,
    pub pos: Vec2,
    pub anchor: Anchor,
}

impl HudText {
    fn top_left(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            pos: Vec2::new(x, y),
            anchor: Anchor::TopLeft,
        }
    }

    fn centered(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            pos: Vec2::new(x, y),
            anchor: Anchor::Center,
        }
    }
}

/// Everything the compositor needs for one frame, in paint order
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub draws: Vec<DrawCommand>,
    pub hud: Vec<HudText>,
}

/// Build the frame for the current phase
pub fn compose_frame(state: &GameState, settings: &Settings) -> Frame {
    match state.phase {
        GamePhase::Menu => menu_frame(),
        GamePhase::Running => running_frame(state, settings),
        GamePhase::GameOver => game_over_frame(state),
    }
}

fn menu_frame() -> Frame {
    Frame {
        draws: Vec::new(),
        hud: vec![
            HudText::centered("Jetfall", SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 4.0),
            HudText::centered("Start", SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
        ],
    }
}

fn running_frame(state: &GameState, settings: &Settings) -> Frame {
    let mut draws = Vec::with_capacity(state.hazards.len() + state.bullets.len() + 3);

    // Background first, then scenery, then the things that matter
    draws.push(DrawCommand {
        sprite: SpriteId::Background,
        dest: state.background.tile_a,
    });
    draws.push(DrawCommand {
        sprite: SpriteId::Background,
        dest: state.background.tile_b,
    });

    for hazard in &state.hazards {
        if hazard.kind == HazardKind::Cloud {
            draws.push(DrawCommand {
                sprite: SpriteId::Cloud,
                dest: hazard.rect,
            });
        }
    }
    for hazard in &state.hazards {
        if hazard.kind == HazardKind::Bomb {
            draws.push(DrawCommand {
                sprite: SpriteId::Bomb,
                dest: hazard.rect,
            });
        }
    }
    for bullet in &state.bullets {
        draws.push(DrawCommand {
            sprite: SpriteId::Bullet,
            dest: bullet.rect,
        });
    }

    // The flicker is the invincibility cue; reduced_flicker renders solid
    if state.player.visible || settings.reduced_flicker {
        draws.push(DrawCommand {
            sprite: SpriteId::Jet,
            dest: state.player.rect,
        });
    }

    let hud = vec![
        HudText::top_left(
            format!("Time: {}s", secs_from_ms(state.session_ms())),
            10.0,
            10.0,
        ),
        HudText::top_left(format!("Lives: {}", state.player.lives), 10.0, 50.0),
        HudText::top_left(format!("Points: {}", state.score), 10.0, 90.0),
    ];

    Frame { draws, hud }
}

fn game_over_frame(state: &GameState) -> Frame {
    Frame {
        draws: Vec::new(),
        hud: vec![
            HudText::centered("Game Over", SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 4.0),
            HudText::centered(
                format!("Points: {}", state.score),
                SCREEN_WIDTH / 2.0,
                SCREEN_HEIGHT / 2.0 - 50.0,
            ),
            HudText::centered("Return to Menu", SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            HudText::centered("Exit", SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 + 50.0),
        ],
    }
}
