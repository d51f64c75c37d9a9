//! Sprite identities and their asset bindings
//!
//! The compositor maps each `SpriteId` to an image it loaded itself; the
//! filenames here are configuration constants, not a format this crate
//! defines or parses.

use crate::consts::*;

/// Drawable sprite handles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Jet,
    Bullet,
    Bomb,
    Cloud,
    Background,
}

impl SpriteId {
    /// Asset filename the compositor should load for this sprite
    pub fn asset(&self) -> &'static str {
        match self {
            SpriteId::Jet => "plane.png",
            SpriteId::Bullet => "bullet.png",
            SpriteId::Bomb => "bomb.png",
            SpriteId::Cloud => "cloud.png",
            SpriteId::Background => "background.png",
        }
    }

    /// Native sprite dimensions in pixels (the collision boxes use these)
    pub fn size(&self) -> (f32, f32) {
        match self {
            SpriteId::Jet => (JET_W, JET_H),
            SpriteId::Bullet => (BULLET_W, BULLET_H),
            SpriteId::Bomb => (BOMB_W, BOMB_H),
            SpriteId::Cloud => (CLOUD_W, CLOUD_H),
            SpriteId::Background => (SCREEN_WIDTH, SCREEN_HEIGHT),
        }
    }
}
