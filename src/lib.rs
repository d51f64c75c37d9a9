//! Jetfall - a side-scrolling jet-vs-bombs arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, physics, collisions, phases)
//! - `render`: Frame composition (draw commands + HUD text for an external compositor)
//! - `audio`: Playback requests for an external mixer
//! - `settings` / `highscores`: JSON-persisted preferences and leaderboard

pub mod audio;
pub mod highscores;
pub mod render;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield width in pixels
    pub const SCREEN_WIDTH: f32 = 800.0;
    /// Playfield height in pixels
    pub const SCREEN_HEIGHT: f32 = 700.0;

    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u64 = 30;

    /// Downward acceleration applied to the jet every tick (px/tick²)
    pub const GRAVITY: f32 = 1.0;
    /// Vertical velocity set by a jump (negative = up)
    pub const JUMP_SPEED: f32 = -15.0;
    /// Horizontal displacement per tick while left/right is held
    pub const PLAYER_STEP: f32 = 10.0;
    /// Minimum gap between successful shots (ms)
    pub const SHOT_COOLDOWN_MS: u64 = 300;
    /// Invincibility window after taking damage, in ticks
    pub const IMMORTAL_TICKS: u32 = 100;
    /// Lives at session start
    pub const STARTING_LIVES: u8 = 3;

    /// Bullet climb speed (px/tick, negative = up)
    pub const BULLET_SPEED: f32 = -10.0;

    /// Bomb spawn cadence (ms)
    pub const BOMB_SPAWN_MS: u64 = 250;
    /// Cloud spawn cadence (ms)
    pub const CLOUD_SPAWN_MS: u64 = 1000;
    /// Falling-speed range for spawned hazards (px/tick, inclusive)
    pub const HAZARD_SPEED_MIN: i32 = 5;
    pub const HAZARD_SPEED_MAX: i32 = 20;
    /// Vertical band above the screen where hazard centers spawn
    pub const SPAWN_BAND_TOP: i32 = -100;
    pub const SPAWN_BAND_BOTTOM: i32 = -20;

    /// Background scroll speed (px/tick)
    pub const SCROLL_SPEED: f32 = 1.0;

    /// Auto-return delay on the game-over screen (ms)
    pub const GAME_OVER_RETURN_MS: u64 = 3000;

    /// Sprite dimensions (also the collision boxes)
    pub const JET_W: f32 = 80.0;
    pub const JET_H: f32 = 40.0;
    pub const BULLET_W: f32 = 8.0;
    pub const BULLET_H: f32 = 20.0;
    pub const BOMB_W: f32 = 28.0;
    pub const BOMB_H: f32 = 44.0;
    pub const CLOUD_W: f32 = 130.0;
    pub const CLOUD_H: f32 = 64.0;
}

/// Milliseconds of derived clock for a given tick count
#[inline]
pub fn ms_from_ticks(ticks: u64) -> u64 {
    ticks * 1000 / consts::TICK_RATE
}

/// Whole seconds for a given millisecond count (HUD formatting)
#[inline]
pub fn secs_from_ms(ms: u64) -> u64 {
    ms / 1000
}
