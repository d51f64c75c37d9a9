//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (30 ticks/second, millisecond clock derived from ticks)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{bullet_bomb_pass, overlapping_bombs, player_bomb_pass};
pub use rect::Rect;
pub use state::{
    Background, Bullet, GameEvent, GamePhase, GameState, Hazard, HazardKind, Player,
};
pub use tick::{TickInput, tick};
