//! Sprite collision queries and the per-tick collision pass
//!
//! All tests are axis-aligned bounding-box overlaps. The pass runs after
//! motion integration; anything it destroys is gone from every collection
//! before the tick ends, so the next tick never sees a dangling entity.

use super::rect::Rect;
use super::state::{GameEvent, GameState};

/// IDs of live bombs overlapping the given rect. Clouds never match.
pub fn overlapping_bombs(state: &GameState, rect: &Rect) -> Vec<u32> {
    state
        .hazards
        .iter()
        .filter(|h| h.kind.collidable() && h.rect.overlaps(rect))
        .map(|h| h.id)
        .collect()
}

/// Bullet-vs-bomb resolution.
///
/// Each bullet claims the bombs it overlaps; a bomb already claimed by an
/// earlier bullet this tick cannot be claimed again, and a bullet whose
/// only overlaps were already claimed flies on. One destroy per object per
/// tick.
pub fn bullet_bomb_pass(state: &mut GameState) {
    let mut dead_bullets: Vec<u32> = Vec::new();
    let mut dead_bombs: Vec<u32> = Vec::new();

    for bullet in &state.bullets {
        let hits: Vec<u32> = state
            .hazards
            .iter()
            .filter(|h| {
                h.kind.collidable()
                    && !dead_bombs.contains(&h.id)
                    && h.rect.overlaps(&bullet.rect)
            })
            .map(|h| h.id)
            .collect();
        if !hits.is_empty() {
            dead_bullets.push(bullet.id);
            dead_bombs.extend(hits);
        }
    }

    if dead_bombs.is_empty() {
        return;
    }

    state.bullets.retain(|b| !dead_bullets.contains(&b.id));
    state.hazards.retain(|h| !dead_bombs.contains(&h.id));
    for _ in &dead_bombs {
        state.events.push(GameEvent::BombDestroyed);
    }
    log::debug!("{} bomb(s) shot down", dead_bombs.len());
}

/// Player-vs-bomb resolution.
///
/// Every bomb overlapping the player is removed unconditionally, whether
/// or not the invincibility window swallowed the damage. Returns true when
/// the hit ended the session (no lives remain).
pub fn player_bomb_pass(state: &mut GameState) -> bool {
    let hits = overlapping_bombs(state, &state.player.rect);
    if hits.is_empty() {
        return false;
    }

    state.hazards.retain(|h| !hits.contains(&h.id));

    let shielded = state.player.is_immortal();
    let alive = state.player.take_damage();
    if !shielded {
        state.events.push(GameEvent::PlayerHit);
    }
    !alive
}
