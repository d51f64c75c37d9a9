//! Fixed timestep simulation tick
//!
//! One entry point, `tick`, advances the state machine by exactly one
//! 30 Hz step: input, spawning, motion, collision, scoring, transitions.

use super::collision;
use super::state::{GamePhase, GameState};

/// Input commands for a single tick (deterministic).
///
/// `left`/`right` are held state; everything else is a one-shot action the
/// shell clears after each tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Menu start action (click/enter)
    pub start: bool,
    /// Jump (up key)
    pub jump: bool,
    /// Fire (space)
    pub shoot: bool,
    /// Held horizontal movement
    pub left: bool,
    pub right: bool,
    /// Game-over return action
    pub to_menu: bool,
    /// End the process (escape); honored in every phase
    pub quit: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    if input.quit {
        state.exit_requested = true;
    }

    match state.phase {
        GamePhase::Menu => {
            if input.start {
                state.start_session();
            }
        }
        GamePhase::Running => run_tick(state, input),
        GamePhase::GameOver => {
            if input.to_menu || state.game_over_expired() {
                state.return_to_menu();
            }
        }
    }

    // Ensure deterministic ordering
    state.normalize_order();
}

/// One tick of active gameplay. Damage detection and the resulting phase
/// change happen inside the same call; a fatal hit never survives into the
/// next tick's Running state.
fn run_tick(state: &mut GameState, input: &TickInput) {
    if input.jump {
        state.player_jump();
    }
    if input.shoot {
        state.player_shoot();
    }

    state.run_spawn_timers();

    state.player.apply_physics(input.left, input.right);
    for bullet in &mut state.bullets {
        bullet.advance();
    }
    for hazard in &mut state.hazards {
        hazard.advance();
    }
    state.background.advance();

    // Exit-boundary removal happens the same tick the boundary is crossed
    state.bullets.retain(|b| !b.off_screen());
    state.hazards.retain(|h| !h.off_screen());

    collision::bullet_bomb_pass(state);
    let session_over = collision::player_bomb_pass(state);

    // Raw milliseconds survived
    state.score = state.session_ms();

    if session_over {
        state.enter_game_over();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{GameEvent, Hazard, HazardKind};
    use glam::Vec2;

    fn start_input() -> TickInput {
        TickInput {
            start: true,
            ..Default::default()
        }
    }

    /// Tick into the Running phase from a fresh state
    fn running_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        tick(&mut state, &start_input());
        assert_eq!(state.phase, GamePhase::Running);
        state
    }

    #[test]
    fn test_menu_waits_for_start() {
        let mut state = GameState::new(1);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Menu);

        tick(&mut state, &start_input());
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.drain_events().contains(&GameEvent::SessionStarted));
    }

    #[test]
    fn test_start_resets_session() {
        let mut state = running_state(1);
        state.player.lives = 1;
        state.score = 9999;

        // Die, return, restart
        let center = state.player.rect.center();
        let id = state.next_entity_id();
        state
            .hazards
            .push(Hazard::new(id, HazardKind::Bomb, center, 0.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);

        tick(
            &mut state,
            &TickInput {
                to_menu: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Menu);

        tick(&mut state, &start_input());
        assert_eq!(state.player.lives, STARTING_LIVES);
        assert_eq!(state.score, 0);
        assert!(state.bullets.is_empty());
        assert!(state.hazards.is_empty());
    }

    #[test]
    fn test_jump_applies_in_same_tick() {
        let mut state = running_state(1);
        let rest_y = state.player.rect.top();
        tick(
            &mut state,
            &TickInput {
                jump: true,
                ..Default::default()
            },
        );
        assert!(!state.player.can_jump);
        // Jump velocity minus one tick of gravity
        assert_eq!(state.player.vel_y, JUMP_SPEED + GRAVITY);
        assert!(state.player.rect.top() < rest_y);
    }

    #[test]
    fn test_shot_cooldown_over_ticks() {
        let mut state = running_state(1);
        let shoot = TickInput {
            shoot: true,
            ..Default::default()
        };
        let mut shots = 0;
        for _ in 0..30 {
            tick(&mut state, &shoot);
            shots += state
                .drain_events()
                .iter()
                .filter(|e| **e == GameEvent::ShotFired)
                .count();
        }
        // 30 ticks ≈ 1 s of derived clock: one shot per >300 ms window
        assert_eq!(shots, 3);
    }

    #[test]
    fn test_spawn_cadence() {
        let mut state = running_state(1);
        // 30 more running ticks = 1 s of derived clock past session start
        for _ in 0..30 {
            tick(&mut state, &TickInput::default());
        }
        let bombs = state
            .hazards
            .iter()
            .filter(|h| h.kind == HazardKind::Bomb)
            .count();
        let clouds = state
            .hazards
            .iter()
            .filter(|h| h.kind == HazardKind::Cloud)
            .count();
        assert_eq!(bombs, 4);
        assert_eq!(clouds, 1);
    }

    #[test]
    fn test_hazard_removed_same_tick_it_exits() {
        let mut state = running_state(1);
        let fast = state.next_entity_id();
        let slow = state.next_entity_id();
        let mut near_exit = Hazard::new(fast, HazardKind::Bomb, Vec2::ZERO, 10.0);
        near_exit.rect.set_top(SCREEN_HEIGHT - 5.0);
        near_exit.rect.set_left(0.0);
        let mut lingering = Hazard::new(slow, HazardKind::Bomb, Vec2::ZERO, 4.0);
        lingering.rect.set_top(SCREEN_HEIGHT - 5.0);
        lingering.rect.set_left(0.0);
        state.hazards.push(near_exit);
        state.hazards.push(lingering);

        tick(&mut state, &TickInput::default());

        assert!(!state.hazards.iter().any(|h| h.id == fast));
        assert!(state.hazards.iter().any(|h| h.id == slow));
    }

    #[test]
    fn test_fatal_hit_transitions_same_tick() {
        let mut state = running_state(1);
        state.player.lives = 1;
        let center = state.player.rect.center();
        let id = state.next_entity_id();
        state
            .hazards
            .push(Hazard::new(id, HazardKind::Bomb, center, 0.0));

        tick(&mut state, &TickInput::default());

        // Never a tick with zero lives while still Running
        assert_eq!(state.player.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::GameOver));
    }

    #[test]
    fn test_game_over_auto_returns_after_countdown() {
        let mut state = running_state(1);
        state.player.lives = 1;
        let center = state.player.rect.center();
        let id = state.next_entity_id();
        state
            .hazards
            .push(Hazard::new(id, HazardKind::Bomb, center, 0.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);

        // 3000 ms at 30 Hz is 90 ticks; one short of it stays put
        for _ in 0..89 {
            tick(&mut state, &TickInput::default());
            assert_eq!(state.phase, GamePhase::GameOver);
        }
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.drain_events().contains(&GameEvent::ReturnedToMenu));
    }

    #[test]
    fn test_score_is_elapsed_session_ms() {
        let mut state = running_state(1);
        for _ in 0..30 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.score, state.session_ms());
        assert_eq!(state.score, 1000);
    }

    #[test]
    fn test_score_frozen_on_game_over() {
        let mut state = running_state(1);
        state.player.lives = 1;
        let center = state.player.rect.center();
        let id = state.next_entity_id();
        state
            .hazards
            .push(Hazard::new(id, HazardKind::Bomb, center, 0.0));
        tick(&mut state, &TickInput::default());
        let final_score = state.score;

        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.score, final_score);
    }

    #[test]
    fn test_lives_unchanged_while_immortal() {
        let mut state = running_state(1);
        // First hit starts the invincibility window
        let center = state.player.rect.center();
        let id = state.next_entity_id();
        state
            .hazards
            .push(Hazard::new(id, HazardKind::Bomb, center, 0.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.lives, STARTING_LIVES - 1);

        // Keep feeding overlapping bombs while the window holds
        while state.player.immortal_ticks > 1 {
            let center = state.player.rect.center();
            let id = state.next_entity_id();
            state
                .hazards
                .push(Hazard::new(id, HazardKind::Bomb, center, 0.0));
            tick(&mut state, &TickInput::default());
            assert_eq!(state.player.lives, STARTING_LIVES - 1);
        }
    }

    #[test]
    fn test_quit_finishes_the_current_tick() {
        let mut state = running_state(1);
        let before = state.time_ticks;
        tick(
            &mut state,
            &TickInput {
                quit: true,
                ..Default::default()
            },
        );
        // The tick still ran in full; the shell exits afterwards
        assert!(state.exit_requested);
        assert_eq!(state.time_ticks, before + 1);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed and input trace stay identical
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);

        let inputs = [
            start_input(),
            TickInput {
                shoot: true,
                ..Default::default()
            },
            TickInput {
                jump: true,
                right: true,
                ..Default::default()
            },
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..60 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.score, b.score);
        assert_eq!(a.bullets.len(), b.bullets.len());
        assert_eq!(a.hazards.len(), b.hazards.len());
        assert_eq!(a.player.rect, b.player.rect);
    }
}
