//! Game state and core simulation types
//!
//! Everything a session needs lives on `GameState`; the shell only ever
//! holds one of these plus the input it feeds to `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;
use crate::ms_from_ticks;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the start action
    Menu,
    /// Active gameplay
    Running,
    /// Run ended; returns to the menu on input or after a countdown
    GameOver,
}

/// Discrete happenings the shell reacts to (audio requests, logging).
///
/// Events carry no gameplay state; the sim is already consistent by the
/// time they are observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Menu start action accepted; a fresh session is running
    SessionStarted,
    /// Player left the ground
    Jumped,
    /// A bullet was spawned
    ShotFired,
    /// A bomb was destroyed by a bullet
    BombDestroyed,
    /// Player took damage (not emitted for shielded contact)
    PlayerHit,
    /// Lives ran out this tick
    GameOver,
    /// Back on the title screen
    ReturnedToMenu,
}

/// The player's jet
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity (px/tick, negative = up)
    pub vel_y: f32,
    pub lives: u8,
    /// True while the jet rests on the ground
    pub can_jump: bool,
    /// Remaining invincibility window; damage is ignored while > 0
    pub immortal_ticks: u32,
    /// Derived-clock time of the last successful shot
    pub last_shot_ms: Option<u64>,
    /// Blink state; false only during the invincibility flicker
    pub visible: bool,
}

impl Player {
    /// Fresh jet resting near the bottom center of the screen
    pub fn new() -> Self {
        let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT - 50.0);
        Self {
            rect: Rect::from_center(center, JET_W, JET_H),
            vel_y: 0.0,
            lives: STARTING_LIVES,
            can_jump: true,
            immortal_ticks: 0,
            last_shot_ms: None,
            visible: true,
        }
    }

    #[inline]
    pub fn is_immortal(&self) -> bool {
        self.immortal_ticks > 0
    }

    /// Leave the ground. No-op unless grounded. Returns whether it fired.
    pub fn jump(&mut self) -> bool {
        if !self.can_jump {
            return false;
        }
        self.vel_y = JUMP_SPEED;
        self.can_jump = false;
        true
    }

    /// Whether a shot is allowed at the given derived-clock time
    pub fn can_shoot(&self, now_ms: u64) -> bool {
        match self.last_shot_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > SHOT_COOLDOWN_MS,
        }
    }

    pub fn mark_shot(&mut self, now_ms: u64) {
        self.last_shot_ms = Some(now_ms);
    }

    /// Per-tick physics: invincibility countdown and blink, gravity,
    /// integration, ground/ceiling clamps, held horizontal movement.
    pub fn apply_physics(&mut self, left_held: bool, right_held: bool) {
        if self.immortal_ticks > 0 {
            self.immortal_ticks -= 1;
            // Invisible for 5 ticks out of every 10 while shielded
            self.visible = self.immortal_ticks % 10 >= 5;
        } else {
            self.visible = true;
        }

        self.vel_y += GRAVITY;
        self.rect.translate(Vec2::new(0.0, self.vel_y));

        if self.rect.bottom() >= SCREEN_HEIGHT {
            self.rect.set_bottom(SCREEN_HEIGHT);
            self.vel_y = 0.0;
            self.can_jump = true;
        } else if self.rect.top() <= 0.0 {
            self.rect.set_top(0.0);
            self.vel_y = 0.0;
            self.can_jump = false;
        }

        if left_held {
            self.rect.translate(Vec2::new(-PLAYER_STEP, 0.0));
        }
        if right_held {
            self.rect.translate(Vec2::new(PLAYER_STEP, 0.0));
        }
        self.rect.clamp_x(0.0, SCREEN_WIDTH);
    }

    /// Apply one hit. Shielded or already-dead hits are no-ops.
    /// Returns whether the player still has lives remaining.
    pub fn take_damage(&mut self) -> bool {
        if self.lives == 0 {
            return false;
        }
        if self.immortal_ticks > 0 {
            return true;
        }
        self.lives -= 1;
        self.immortal_ticks = IMMORTAL_TICKS;
        self.lives > 0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A player bullet climbing at fixed speed
#[derive(Debug, Clone)]
pub struct Bullet {
    pub id: u32,
    pub rect: Rect,
}

impl Bullet {
    /// Spawn centered on a point (the player's top center)
    pub fn new(id: u32, center: Vec2) -> Self {
        Self {
            id,
            rect: Rect::from_center(center, BULLET_W, BULLET_H),
        }
    }

    pub fn advance(&mut self) {
        self.rect.translate(Vec2::new(0.0, BULLET_SPEED));
    }

    /// True once the bullet has fully left the top of the screen
    pub fn off_screen(&self) -> bool {
        self.rect.bottom() < 0.0
    }
}

/// What a falling entity is. Behavior differences are data, not types:
/// bombs collide, clouds are scenery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardKind {
    Bomb,
    Cloud,
}

impl HazardKind {
    /// Whether this kind participates in the collision pass
    #[inline]
    pub fn collidable(&self) -> bool {
        matches!(self, HazardKind::Bomb)
    }
}

/// A falling entity spawned above the screen
#[derive(Debug, Clone)]
pub struct Hazard {
    pub id: u32,
    pub kind: HazardKind,
    pub rect: Rect,
    /// Downward speed (px/tick), drawn uniformly at spawn time
    pub speed: f32,
}

impl Hazard {
    pub fn new(id: u32, kind: HazardKind, center: Vec2, speed: f32) -> Self {
        let (w, h) = match kind {
            HazardKind::Bomb => (BOMB_W, BOMB_H),
            HazardKind::Cloud => (CLOUD_W, CLOUD_H),
        };
        Self {
            id,
            kind,
            rect: Rect::from_center(center, w, h),
            speed,
        }
    }

    pub fn advance(&mut self) {
        self.rect.translate(Vec2::new(0.0, self.speed));
    }

    /// True once the hazard has fully left the bottom of the screen
    pub fn off_screen(&self) -> bool {
        self.rect.top() > SCREEN_HEIGHT
    }
}

/// Two full-screen tiles scrolling down in lockstep.
///
/// Invariant: the tiles always cover the screen with no gap. When a
/// tile's top reaches the screen bottom, its bottom snaps to the other
/// tile's top.
#[derive(Debug, Clone)]
pub struct Background {
    pub tile_a: Rect,
    pub tile_b: Rect,
}

impl Background {
    pub fn new() -> Self {
        Self {
            tile_a: Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
            tile_b: Rect::new(0.0, -SCREEN_HEIGHT, SCREEN_WIDTH, SCREEN_HEIGHT),
        }
    }

    pub fn advance(&mut self) {
        let step = Vec2::new(0.0, SCROLL_SPEED);
        self.tile_a.translate(step);
        self.tile_b.translate(step);

        if self.tile_a.top() >= SCREEN_HEIGHT {
            let top = self.tile_b.top();
            self.tile_a.set_bottom(top);
        }
        if self.tile_b.top() >= SCREEN_HEIGHT {
            let top = self.tile_a.top();
            self.tile_b.set_bottom(top);
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete game state, a pure function of (seed, input trace)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Ticks since state creation; the derived millisecond clock reads this
    pub time_ticks: u64,
    /// Derived-clock time the running session began
    pub session_start_ms: u64,
    /// Points accrued this session (raw milliseconds survived)
    pub score: u64,
    pub player: Player,
    /// Live bullets (sorted by id for determinism)
    pub bullets: Vec<Bullet>,
    /// Live hazards, bombs and clouds alike (sorted by id)
    pub hazards: Vec<Hazard>,
    pub background: Background,
    /// Events emitted this tick, drained by the shell
    pub events: Vec<GameEvent>,
    /// Set once the quit action is seen; the shell ends the loop after
    /// finishing the current tick's frame
    pub exit_requested: bool,
    /// Derived-clock time of the last bomb/cloud spawn
    last_bomb_spawn_ms: u64,
    last_cloud_spawn_ms: u64,
    /// Derived-clock time game-over was entered (drives the auto-return)
    game_over_at_ms: Option<u64>,
    next_id: u32,
}

impl GameState {
    /// Create a new state on the title screen with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            time_ticks: 0,
            session_start_ms: 0,
            score: 0,
            player: Player::new(),
            bullets: Vec::new(),
            hazards: Vec::new(),
            background: Background::new(),
            events: Vec::new(),
            exit_requested: false,
            last_bomb_spawn_ms: 0,
            last_cloud_spawn_ms: 0,
            game_over_at_ms: None,
            next_id: 1,
        }
    }

    /// Monotonic millisecond clock derived from the tick counter
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        ms_from_ticks(self.time_ticks)
    }

    /// Milliseconds survived this session
    #[inline]
    pub fn session_ms(&self) -> u64 {
        self.elapsed_ms().saturating_sub(self.session_start_ms)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Menu → Running: fresh player and collections, clocks restarted
    pub fn start_session(&mut self) {
        let now = self.elapsed_ms();
        self.player = Player::new();
        self.bullets.clear();
        self.hazards.clear();
        self.score = 0;
        self.session_start_ms = now;
        self.last_bomb_spawn_ms = now;
        self.last_cloud_spawn_ms = now;
        self.game_over_at_ms = None;
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::SessionStarted);
        log::info!("session started (seed {})", self.seed);
    }

    /// Running → GameOver, recorded at the current derived-clock time
    pub fn enter_game_over(&mut self) {
        self.game_over_at_ms = Some(self.elapsed_ms());
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver);
        log::info!("game over: {} points", self.score);
    }

    /// GameOver → Menu
    pub fn return_to_menu(&mut self) {
        self.game_over_at_ms = None;
        self.phase = GamePhase::Menu;
        self.events.push(GameEvent::ReturnedToMenu);
    }

    /// Whether the game-over auto-return countdown has elapsed
    pub fn game_over_expired(&self) -> bool {
        self.game_over_at_ms
            .is_some_and(|at| self.elapsed_ms().saturating_sub(at) >= GAME_OVER_RETURN_MS)
    }

    /// Jump if grounded, emitting the event on success
    pub fn player_jump(&mut self) -> bool {
        if self.player.jump() {
            self.events.push(GameEvent::Jumped);
            return true;
        }
        false
    }

    /// Fire a bullet from the jet's top center, subject to the cooldown.
    /// Exactly one bullet is created per successful call.
    pub fn player_shoot(&mut self) -> bool {
        let now = self.elapsed_ms();
        if !self.player.can_shoot(now) {
            return false;
        }
        let muzzle = Vec2::new(self.player.rect.center().x, self.player.rect.top());
        let id = self.next_entity_id();
        self.bullets.push(Bullet::new(id, muzzle));
        self.player.mark_shot(now);
        self.events.push(GameEvent::ShotFired);
        true
    }

    /// Spawn a bomb at a random x above the screen with a random speed
    pub fn spawn_bomb(&mut self) {
        self.spawn_hazard(HazardKind::Bomb);
    }

    /// Spawn a decorative cloud; same motion rules, never collides
    pub fn spawn_cloud(&mut self) {
        self.spawn_hazard(HazardKind::Cloud);
    }

    fn spawn_hazard(&mut self, kind: HazardKind) {
        let x = self.rng.random_range(0..=SCREEN_WIDTH as i32) as f32;
        let y = self.rng.random_range(SPAWN_BAND_TOP..=SPAWN_BAND_BOTTOM) as f32;
        let speed = self
            .rng
            .random_range(HAZARD_SPEED_MIN..=HAZARD_SPEED_MAX) as f32;
        let id = self.next_entity_id();
        self.hazards.push(Hazard::new(id, kind, Vec2::new(x, y), speed));
    }

    /// Timed spawn cadences, driven once per running-phase tick
    pub(crate) fn run_spawn_timers(&mut self) {
        let now = self.elapsed_ms();
        while now.saturating_sub(self.last_bomb_spawn_ms) >= BOMB_SPAWN_MS {
            self.last_bomb_spawn_ms += BOMB_SPAWN_MS;
            self.spawn_bomb();
        }
        while now.saturating_sub(self.last_cloud_spawn_ms) >= CLOUD_SPAWN_MS {
            self.last_cloud_spawn_ms += CLOUD_SPAWN_MS;
            self.spawn_cloud();
        }
    }

    /// Take this tick's events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Ensure entity vectors stay sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.bullets.sort_by_key(|b| b.id);
        self.hazards.sort_by_key(|h| h.id);
    }
}
