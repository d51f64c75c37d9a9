//! Jetfall entry point
//!
//! Native shell around the deterministic core: logger init, a fixed-rate
//! drive loop, and a scripted autopilot standing in for a human, so the
//! whole stack (sim, frame composition, audio requests, high scores) runs
//! headlessly. Window, compositor, and mixer integrations plug in at the
//! same seams the autopilot and log mixer use.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use jetfall::audio::{AudioDirector, AudioMixer, MusicTrack, SoundEffect};
use jetfall::consts::*;
use jetfall::render::compose_frame;
use jetfall::sim::{GameEvent, GamePhase, GameState, HazardKind, TickInput, tick};
use jetfall::{HighScores, Settings};

/// Stand-in for the external mixer: requests become log lines
struct LogMixer;

impl AudioMixer for LogMixer {
    fn play_music(&mut self, track: MusicTrack, volume: f32) {
        log::info!("audio: loop {} at {volume:.2}", track.asset());
    }

    fn stop_music(&mut self) {
        log::info!("audio: stop music");
    }

    fn play_sound(&mut self, effect: SoundEffect, volume: f32) {
        log::info!("audio: one-shot {} at {volume:.2}", effect.asset());
    }
}

/// Scripted input: start from the menu, then dodge the nearest bomb and
/// shoot on a steady cadence.
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();

    match state.phase {
        GamePhase::Menu => input.start = true,
        GamePhase::Running => {
            let player_x = state.player.rect.center().x;
            let threat = state
                .hazards
                .iter()
                .filter(|h| h.kind == HazardKind::Bomb && h.rect.bottom() > 250.0)
                .min_by(|a, b| {
                    let da = (a.rect.center().x - player_x).abs();
                    let db = (b.rect.center().x - player_x).abs();
                    da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
                });

            if let Some(bomb) = threat {
                let dx = bomb.rect.center().x - player_x;
                if dx.abs() < 120.0 {
                    // Steer away; hop if it is already close
                    input.left = dx >= 0.0;
                    input.right = dx < 0.0;
                    if bomb.rect.bottom() > 450.0 {
                        input.jump = true;
                    }
                }
            }

            input.shoot = state.time_ticks % 10 == 0;
        }
        GamePhase::GameOver => {}
    }

    input
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(unix_now);

    let settings = Settings::load();
    let mut highscores = HighScores::load();
    let director = AudioDirector::new(&settings);
    let mut mixer = LogMixer;

    let mut state = GameState::new(seed);
    log::info!("jetfall starting (seed {seed})");
    director.boot(&mut mixer);

    let tick_duration = Duration::from_millis(1000 / TICK_RATE);
    let mut last_fps_report = Instant::now();
    let mut ticks_since_report = 0u64;

    // Demo run: one full session, capped so a lucky autopilot still exits
    let max_ticks = TICK_RATE * 120;
    let mut session_done = false;

    loop {
        let tick_start = Instant::now();

        let input = autopilot(&state);
        tick(&mut state, &input);

        for event in state.drain_events() {
            log::debug!("event: {event:?}");
            director.dispatch(&[event], &mut mixer);
            if event == GameEvent::GameOver {
                session_done = true;
                let rank = highscores.add_score(state.score, state.score, unix_now());
                match rank {
                    Some(rank) => log::info!("run ended: {} points, rank {rank}", state.score),
                    None => log::info!("run ended: {} points", state.score),
                }
                if let Err(err) = highscores.save() {
                    log::warn!("could not save high scores: {err}");
                }
            }
        }

        let frame = compose_frame(&state, &settings);
        log::trace!(
            "frame: {} draws, hud {:?}",
            frame.draws.len(),
            frame.hud.iter().map(|t| t.text.as_str()).collect::<Vec<_>>()
        );

        if settings.show_fps {
            ticks_since_report += 1;
            if last_fps_report.elapsed() >= Duration::from_secs(1) {
                log::info!("{ticks_since_report} ticks/s");
                ticks_since_report = 0;
                last_fps_report = Instant::now();
            }
        }

        if state.exit_requested
            || (session_done && state.phase == GamePhase::Menu)
            || state.time_ticks >= max_ticks
        {
            break;
        }

        std::thread::sleep(tick_duration.saturating_sub(tick_start.elapsed()));
    }

    log::info!(
        "demo finished after {} ticks; best score {}",
        state.time_ticks,
        highscores.top_score().unwrap_or(0)
    );
}
