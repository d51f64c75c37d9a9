//! Audio request layer
//!
//! The sim emits `GameEvent`s; this module translates them into
//! fire-and-forget playback requests for an external mixer. Nothing here
//! decodes, mixes, or waits on playback.

use crate::Settings;
use crate::sim::GameEvent;

/// Looped background tracks, one per phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    Menu,
    Game,
}

impl MusicTrack {
    /// Asset filename the mixer should load for this track
    pub fn asset(&self) -> &'static str {
        match self {
            MusicTrack::Menu => "Apoxode_-_Electric_1.mp3",
            MusicTrack::Game => "sb_indreams.mp3",
        }
    }
}

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Jet leaving the ground
    Jump,
    /// The hit that ends a session
    Collision,
}

impl SoundEffect {
    pub fn asset(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "Rising_putter.ogg",
            SoundEffect::Collision => "Collision.ogg",
        }
    }
}

/// The external playback subsystem. `play_music` loops until `stop_music`
/// or the next `play_music`; `play_sound` is one-shot.
pub trait AudioMixer {
    fn play_music(&mut self, track: MusicTrack, volume: f32);
    fn stop_music(&mut self);
    fn play_sound(&mut self, effect: SoundEffect, volume: f32);
}

/// Maps game events to mixer requests, applying volume preferences
pub struct AudioDirector {
    master_volume: f32,
    music_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioDirector {
    pub fn new(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn music(&self, track: MusicTrack, mixer: &mut dyn AudioMixer) {
        let vol = self.effective_music_volume();
        if vol <= 0.0 {
            return;
        }
        mixer.stop_music();
        mixer.play_music(track, vol);
    }

    fn sound(&self, effect: SoundEffect, mixer: &mut dyn AudioMixer) {
        let vol = self.effective_sfx_volume();
        if vol <= 0.0 {
            return;
        }
        mixer.play_sound(effect, vol);
    }

    /// Kick off the title-screen loop at startup
    pub fn boot(&self, mixer: &mut dyn AudioMixer) {
        self.music(MusicTrack::Menu, mixer);
    }

    /// Forward one tick's worth of drained events to the mixer
    pub fn dispatch(&self, events: &[GameEvent], mixer: &mut dyn AudioMixer) {
        for event in events {
            match event {
                GameEvent::SessionStarted => self.music(MusicTrack::Game, mixer),
                GameEvent::GameOver => {
                    self.sound(SoundEffect::Collision, mixer);
                    self.music(MusicTrack::Menu, mixer);
                }
                GameEvent::ReturnedToMenu => self.music(MusicTrack::Menu, mixer),
                GameEvent::Jumped => self.sound(SoundEffect::Jump, mixer),
                // No assets bound to these; they exist for logging
                GameEvent::ShotFired | GameEvent::BombDestroyed | GameEvent::PlayerHit => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingMixer {
        music: Vec<MusicTrack>,
        sounds: Vec<SoundEffect>,
        stops: usize,
    }

    impl AudioMixer for RecordingMixer {
        fn play_music(&mut self, track: MusicTrack, _volume: f32) {
            self.music.push(track);
        }
        fn stop_music(&mut self) {
            self.stops += 1;
        }
        fn play_sound(&mut self, effect: SoundEffect, _volume: f32) {
            self.sounds.push(effect);
        }
    }

    #[test]
    fn test_session_start_switches_to_game_track() {
        let director = AudioDirector::new(&Settings::default());
        let mut mixer = RecordingMixer::default();
        director.dispatch(&[GameEvent::SessionStarted], &mut mixer);
        assert_eq!(mixer.music, vec![MusicTrack::Game]);
        assert_eq!(mixer.stops, 1);
    }

    #[test]
    fn test_game_over_plays_collision_and_menu_track() {
        let director = AudioDirector::new(&Settings::default());
        let mut mixer = RecordingMixer::default();
        director.dispatch(&[GameEvent::GameOver], &mut mixer);
        assert_eq!(mixer.sounds, vec![SoundEffect::Collision]);
        assert_eq!(mixer.music, vec![MusicTrack::Menu]);
    }

    #[test]
    fn test_muted_director_stays_silent() {
        let mut director = AudioDirector::new(&Settings::default());
        director.set_muted(true);
        let mut mixer = RecordingMixer::default();
        director.boot(&mut mixer);
        director.dispatch(
            &[GameEvent::SessionStarted, GameEvent::Jumped, GameEvent::GameOver],
            &mut mixer,
        );
        assert!(mixer.music.is_empty());
        assert!(mixer.sounds.is_empty());
        assert_eq!(mixer.stops, 0);
    }
}
