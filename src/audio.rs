//! Audio dispatch
//!
//! The simulation only decides *which* sound plays. Decoding and mixing belong
//! to the host, which plugs in an `AudioBackend`. The manager is built once at
//! startup and handed the events drained from each tick.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Turret fired a projectile
    Shoot,
    /// Meteor struck the player
    PlayerHit,
    /// Projectile destroyed a meteor
    MeteorExplode,
}

impl SoundEffect {
    /// Asset file the host should load for this effect
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Shoot => "sfx/canon_shoot.ogg",
            SoundEffect::PlayerHit => "sfx/player_hit.ogg",
            SoundEffect::MeteorExplode => "sfx/meteor_explode.ogg",
        }
    }
}

/// Host-side sound output. Fire-and-forget: a failed play is the host's problem.
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("play {:?} ({}) at volume {:.2}", effect, effect.file_name(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn AudioBackend>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(LogBackend))
    }
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Create a manager with volumes taken from settings
    pub fn from_settings(backend: Box<dyn AudioBackend>, settings: &Settings) -> Self {
        let mut manager = Self::new(backend);
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager.set_muted(settings.muted);
        if manager.muted {
            log::warn!("Audio muted by settings");
        }
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play(effect, vol);
    }

    /// Play the sounds attached to a batch of simulation events
    pub fn play_events<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) {
        for event in events {
            self.play(event.sound());
        }
    }
}
