//! Meteor Shooter - a turret-and-meteors arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, hit state)
//! - `render`: Draw list handed to the host renderer
//! - `audio`: Sound effect dispatch to a host audio backend
//! - `assets`: Sprite metadata catalog
//! - `settings`: Data-driven configuration

pub mod assets;
pub mod audio;
pub mod error;
pub mod render;
pub mod settings;
pub mod sim;

pub use assets::{AssetCatalog, Sprite, SpriteId};
pub use audio::{AudioBackend, AudioManager, SoundEffect};
pub use error::{AssetError, ConfigError, SimError};
pub use settings::{Settings, TurretControl};

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Logical window width in pixels
    pub const WINDOW_WIDTH: u32 = 1600;
    /// Logical window height in pixels
    pub const WINDOW_HEIGHT: u32 = 1200;
    /// Fixed logic rate
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Turret fire cooldown
    pub const FIRE_COOLDOWN_MS: u32 = 500;
    /// Base meteor spawn interval; a random jitter is added once per run
    pub const METEOR_SPAWN_BASE_MS: u32 = 900;
    pub const METEOR_SPAWN_JITTER_MS: u32 = 100;

    /// Meteors are drawn and collide at half their sprite size
    pub const METEOR_SCALE: f64 = 0.5;

    /// Turret angular speed in radians per second
    pub const TURRET_TURN_RATE: f64 = 1.2 * std::f64::consts::PI;
    /// Blink ramp speed in levels per second (0 -> 1 takes 0.4 s)
    pub const BLINK_RATE: f64 = 2.5;
}

/// Unit vector for an angle measured clockwise from "up".
///
/// Returned as `(sin, cos)`; movement code subtracts the Y component because
/// screen Y grows downward.
#[inline]
pub fn heading(angle: f64) -> DVec2 {
    DVec2::new(angle.sin(), angle.cos())
}

/// Integer per-tick base speed all entity speeds derive from:
/// `window_height / tps` truncated before it is scaled.
#[inline]
pub fn base_tick_speed(window_height: u32, ticks_per_second: u32) -> f64 {
    f64::from(window_height / ticks_per_second.max(1))
}

/// Whole ticks in `ms` milliseconds at the given rate, saturating at `u32::MAX`
#[inline]
pub fn millis_to_ticks(ms: u32, ticks_per_second: u32) -> u32 {
    let ticks = u64::from(ms) * u64::from(ticks_per_second) / 1000;
    u32::try_from(ticks).unwrap_or(u32::MAX)
}
