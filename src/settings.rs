//! Game settings and preferences
//!
//! Loaded from a JSON file next to the binary; every field has a default so a
//! partial file is fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// How the aim keys steer the turret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TurretControl {
    /// Rotate-left / rotate-right / reset keys only
    #[default]
    Keyboard,
    /// W/A/S/D snap the turret to one of 8 directions (the rotate keys still work)
    AimSnap,
}

impl TurretControl {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurretControl::Keyboard => "keyboard",
            TurretControl::AimSnap => "aim_snap",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "keyboard" | "keys" => Some(TurretControl::Keyboard),
            "aim_snap" | "aimsnap" | "wasd" => Some(TurretControl::AimSnap),
            _ => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Simulation ===
    /// Logical window width (simulation bounds, not the physical window)
    pub window_width: u32,
    /// Logical window height
    pub window_height: u32,
    /// Logic ticks per second
    pub ticks_per_second: u32,
    /// RNG seed for meteor spawning; `None` picks one at startup
    pub seed: Option<u64>,

    // === Controls ===
    pub turret_control: TurretControl,

    // === Tuning ===
    pub fire_cooldown_ms: u32,
    pub meteor_spawn_base_ms: u32,
    pub meteor_spawn_jitter_ms: u32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            ticks_per_second: TICKS_PER_SECOND,
            seed: None,

            turret_control: TurretControl::Keyboard,

            fire_cooldown_ms: FIRE_COOLDOWN_MS,
            meteor_spawn_base_ms: METEOR_SPAWN_BASE_MS,
            meteor_spawn_jitter_ms: METEOR_SPAWN_JITTER_MS,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string and validate them
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file does not exist.
    /// A file that exists but is broken is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::warn!("No config at {}, using default settings", path.display());
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Invalid {
                field: "window_width/window_height",
                reason: format!("window must be non-empty, got {}x{}", self.window_width, self.window_height),
            });
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::Invalid {
                field: "ticks_per_second",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.window_height < self.ticks_per_second {
            // Per-tick speeds are derived from window_height / tps and would be zero
            return Err(ConfigError::Invalid {
                field: "ticks_per_second",
                reason: format!(
                    "must not exceed window_height ({} > {})",
                    self.ticks_per_second, self.window_height
                ),
            });
        }
        for (field, value) in [("master_volume", self.master_volume), ("sfx_volume", self.sfx_volume)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("expected 0.0 - 1.0, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Convert a millisecond duration to whole ticks at the configured rate
    pub fn ms_to_ticks(&self, ms: u32) -> u32 {
        crate::millis_to_ticks(ms, self.ticks_per_second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.window_width, 1600);
        assert_eq!(settings.window_height, 1200);
        assert_eq!(settings.ticks_per_second, 60);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "turret_control": "aim_snap", "seed": 7 }"#).unwrap();
        assert_eq!(settings.turret_control, TurretControl::AimSnap);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.window_width, WINDOW_WIDTH);
    }

    #[test]
    fn test_zero_tps_rejected() {
        let err = Settings::from_json(r#"{ "ticks_per_second": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "ticks_per_second", .. }));
    }

    #[test]
    fn test_out_of_range_volume_rejected() {
        let err = Settings::from_json(r#"{ "sfx_volume": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "sfx_volume", .. }));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(Settings::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.turret_control = TurretControl::AimSnap;
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_ms_to_ticks() {
        let settings = Settings::default();
        assert_eq!(settings.ms_to_ticks(500), 30);
        assert_eq!(settings.ms_to_ticks(950), 57);
    }

    #[test]
    fn test_huge_durations_do_not_overflow() {
        let settings = Settings::from_json(r#"{ "fire_cooldown_ms": 100000000 }"#).unwrap();
        assert_eq!(settings.ms_to_ticks(settings.fire_cooldown_ms), 6_000_000);
        assert_eq!(settings.ms_to_ticks(u32::MAX), 257_698_037);
    }

    #[test]
    fn test_volume_setters_clamp() {
        let mut settings = Settings::default();
        settings.set_master_volume(2.0);
        settings.set_sfx_volume(-1.0);
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn test_turret_control_from_str() {
        assert_eq!(TurretControl::from_str("WASD"), Some(TurretControl::AimSnap));
        assert_eq!(TurretControl::from_str("keyboard"), Some(TurretControl::Keyboard));
        assert_eq!(TurretControl::from_str("mouse"), None);
        assert_eq!(TurretControl::AimSnap.as_str(), "aim_snap");
    }
}
