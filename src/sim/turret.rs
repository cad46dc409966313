//! The ship's rotating gun

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::input::TickInput;
use super::projectile::Projectile;
use super::timer::Timer;
use crate::assets::Sprite;
use crate::consts::TURRET_TURN_RATE;
use crate::settings::TurretControl;

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Fixed values the turret needs from configuration and assets
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TurretSpec {
    pub control: TurretControl,
    pub ticks_per_second: u32,
    pub fire_cooldown_ticks: u32,
    pub projectile_sprite: Sprite,
    /// Pixels per tick
    pub projectile_speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turret {
    /// Mirrors the player position every tick
    pub position: DVec2,
    /// Radians clockwise from straight up
    pub rotation: f64,
    pub cooldown: Timer,
    pub sprite: Sprite,
    spec: TurretSpec,
}

impl Turret {
    pub fn new(sprite: Sprite, spec: TurretSpec) -> Self {
        Self {
            position: DVec2::ZERO,
            rotation: 0.0,
            cooldown: Timer::ready(spec.fire_cooldown_ticks),
            sprite,
            spec,
        }
    }

    /// Rotation pivot in sprite-local pixels
    pub fn pivot(&self) -> DVec2 {
        DVec2::new(self.sprite.width() / 2.0, self.muzzle_distance())
    }

    /// Distance from the pivot to the muzzle: two thirds of the sprite height
    pub fn muzzle_distance(&self) -> f64 {
        self.sprite.height() * 2.0 / 3.0
    }

    /// Follow the player, steer, and fire when the cooldown allows.
    /// Returns the projectile fired this tick, if any.
    pub fn update(&mut self, input: &TickInput, player_position: DVec2) -> Option<Projectile> {
        self.position = player_position;
        self.handle_rotation(input);

        self.cooldown.update();
        if self.cooldown.is_ready() && input.fire {
            self.cooldown.reset();
            return Some(Projectile::new(
                self.position,
                self.rotation,
                self.muzzle_distance(),
                self.spec.projectile_speed,
                self.spec.projectile_sprite,
            ));
        }
        None
    }

    fn handle_rotation(&mut self, input: &TickInput) {
        if self.spec.control == TurretControl::AimSnap {
            if let Some(angle) = snap_angle(input) {
                self.rotation = angle;
            }
        }

        let speed = TURRET_TURN_RATE / f64::from(self.spec.ticks_per_second);
        if input.rotate_reset {
            self.rotation = 0.0;
        }
        if input.rotate_left {
            self.rotation -= speed;
        }
        if input.rotate_right {
            self.rotation += speed;
        }
    }
}

/// Eight-way aim from the W/A/S/D keys; diagonals win over single keys
pub fn snap_angle(input: &TickInput) -> Option<f64> {
    let (up, down, left, right) = (input.aim_up, input.aim_down, input.aim_left, input.aim_right);
    if up && right {
        Some(FRAC_PI_4)
    } else if up && left {
        Some(-FRAC_PI_4)
    } else if down && right {
        Some(3.0 * FRAC_PI_4)
    } else if down && left {
        Some(-3.0 * FRAC_PI_4)
    } else if up {
        Some(0.0)
    } else if down {
        Some(PI)
    } else if right {
        Some(FRAC_PI_2)
    } else if left {
        Some(-FRAC_PI_2)
    } else {
        None
    }
}
