//! Drifting, spinning meteors

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::geometry::Collider;
use super::window::Window;
use crate::assets::Sprite;
use crate::consts::METEOR_SCALE;
use crate::{base_tick_speed, heading};

use std::f64::consts::{PI, TAU};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meteor {
    pub position: DVec2,
    /// Unit travel direction, fixed at launch
    pub direction: DVec2,
    /// Pixels per tick
    pub velocity: f64,
    /// Current sprite angle
    pub rotation: f64,
    /// Radians per tick
    pub spin: f64,
    pub sprite: Sprite,
    pub scale: f64,
}

impl Meteor {
    pub fn new(position: DVec2, angle: f64, velocity: f64, spin: f64, sprite: Sprite) -> Self {
        Self {
            position,
            direction: heading(angle),
            velocity,
            rotation: 0.0,
            spin,
            sprite,
            scale: METEOR_SCALE,
        }
    }

    /// Roll a new meteor entering from the top edge, heading roughly down
    pub fn spawn<R: Rng>(rng: &mut R, sprites: &[Sprite], window: &Window, ticks_per_second: u32) -> Self {
        let sprite = sprites[rng.random_range(0..sprites.len())];
        let position = DVec2::new(
            f64::from(rng.random_range(0..window.width)),
            sprite.width() / 2.0,
        );
        let tps = f64::from(ticks_per_second);
        let velocity = base_tick_speed(window.height, ticks_per_second) / 5.0;
        let spin = (PI * (rng.random::<f64>() - 0.5) * 1.5) / tps;
        let angle = PI + (rng.random::<f64>() - 0.5) * PI / 7.0;

        log::trace!(
            "spawn meteor at {:?} angle {:.3} velocity {} spin {:.4}",
            position,
            angle,
            velocity,
            spin
        );
        Self::new(position, angle, velocity, spin, sprite)
    }

    pub fn radius(&self) -> f64 {
        self.scale * self.sprite.width() / 2.0
    }

    /// Outside the window expanded by a full window size plus the radius.
    /// Meteors linger well off screen before being dropped.
    pub fn is_far_away(&self, window: &Window) -> bool {
        let r = self.radius();
        let (w, h) = (window.width(), window.height());
        let p = self.position;
        p.x < -w - r || p.x > 2.0 * w + r || p.y < -h - r || p.y > 2.0 * h + r
    }
}

impl Body for Meteor {
    fn update(&mut self) {
        self.rotation += self.spin;
        // Reflects rather than wraps; the visible jump is part of the look
        if self.rotation > TAU {
            self.rotation = TAU - self.rotation;
        }

        self.position.x += self.velocity * self.direction.x;
        self.position.y -= self.velocity * self.direction.y;
    }

    fn collider(&self) -> Collider {
        Collider::Circle {
            center: self.position,
            radius: self.radius(),
        }
    }

    fn is_expired(&self, window: &Window) -> bool {
        self.is_far_away(window)
    }
}
