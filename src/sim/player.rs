//! The player's ship and its hit/blink state

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Collider, OrientedBox};
use super::input::TickInput;
use super::projectile::Projectile;
use super::turret::Turret;
use super::window::Window;
use crate::assets::Sprite;
use crate::error::SimError;

/// Blink levels this close to an end of the ramp count as reaching it
const BLINK_EPSILON: f64 = 1e-9;

/// Invulnerability blink after a meteor strike
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HitState {
    pub in_hit: bool,
    /// Tint strength, 0.0 - 1.0
    pub blink_level: f64,
    pub blink_rising: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: DVec2,
    pub sprite: Sprite,
    /// Pixels per tick
    pub speed: f64,
    pub turret: Turret,
    pub hit: HitState,
    /// Blink change per tick
    pub blink_rate: f64,
}

impl Player {
    pub fn new(position: DVec2, sprite: Sprite, speed: f64, blink_rate: f64, turret: Turret) -> Self {
        let mut turret = turret;
        turret.position = position;
        Self {
            position,
            sprite,
            speed,
            turret,
            hit: HitState::default(),
            blink_rate,
        }
    }

    pub fn in_hit(&self) -> bool {
        self.hit.in_hit
    }

    /// Advance one tick. While hit, input is ignored and only the blink ramp
    /// runs. Returns the projectile fired this tick, if any.
    pub fn update(&mut self, input: &TickInput, window: &Window) -> Result<Option<Projectile>, SimError> {
        if self.hit.in_hit {
            self.advance_blink();
            return Ok(None);
        }

        self.update_position(input, window);

        let shot = self.turret.update(input, self.position);
        if !self.turret.rotation.is_finite() {
            return Err(SimError::NonFiniteRotation { entity: "turret" });
        }
        Ok(shot)
    }

    /// Move from the arrow keys and keep the hull inside the window
    pub fn update_position(&mut self, input: &TickInput, window: &Window) {
        let mut delta = DVec2::ZERO;
        if input.down {
            delta.y = self.speed;
        }
        if input.up {
            delta.y = -self.speed;
        }
        if input.left {
            delta.x = -self.speed;
        }
        if input.right {
            delta.x = self.speed;
        }

        // Diagonals move at the same speed as straight lines
        if delta.x != 0.0 && delta.y != 0.0 {
            delta *= self.speed / delta.length();
        }

        self.position += delta;
        self.clamp_to_window(window);
    }

    pub fn clamp_to_window(&mut self, window: &Window) {
        let (half_w, half_h) = self.sprite.halves();
        self.position.x = self.position.x.max(half_w).min(window.width() - half_w);
        self.position.y = self.position.y.max(half_h).min(window.height() - half_h);
    }

    /// Enter the hit state and restart the blink ramp
    pub fn hit(&mut self) {
        self.hit = HitState {
            in_hit: true,
            blink_level: 0.0,
            blink_rising: true,
        };
    }

    fn advance_blink(&mut self) {
        let hit = &mut self.hit;
        if hit.blink_rising {
            hit.blink_level += self.blink_rate;
            if hit.blink_level >= 1.0 - BLINK_EPSILON {
                hit.blink_level = 1.0;
                hit.blink_rising = false;
            }
        } else {
            hit.blink_level -= self.blink_rate;
            if hit.blink_level <= BLINK_EPSILON {
                hit.blink_level = 0.0;
                hit.in_hit = false;
            }
        }
    }

    /// Whole-hull box, centered on the position and never rotated
    pub fn bounding_box(&self) -> OrientedBox {
        let (half_w, half_h) = self.sprite.halves();
        OrientedBox::axis_aligned(self.position, DVec2::new(half_w, half_h))
    }

    pub fn collider(&self) -> Collider {
        Collider::Box(self.bounding_box())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::TurretControl;
    use crate::sim::turret::TurretSpec;

    const TPS: u32 = 60;

    fn player() -> Player {
        let turret = Turret::new(
            Sprite::new(1, 24, 66),
            TurretSpec {
                control: TurretControl::Keyboard,
                ticks_per_second: TPS,
                fire_cooldown_ticks: 30,
                projectile_sprite: Sprite::new(2, 9, 37),
                projectile_speed: 4.0,
            },
        );
        Player::new(
            DVec2::new(800.0, 600.0),
            Sprite::new(0, 99, 75),
            10.0,
            2.5 / f64::from(TPS),
            turret,
        )
    }

    fn window() -> Window {
        Window::new(1600, 1200)
    }

    #[test]
    fn test_move_right_clamps_at_edge() {
        let mut p = player();
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        let ticks = (window().width() / 2.0 / p.speed).ceil() as usize;
        for _ in 0..ticks {
            p.update(&input, &window()).unwrap();
        }
        let (half_w, _) = p.sprite.halves();
        assert_eq!(p.position.x, 1600.0 - half_w);
        assert_eq!(p.position.y, 600.0);
    }

    #[test]
    fn test_diagonal_is_renormalized() {
        let mut p = player();
        let input = TickInput {
            up: true,
            left: true,
            ..Default::default()
        };
        p.update(&input, &window()).unwrap();
        let moved = p.position - DVec2::new(800.0, 600.0);
        assert!((moved.length() - 10.0).abs() < 1e-9);
        assert!(moved.x < 0.0 && moved.y < 0.0);
    }

    #[test]
    fn test_later_key_overrides_on_same_axis() {
        let mut p = player();
        let input = TickInput {
            up: true,
            down: true,
            left: true,
            right: true,
            ..Default::default()
        };
        p.update(&input, &window()).unwrap();
        // Up beats down, right beats left, then the diagonal is renormalized
        let moved = p.position - DVec2::new(800.0, 600.0);
        assert!(moved.x > 0.0 && moved.y < 0.0);
    }

    #[test]
    fn test_clamp_top_left() {
        let mut p = player();
        p.position = DVec2::new(-50.0, -50.0);
        p.clamp_to_window(&window());
        assert_eq!(p.position, DVec2::new(49.0, 37.0));
    }

    #[test]
    fn test_hit_cycle_length() {
        let mut p = player();
        p.hit();
        assert!(p.in_hit());

        let expected = (2.0 / p.blink_rate).round() as usize;
        assert_eq!(expected, 48);

        let idle = TickInput::default();
        for tick in 1..expected {
            p.update(&idle, &window()).unwrap();
            assert!(p.in_hit(), "left hit state early at tick {tick}");
        }
        p.update(&idle, &window()).unwrap();
        assert!(!p.in_hit());
        assert_eq!(p.hit.blink_level, 0.0);
    }

    #[test]
    fn test_blink_peaks_at_one() {
        let mut p = player();
        p.hit();
        let idle = TickInput::default();
        for _ in 0..24 {
            p.update(&idle, &window()).unwrap();
        }
        assert_eq!(p.hit.blink_level, 1.0);
        assert!(!p.hit.blink_rising);
    }

    #[test]
    fn test_input_ignored_while_hit() {
        let mut p = player();
        p.hit();
        let input = TickInput {
            right: true,
            fire: true,
            ..Default::default()
        };
        for _ in 0..47 {
            assert!(p.update(&input, &window()).unwrap().is_none());
        }
        assert_eq!(p.position, DVec2::new(800.0, 600.0));

        // Last blink tick still ignores input, the next one moves
        p.update(&input, &window()).unwrap();
        assert_eq!(p.position.x, 800.0);
        let shot = p.update(&input, &window()).unwrap();
        assert_eq!(p.position.x, 810.0);
        assert!(shot.is_some());
    }

    #[test]
    fn test_box_is_hull_sized() {
        let p = player();
        let b = p.bounding_box();
        assert_eq!(b.vertices[0], DVec2::new(751.0, 563.0));
        assert_eq!(b.vertices[2], DVec2::new(849.0, 637.0));
    }

    #[test]
    fn test_non_finite_turret_is_an_error() {
        let mut p = player();
        p.turret.rotation = f64::NAN;
        assert_eq!(
            p.update(&TickInput::default(), &window()),
            Err(SimError::NonFiniteRotation { entity: "turret" })
        );
    }
}
