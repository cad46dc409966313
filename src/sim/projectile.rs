//! Turret projectiles

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::geometry::{Collider, OrientedBox};
use super::window::Window;
use crate::assets::Sprite;
use crate::heading;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: DVec2,
    /// Unit travel direction, `(sin, cos)` of the launch angle
    pub direction: DVec2,
    /// Launch angle, kept for drawing
    pub rotation: f64,
    /// Pixels per tick
    pub speed: f64,
    pub sprite: Sprite,
}

impl Projectile {
    /// Launch from `origin`, starting `distance` pixels ahead along `angle`
    pub fn new(origin: DVec2, angle: f64, distance: f64, speed: f64, sprite: Sprite) -> Self {
        let direction = heading(angle);
        Self {
            position: DVec2::new(
                origin.x + direction.x * distance,
                origin.y - direction.y * distance,
            ),
            direction,
            rotation: angle,
            speed,
            sprite,
        }
    }

    /// Rotation pivot in sprite-local pixels: the tail center
    pub fn pivot(&self) -> DVec2 {
        DVec2::new(self.sprite.width() / 2.0, self.sprite.height())
    }

    /// Inside the window expanded by the sprite diagonal on every side
    pub fn is_in_window(&self, window: &Window) -> bool {
        let margin = self.sprite.diagonal();
        let p = self.position;
        p.x >= -margin
            && p.x <= window.width() + margin
            && p.y >= -margin
            && p.y <= window.height() + margin
    }

    /// Sprite rectangle rotated about the position by the travel direction
    pub fn bounding_box(&self) -> OrientedBox {
        let pivot = self.pivot();
        let (w, h) = (self.sprite.width(), self.sprite.height());
        let p = self.position;
        OrientedBox::new(
            p,
            [
                DVec2::new(p.x - pivot.x, p.y - pivot.y),
                DVec2::new(p.x + pivot.x, p.y - pivot.y),
                DVec2::new(p.x + w - pivot.x, p.y + h - pivot.y),
                DVec2::new(p.x - w + pivot.x, p.y + h - pivot.y),
            ],
        )
        .rotated(self.direction)
    }
}

impl Body for Projectile {
    fn update(&mut self) {
        self.position.x += self.speed * self.direction.x;
        self.position.y -= self.speed * self.direction.y;
    }

    fn collider(&self) -> Collider {
        Collider::Box(self.bounding_box())
    }

    fn is_expired(&self, window: &Window) -> bool {
        !self.is_in_window(window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn sprite() -> Sprite {
        Sprite::new(0, 9, 37)
    }

    #[test]
    fn test_launch_offset_ahead_of_origin() {
        let p = Projectile::new(DVec2::new(100.0, 100.0), 0.0, 44.0, 4.0, sprite());
        assert!((p.position - DVec2::new(100.0, 56.0)).length() < 1e-9);

        let p = Projectile::new(DVec2::new(100.0, 100.0), FRAC_PI_2, 10.0, 4.0, sprite());
        assert!((p.position - DVec2::new(110.0, 100.0)).length() < 1e-9);
    }

    #[test]
    fn test_moves_up_screen_at_angle_zero() {
        let mut p = Projectile::new(DVec2::new(800.0, 600.0), 0.0, 0.0, 4.0, sprite());
        for _ in 0..10 {
            p.update();
        }
        assert!((p.position - DVec2::new(800.0, 560.0)).length() < 1e-9);
    }

    #[test]
    fn test_moves_down_screen_at_angle_pi() {
        let mut p = Projectile::new(DVec2::new(800.0, 600.0), PI, 0.0, 4.0, sprite());
        p.update();
        assert!((p.position.y - 604.0).abs() < 1e-9);
    }

    #[test]
    fn test_expires_past_margin() {
        let window = Window::new(1600, 1200);
        let margin = sprite().diagonal();
        let mut p = Projectile::new(DVec2::new(800.0, -margin + 1.0), 0.0, 0.0, 4.0, sprite());
        assert!(!p.is_expired(&window));
        assert!(!p.step(&window));
    }

    #[test]
    fn test_bottom_edge_is_expanded_too() {
        let window = Window::new(1600, 1200);
        let p = Projectile::new(DVec2::new(800.0, 1210.0), PI, 0.0, 4.0, sprite());
        assert!(p.is_in_window(&window));
    }

    #[test]
    fn test_box_upright() {
        let p = Projectile::new(DVec2::new(50.0, 50.0), 0.0, 0.0, 4.0, Sprite::new(0, 10, 20));
        let b = p.bounding_box();
        assert!((b.vertices[0] - DVec2::new(45.0, 30.0)).length() < 1e-9);
        assert!((b.vertices[1] - DVec2::new(55.0, 30.0)).length() < 1e-9);
        assert!((b.vertices[2] - DVec2::new(55.0, 50.0)).length() < 1e-9);
        assert!((b.vertices[3] - DVec2::new(45.0, 50.0)).length() < 1e-9);
    }

    #[test]
    fn test_box_follows_direction() {
        // Pointing right, the body extends to the right of the position
        let p = Projectile::new(DVec2::new(50.0, 50.0), FRAC_PI_2, 0.0, 4.0, Sprite::new(0, 10, 20));
        let b = p.bounding_box();
        let max_x = b.vertices.iter().map(|v| v.x).fold(f64::NEG_INFINITY, f64::max);
        assert!((max_x - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlap_reach_is_mirrored_through_position() {
        // The overlap test projects (center - vertex), so with the position at
        // the tail the box reaches backwards, not along its length.
        let p = Projectile::new(DVec2::new(50.0, 50.0), FRAC_PI_2, 0.0, 4.0, Sprite::new(0, 10, 20));
        let collider = p.collider();
        assert!(collider.intersects_circle(DVec2::new(30.0, 50.0), 1.0));
        assert!(!collider.intersects_circle(DVec2::new(68.0, 50.0), 1.0));
        assert!(collider.intersects_circle(DVec2::new(68.0, 50.0), 18.5));
    }
}
