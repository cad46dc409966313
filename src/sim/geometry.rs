//! Oriented boxes and the box-vs-circle overlap test
//!
//! Boxes are rebuilt from an entity's position every time they are needed,
//! so nothing here holds state between ticks.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Rotate `point` about `pivot` by the rotation whose sine is `direction.x`
/// and cosine is `direction.y`.
///
/// `direction` is expected to be unit length; it is not renormalized.
#[inline]
pub fn pivot_rotate(point: DVec2, pivot: DVec2, direction: DVec2) -> DVec2 {
    let shifted = point - pivot;
    DVec2::new(
        pivot.x + shifted.x * direction.y - shifted.y * direction.x,
        pivot.y + shifted.x * direction.x + shifted.y * direction.y,
    )
}

/// A rectangle collider with arbitrary rotation, stored as its corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientedBox {
    pub center: DVec2,
    /// Corners in winding order
    pub vertices: [DVec2; 4],
}

impl OrientedBox {
    pub fn new(center: DVec2, vertices: [DVec2; 4]) -> Self {
        Self { center, vertices }
    }

    /// Axis-aligned box spanning `center ± half`
    pub fn axis_aligned(center: DVec2, half: DVec2) -> Self {
        Self {
            center,
            vertices: [
                DVec2::new(center.x - half.x, center.y - half.y),
                DVec2::new(center.x + half.x, center.y - half.y),
                DVec2::new(center.x + half.x, center.y + half.y),
                DVec2::new(center.x - half.x, center.y + half.y),
            ],
        }
    }

    /// Rotate every corner about the center in place
    pub fn rotate(&mut self, direction: DVec2) {
        for vertex in &mut self.vertices {
            *vertex = pivot_rotate(*vertex, self.center, direction);
        }
    }

    /// Builder form of [`OrientedBox::rotate`]
    pub fn rotated(mut self, direction: DVec2) -> Self {
        self.rotate(direction);
        self
    }

    /// Single-axis overlap test against a circle.
    ///
    /// Only the axis from the box center to the circle center is checked, so
    /// this can report overlaps near box corners that a full SAT test would
    /// reject. A circle centered exactly on the box center always overlaps.
    pub fn intersects_circle(&self, circle_center: DVec2, radius: f64) -> bool {
        let axis = circle_center - self.center;
        let axis_magnitude = axis.length();
        if axis_magnitude <= 0.0 {
            log::trace!("degenerate collision axis at {:?}", self.center);
            return true;
        }
        let axis_norm = axis / axis_magnitude;

        let max_projection = self
            .vertices
            .iter()
            .map(|v| (self.center - *v).dot(axis_norm))
            .fold(f64::NEG_INFINITY, f64::max);

        axis_magnitude - radius - max_projection <= 0.0
    }

    /// Edges in winding order, for outline drawing
    pub fn edges(&self) -> [(DVec2, DVec2); 4] {
        let v = &self.vertices;
        [(v[0], v[1]), (v[1], v[2]), (v[2], v[3]), (v[3], v[0])]
    }

    pub fn translated(&self, offset: DVec2) -> Self {
        Self {
            center: self.center + offset,
            vertices: self.vertices.map(|v| v + offset),
        }
    }
}

/// Collision shape of a body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Collider {
    Circle { center: DVec2, radius: f64 },
    Box(OrientedBox),
}

impl Collider {
    /// Overlap test against a circle.
    ///
    /// Circle-vs-circle is exact; box-vs-circle uses the single-axis test.
    pub fn intersects_circle(&self, circle_center: DVec2, radius: f64) -> bool {
        match self {
            Collider::Circle { center, radius: r } => {
                center.distance(circle_center) <= r + radius
            }
            Collider::Box(b) => b.intersects_circle(circle_center, radius),
        }
    }
}
