//! Draw list construction

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::colors;
use crate::assets::SpriteId;
use crate::sim::{Body, Collider, GameState, Window};

/// Border line width in pixels
const BORDER_WIDTH: f32 = 2.0;
/// Collider outline width in pixels
const OUTLINE_WIDTH: f32 = 1.0;

/// One sprite blit.
///
/// The host translates the unrotated sprite so its top-left corner lands on
/// `top_left`, rotates it by `rotation` about the sprite-local `pivot`, then
/// applies `scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub sprite: SpriteId,
    /// Entity position in window pixels
    pub position: DVec2,
    pub top_left: DVec2,
    /// Radians clockwise
    pub rotation: f64,
    pub pivot: DVec2,
    pub scale: f64,
    /// Additive RGBA tint
    pub tint: [f32; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub from: DVec2,
    pub to: DVec2,
    pub width: f32,
    pub color: [f32; 4],
}

/// Everything to draw for one frame, in back-to-front order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    pub sprites: Vec<DrawCommand>,
    pub lines: Vec<LineSegment>,
}

/// Build the frame: player hull, turret, projectiles, meteors, then the
/// window border.
pub fn build_draw_list(state: &GameState) -> DrawList {
    let mut list = DrawList {
        sprites: Vec::with_capacity(2 + state.projectiles.len() + state.meteors.len()),
        lines: Vec::with_capacity(4),
    };

    let player = &state.player;
    let b = player.hit.blink_level as f32;
    let blink = [b, b, b, 0.0];
    let (half_w, half_h) = player.sprite.halves();
    list.sprites.push(DrawCommand {
        sprite: player.sprite.id,
        position: player.position,
        top_left: player.position - DVec2::new(half_w, half_h),
        rotation: 0.0,
        pivot: DVec2::new(half_w, half_h),
        scale: 1.0,
        tint: blink,
    });

    // The turret sprite is centered on the hull and turns about its pivot
    let turret = &player.turret;
    let (half_w, half_h) = turret.sprite.halves();
    list.sprites.push(DrawCommand {
        sprite: turret.sprite.id,
        position: turret.position,
        top_left: turret.position - DVec2::new(half_w, half_h),
        rotation: turret.rotation,
        pivot: turret.pivot(),
        scale: 1.0,
        tint: blink,
    });

    for projectile in &state.projectiles {
        let pivot = projectile.pivot();
        list.sprites.push(DrawCommand {
            sprite: projectile.sprite.id,
            position: projectile.position,
            top_left: projectile.position - pivot,
            rotation: projectile.rotation,
            pivot,
            scale: 1.0,
            tint: colors::NONE,
        });
    }

    for meteor in &state.meteors {
        let (half_w, half_h) = meteor.sprite.halves();
        let pivot = DVec2::new(half_w, half_h);
        list.sprites.push(DrawCommand {
            sprite: meteor.sprite.id,
            position: meteor.position,
            top_left: meteor.position - pivot * meteor.scale,
            rotation: meteor.rotation,
            pivot,
            scale: meteor.scale,
            tint: colors::NONE,
        });
    }

    list.lines.extend(border(&state.window));
    list
}

fn border(window: &Window) -> [LineSegment; 4] {
    let (w, h) = (window.width(), window.height());
    let line = |from: DVec2, to: DVec2| LineSegment {
        from,
        to,
        width: BORDER_WIDTH,
        color: colors::BORDER,
    };
    [
        line(DVec2::ZERO, DVec2::new(w, 0.0)),
        line(DVec2::new(w, 0.0), DVec2::new(w, h)),
        line(DVec2::new(0.0, h), DVec2::new(w, h)),
        line(DVec2::ZERO, DVec2::new(0.0, h)),
    ]
}

/// Debug overlay: outline every box collider. Circles are left to the host.
pub fn collider_outlines(state: &GameState) -> Vec<LineSegment> {
    let boxes = std::iter::once(state.player.collider())
        .chain(state.projectiles.iter().map(|p| p.collider()))
        .filter_map(|c| match c {
            Collider::Box(b) => Some(b),
            Collider::Circle { .. } => None,
        });

    boxes
        .flat_map(|b| b.edges())
        .map(|(from, to)| LineSegment {
            from,
            to,
            width: OUTLINE_WIDTH,
            color: colors::COLLIDER,
        })
        .collect()
}
