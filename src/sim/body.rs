//! Shared behaviour of free-flying entities (meteors and projectiles)

use super::geometry::Collider;
use super::window::Window;

/// Something that moves on its own each tick, can be hit and eventually
/// leaves play.
pub trait Body {
    /// Advance one tick
    fn update(&mut self);

    /// Collision shape at the current position
    fn collider(&self) -> Collider;

    /// True once the body has left its allowed region and should be dropped
    fn is_expired(&self, window: &Window) -> bool;

    /// Update, then report whether the body should be kept
    fn step(&mut self, window: &Window) -> bool {
        self.update();
        !self.is_expired(window)
    }
}

/// Drop every entry whose mark is set, keeping the survivors' order.
///
/// `marks` must be as long as `items`.
pub fn remove_marked<T>(items: &mut Vec<T>, marks: &[bool]) {
    debug_assert_eq!(items.len(), marks.len());
    let mut index = 0;
    items.retain(|_| {
        let keep = !marks[index];
        index += 1;
        keep
    });
}

/// Step every body and drop the ones that expired
pub fn step_all<T: Body>(bodies: &mut Vec<T>, window: &Window) {
    bodies.retain_mut(|b| b.step(window));
}
