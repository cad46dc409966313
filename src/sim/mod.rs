//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (insertion order of each collection)
//! - No rendering, audio or platform dependencies

pub mod body;
pub mod geometry;
pub mod input;
pub mod meteor;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;
pub mod timer;
pub mod turret;
pub mod window;

pub use body::{Body, remove_marked, step_all};
pub use geometry::{Collider, OrientedBox, pivot_rotate};
pub use input::TickInput;
pub use meteor::Meteor;
pub use player::{HitState, Player};
pub use projectile::Projectile;
pub use state::{GameEvent, GameState, Stats};
pub use tick::tick;
pub use timer::Timer;
pub use turret::{Turret, TurretSpec, snap_angle};
pub use window::Window;
