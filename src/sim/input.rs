//! Per-tick keyboard state handed in by the host

use serde::{Deserialize, Serialize};

/// Keys held during a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    // Ship movement (arrow keys)
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,

    // Turret aim snap (W/A/S/D), only read by `TurretControl::AimSnap`
    pub aim_up: bool,
    pub aim_down: bool,
    pub aim_left: bool,
    pub aim_right: bool,

    /// Counter-clockwise turret turn (Delete)
    pub rotate_left: bool,
    /// Clockwise turret turn (Page Down)
    pub rotate_right: bool,
    /// Point the turret straight up (End)
    pub rotate_reset: bool,
    /// Space
    pub fire: bool,
}
