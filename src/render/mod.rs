//! Render output handed to the host
//!
//! The crate never rasterizes anything itself. Each frame the host asks for a
//! draw list built from the latest state and blits the sprites and lines.

pub mod draw_list;

pub use draw_list::{DrawCommand, DrawList, LineSegment, build_draw_list, collider_outlines};

/// Colors for game elements
pub mod colors {
    /// Window border outline
    pub const BORDER: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    /// Collider outlines in debug overlays
    pub const COLLIDER: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    /// No tint
    pub const NONE: [f32; 4] = [0.0, 0.0, 0.0, 0.0];
}
