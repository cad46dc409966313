//! Logical simulation bounds

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Logical window size. Independent of the physical window the host shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub width: u32,
    pub height: u32,
}

impl Window {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.window_width, settings.window_height)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        f64::from(self.width)
    }

    #[inline]
    pub fn height(&self) -> f64 {
        f64::from(self.height)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(crate::consts::WINDOW_WIDTH, crate::consts::WINDOW_HEIGHT)
    }
}
