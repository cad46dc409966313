//! Tick-counting countdown for cooldowns and spawn cadence

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    /// Ticks until ready
    pub duration: u32,
    /// Ticks accumulated since the last reset (saturates at `duration`)
    pub elapsed: u32,
}

impl Timer {
    pub fn new(duration: u32) -> Self {
        Self { duration, elapsed: 0 }
    }

    /// Timer that is already ready, so the first gated action fires at once
    pub fn ready(duration: u32) -> Self {
        Self {
            duration,
            elapsed: duration,
        }
    }

    /// Timer for a wall-clock duration at the given tick rate
    pub fn from_millis(ms: u32, ticks_per_second: u32) -> Self {
        Self::new(crate::millis_to_ticks(ms, ticks_per_second))
    }

    /// Advance by one tick
    pub fn update(&mut self) {
        if self.elapsed < self.duration {
            self.elapsed += 1;
        }
    }

    pub fn is_ready(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}
