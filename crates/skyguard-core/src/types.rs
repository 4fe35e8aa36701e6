//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in playfield units.
/// x grows to the right, y grows downward (screen convention), so the
/// ground band sits at the bottom of the viewport and enemies spawn at
/// negative y.
pub type Position = glam::DVec2;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulation steps run in the current session.
    pub tick: u64,
    /// Timestamp (milliseconds) passed to the most recent tick.
    pub now_ms: f64,
}

impl SimTime {
    /// Advance by one step, recording the driver's timestamp.
    pub fn advance(&mut self, now_ms: f64) {
        self.tick += 1;
        self.now_ms = now_ms;
    }
}

/// Playfield dimensions supplied by the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Whether `y` falls inside the bottom ground band of the given depth.
    pub fn in_ground_band(&self, y: f64, band: f64) -> bool {
        y >= self.height - band
    }
}
