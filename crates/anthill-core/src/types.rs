//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in viewport space (pixels).
/// x grows to the right, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames advanced so far.
    pub frame: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation toward `other` (t = 0 → self, t = 1 → other).
    pub fn lerp(&self, other: &Position, t: f64) -> Position {
        Position {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Position> for DVec2 {
    fn from(p: Position) -> Self {
        p.to_vec()
    }
}

impl SimTime {
    /// Advance by one frame of `dt_ms` milliseconds.
    pub fn advance(&mut self, dt_ms: f64) {
        self.frame += 1;
        self.elapsed_ms += dt_ms;
    }

    /// Elapsed simulation time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_ms / 1000.0
    }
}
