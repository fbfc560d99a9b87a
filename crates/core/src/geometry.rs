//! Plain 2D value types: canvas points and velocity samples.

use serde::{Deserialize, Serialize};

/// A location in canvas space. The y axis points down, as in SVG.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by `dist` along the direction `(ux, uy)`.
    pub fn offset(self, ux: f64, uy: f64, dist: f64) -> Self {
        Self {
            x: self.x + ux * dist,
            y: self.y + uy * dist,
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A velocity sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    pub vx: f64,
    pub vy: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { vx: 0.0, vy: 0.0 };

    pub fn new(vx: f64, vy: f64) -> Self {
        Self { vx, vy }
    }

    /// Magnitude of the vector.
    pub fn speed(self) -> f64 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }
}
