//! Rankine vortex with a weak inward spiral.
//!
//! Inside the eye the air turns as a solid body; outside it the angular
//! velocity decays as `1/r²`, and the two branches meet at `r = eye_radius`.
//! A small radial term pulls air inward outside the eye, bending the circles
//! into spirals.

use crate::config::FieldConfig;
use crate::field_source::VelocityField;
use crate::geometry::{Point2D, Vector2D};

/// Points closer than this to the center have zero velocity.
pub const DEAD_ZONE_RADIUS: f64 = 0.1;
/// Upper bound of the radial inflow factor, reached far from the eye.
const SPIRAL_FACTOR: f64 = 0.1;
/// Fraction of `max_wind_speed` that the radial inflow is scaled by.
const SPIRAL_SPEED_FRACTION: f64 = 0.1;

/// Hurricane velocity model built from a [`FieldConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VortexField {
    center: Point2D,
    max_wind_speed: f64,
    eye_radius: f64,
}

impl VortexField {
    pub fn new(config: &FieldConfig) -> Self {
        Self {
            center: config.center,
            max_wind_speed: config.max_wind_speed,
            eye_radius: config.eye_radius,
        }
    }

    /// Angular velocity at distance `r` from the center.
    fn omega(&self, r: f64) -> f64 {
        if r < self.eye_radius {
            self.max_wind_speed / self.eye_radius
        } else {
            self.max_wind_speed * self.eye_radius / (r * r)
        }
    }

    /// Radial inflow factor: zero inside the eye, rising toward
    /// `SPIRAL_FACTOR` far away.
    fn radial_factor(&self, r: f64) -> f64 {
        SPIRAL_FACTOR * (1.0 - self.eye_radius / r.max(self.eye_radius))
    }
}

impl VelocityField for VortexField {
    fn velocity_at(&self, p: Point2D) -> Vector2D {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        let r = (dx * dx + dy * dy).sqrt();
        if r < DEAD_ZONE_RADIUS {
            return Vector2D::ZERO;
        }

        // Counter-clockwise tangential flow.
        let omega = self.omega(r);
        let mut vx = -omega * dy / r;
        let mut vy = omega * dx / r;

        let inflow = self.radial_factor(r) * self.max_wind_speed * SPIRAL_SPEED_FRACTION;
        vx += inflow * (-dx / r);
        vy += inflow * (-dy / r);

        Vector2D::new(vx, vy)
    }

    fn max_speed(&self) -> f64 {
        self.max_wind_speed
    }
}
