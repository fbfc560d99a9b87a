//! The seam between velocity models and the renderer.

use crate::geometry::{Point2D, Vector2D};

/// A steady 2D velocity field.
///
/// Implementations must be pure: the same point always yields the same
/// vector, so a rendering pass is fully determined by its inputs.
pub trait VelocityField {
    /// Velocity at `p`.
    fn velocity_at(&self, p: Point2D) -> Vector2D;

    /// Nominal peak speed, used to normalize arrow lengths.
    fn max_speed(&self) -> f64;
}

impl<F: VelocityField + ?Sized> VelocityField for &F {
    fn velocity_at(&self, p: Point2D) -> Vector2D {
        (**self).velocity_at(p)
    }

    fn max_speed(&self) -> f64 {
        (**self).max_speed()
    }
}
