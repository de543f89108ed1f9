//! Rays and the parametric interval they are tested over

use serde::{Deserialize, Serialize};

use super::SpatialError;
use crate::foundation::math::{Point3, Vec3};

/// A ray for picking and altitude sensing
///
/// The direction is stored exactly as given. Index queries never renormalize it,
/// so callers that want `t` to measure world distance should pass a unit vector
/// (or build the ray with [`Ray::through`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Point3,
    /// The direction of the ray
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray, rejecting an exactly-zero direction
    pub fn try_new(origin: Point3, direction: Vec3) -> Result<Self, SpatialError> {
        if direction == Vec3::zeros() {
            return Err(SpatialError::DegenerateRay);
        }
        Ok(Self::new(origin, direction))
    }

    /// Creates a unit-direction ray starting at `from` and heading towards `to`
    pub fn through(from: Point3, to: Point3) -> Result<Self, SpatialError> {
        let direction = (to - from)
            .try_normalize(0.0)
            .ok_or(SpatialError::DegenerateRay)?;
        Ok(Self::new(from, direction))
    }

    /// Get the point along the ray at parameter t
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + self.direction * t
    }
}

/// Parametric bounds `[t_min, t_max]` that turn a ray into a finite segment
///
/// The right bounds depend on scene scale, so every ray query takes one
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayInterval {
    /// Lower parametric bound (may be negative to look behind the origin)
    pub t_min: f32,
    /// Upper parametric bound
    pub t_max: f32,
}

impl RayInterval {
    /// Scene-scale bound used when nothing else is configured
    pub const DEFAULT_EXTENT: f32 = 1000.0;

    /// Create an interval from explicit bounds
    pub fn new(t_min: f32, t_max: f32) -> Self {
        Self { t_min, t_max }
    }

    /// Symmetric interval `[-extent, extent]`
    pub fn symmetric(extent: f32) -> Self {
        Self::new(-extent, extent)
    }

    /// Interval that only looks ahead of the ray origin: `[0, extent]`
    pub fn forward(extent: f32) -> Self {
        Self::new(0.0, extent)
    }

    /// True if the bounds are finite and ordered
    pub fn is_valid(&self) -> bool {
        self.t_min.is_finite() && self.t_max.is_finite() && self.t_min <= self.t_max
    }
}

impl Default for RayInterval {
    fn default() -> Self {
        Self::symmetric(Self::DEFAULT_EXTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_at_parameter() {
        let ray = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(0.0, -1.0, 0.0));
        assert_relative_eq!(ray.at(0.0), Point3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(ray.at(2.5), Point3::new(1.0, -0.5, 3.0));
        assert_relative_eq!(ray.at(-1.0), Point3::new(1.0, 3.0, 3.0));
    }

    #[test]
    fn test_direction_is_not_renormalized() {
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 4.0));
        assert_relative_eq!(ray.direction.norm(), 4.0);
        assert_relative_eq!(ray.at(1.0), Point3::new(0.0, 0.0, 4.0));
    }

    #[test]
    fn test_zero_direction_rejected() {
        assert_eq!(
            Ray::try_new(Point3::origin(), Vec3::zeros()),
            Err(SpatialError::DegenerateRay)
        );
        assert!(Ray::try_new(Point3::origin(), Vec3::new(0.0, 1e-6, 0.0)).is_ok());
    }

    #[test]
    fn test_through_normalizes() {
        let ray = Ray::through(Point3::new(0.0, 10.0, 0.0), Point3::new(0.0, 0.0, 0.0))
            .expect("distinct points");
        assert_relative_eq!(ray.direction, Vec3::new(0.0, -1.0, 0.0));

        let same = Point3::new(3.0, 3.0, 3.0);
        assert_eq!(Ray::through(same, same), Err(SpatialError::DegenerateRay));
    }

    #[test]
    fn test_interval_defaults() {
        let interval = RayInterval::default();
        assert_relative_eq!(interval.t_min, -1000.0);
        assert_relative_eq!(interval.t_max, 1000.0);
        assert!(interval.is_valid());
        assert!(!RayInterval::new(5.0, 1.0).is_valid());
        assert!(!RayInterval::new(f32::NEG_INFINITY, 1.0).is_valid());
    }
}
