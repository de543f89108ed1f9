//! Axis-aligned bounding boxes
//!
//! Every test here is inclusive on both ends of every axis. A point lying on a
//! plane shared by two octants is inside both of them, and the builder keeps it
//! in both candidate lists.

use serde::{Deserialize, Serialize};

use super::{PointSet, Ray, SpatialError};
use crate::foundation::math::{self, Point3, Vec3};

/// Floor layout of the octants produced by [`AABB::subdivide_eight`]
///
/// `(x, z)` halves, 0 = low and 1 = high, counter-clockwise from the minimum
/// corner when viewed from above. The upper floor repeats the same order.
const FLOOR_ORDER: [(usize, usize); 4] = [(0, 0), (1, 0), (1, 1), (0, 1)];

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Point3,
    /// Maximum corner of the bounding box
    pub max: Point3,
}

impl AABB {
    /// Create a new AABB from min and max points
    pub fn new(min: Point3, max: Point3) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y && min.z <= max.z,
            "AABB min corner must not exceed max corner"
        );
        Self { min, max }
    }

    /// Create an AABB centered at a point with given half-size
    pub fn from_center_extents(center: Point3, extents: Vec3) -> Self {
        Self::new(center - extents, center + extents)
    }

    /// Tight bounds of the referenced points, found in one linear scan
    pub fn from_points<P>(points: &P, indices: &[usize]) -> Result<Self, SpatialError>
    where
        P: PointSet + ?Sized,
    {
        let (&first, rest) = indices.split_first().ok_or(SpatialError::EmptyInput)?;
        let start = checked_point(points, first)?;

        let (min, max) = rest.iter().try_fold((start, start), |(min, max), &index| {
            let p = checked_point(points, index)?;
            Ok::<_, SpatialError>((math::component_min(&min, &p), math::component_max(&max, &p)))
        })?;

        Ok(Self::new(min, max))
    }

    /// Full size along each axis
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Half size along each axis
    pub fn extents(&self) -> Vec3 {
        self.size() * 0.5
    }

    /// Geometric center
    pub fn center(&self) -> Point3 {
        self.min + self.extents()
    }

    /// True iff `min <= p <= max` on every axis
    pub fn contains(&self, p: &Point3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y &&
        p.z >= self.min.z && p.z <= self.max.z
    }

    /// Slab test: does the ray segment `[t_min, t_max]` touch this box?
    pub fn intersects_ray(&self, ray: &Ray, t_min: f32, t_max: f32) -> bool {
        self.slab_interval(ray, t_min, t_max).is_some()
    }

    /// Parametric `(enter, exit)` span of the ray inside the box, clipped to `[t_min, t_max]`
    ///
    /// A zero direction component never divides: that axis either leaves the
    /// interval untouched (origin within the slab, boundaries included) or
    /// rejects the ray outright.
    pub fn slab_interval(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<(f32, f32)> {
        let mut enter = t_min;
        let mut exit = t_max;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let direction = ray.direction[axis];
            let lo = self.min[axis];
            let hi = self.max[axis];

            if direction == 0.0 {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            // Divide directly: a reciprocal of a tiny component overflows and
            // turns an origin on the face into 0 * inf.
            let t0 = (lo - origin) / direction;
            let t1 = (hi - origin) / direction;
            enter = enter.max(t0.min(t1));
            exit = exit.min(t0.max(t1));

            if enter > exit {
                return None;
            }
        }

        Some((enter, exit))
    }

    /// Split at the center into eight equal octants
    ///
    /// Octant bounds are taken from the exact per-axis coordinates
    /// `{min, center, max}`, so neighbours share bit-identical faces and the
    /// eight children tile the parent with no gaps. Order is fixed: the four
    /// low-y octants counter-clockwise from `min`, then the four high-y ones.
    pub fn subdivide_eight(&self) -> [Self; 8] {
        let center = self.center();
        let xs = [(self.min.x, center.x), (center.x, self.max.x)];
        let ys = [(self.min.y, center.y), (center.y, self.max.y)];
        let zs = [(self.min.z, center.z), (center.z, self.max.z)];

        std::array::from_fn(|octant| {
            let (xi, zi) = FLOOR_ORDER[octant % 4];
            let (x, y, z) = (xs[xi], ys[octant / 4], zs[zi]);
            Self::new(Point3::new(x.0, y.0, z.0), Point3::new(x.1, y.1, z.1))
        })
    }
}

fn checked_point<P>(points: &P, index: usize) -> Result<Point3, SpatialError>
where
    P: PointSet + ?Sized,
{
    let p = points.point(index).ok_or(SpatialError::IndexOutOfRange {
        index,
        len: points.len(),
    })?;
    if !math::is_finite(&p) {
        return Err(SpatialError::NonFinitePoint { index });
    }
    Ok(p)
}
