//! Ray and point queries over a built index
//!
//! Both queries walk the tree depth-first in stored child order and stop at
//! the first leaf that satisfies the test. For rays that is NOT the leaf
//! nearest the ray origin: when several leaves straddle the ray, child order
//! decides. Callers that need the nearest surface point scan the returned
//! leaf's points themselves (see [`crate::physics::sensing`]).

use log::trace;

use super::{Ray, RayInterval, SpatialIndex, SpatialNode};
use crate::foundation::math::Point3;

impl SpatialIndex {
    /// First leaf, depth-first, whose box the ray segment touches
    ///
    /// Returns `None` if the ray misses the root box within `interval`.
    pub fn intersect_ray(&self, ray: &Ray, interval: RayInterval) -> Option<&SpatialNode> {
        let hit = self.root().first_ray_hit(ray, interval);
        if let Some(node) = hit {
            trace!(
                "Ray hit leaf at depth {} holding {} points",
                node.depth(),
                node.point_count()
            );
        }
        hit
    }

    /// First leaf, depth-first, whose box contains `point` (boundaries included)
    ///
    /// A point inside the root box can still miss when it falls in an octant
    /// that held no vertices and was never materialized.
    pub fn intersect_point(&self, point: &Point3) -> Option<&SpatialNode> {
        self.root().first_point_hit(point)
    }
}

impl SpatialNode {
    fn first_ray_hit(&self, ray: &Ray, interval: RayInterval) -> Option<&Self> {
        if !self.bounds().intersects_ray(ray, interval.t_min, interval.t_max) {
            return None;
        }
        if self.is_leaf() {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.first_ray_hit(ray, interval))
    }

    fn first_point_hit(&self, point: &Point3) -> Option<&Self> {
        if !self.bounds().contains(point) {
            return None;
        }
        if self.is_leaf() {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.first_point_hit(point))
    }
}
