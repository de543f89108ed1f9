//! Terrain sensing built on index queries
//!
//! The index answers with leaves, not points. Picking and altitude sensing
//! finish the job with a linear scan over the returned leaf's points, which
//! is cheap because leaves are small. Collision probing reports which sample
//! points landed inside a leaf; how to respond is up to the caller.

use log::debug;

use crate::foundation::math::{self, Point3};
use crate::spatial::{PointSet, Ray, RayInterval, SpatialIndex, SpatialNode, AABB};

/// A mesh vertex chosen by a query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointHit {
    /// Index into the host point set
    pub index: usize,
    /// World position of that point
    pub position: Point3,
    /// Distance from the reference position used for the selection
    pub distance: f32,
}

/// Result of a downward altitude probe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeSample {
    /// Surface vertex the altitude was measured against
    pub surface: PointHit,
    /// Height of the probe above that vertex (negative when below it)
    pub clearance: f32,
}

/// A probe point that landed inside a leaf of the terrain index
#[derive(Debug, Clone, Copy)]
pub struct Contact<'a> {
    /// Position of the probe in the caller's slice
    pub probe: usize,
    /// The leaf that contains the probe
    pub leaf: &'a SpatialNode,
}

/// Closest of the node's points to `reference`
///
/// Ties go to the point listed first. Indices the point set cannot resolve
/// are skipped.
pub fn nearest_point<P>(points: &P, node: &SpatialNode, reference: &Point3) -> Option<PointHit>
where
    P: PointSet + ?Sized,
{
    node.point_indices()
        .iter()
        .filter_map(|&index| {
            points.point(index).map(|position| PointHit {
                index,
                position,
                distance: nalgebra::distance(reference, &position),
            })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// Pick the mesh vertex under a ray
///
/// Finds the first leaf the ray touches and returns its point nearest the ray
/// origin, which is what a mouse pick from the camera position wants.
pub fn pick<P>(
    index: &SpatialIndex,
    points: &P,
    ray: &Ray,
    interval: RayInterval,
) -> Option<PointHit>
where
    P: PointSet + ?Sized,
{
    let leaf = index.intersect_ray(ray, interval)?;
    let hit = nearest_point(points, leaf, &ray.origin);
    if let Some(hit) = &hit {
        debug!("Picked point {} at distance {:.3}", hit.index, hit.distance);
    }
    hit
}

/// Height of `position` above the terrain directly beneath it
///
/// Casts straight down; `interval` decides how far (and whether behind the
/// origin) the ray looks.
pub fn altitude<P>(
    index: &SpatialIndex,
    points: &P,
    position: &Point3,
    interval: RayInterval,
) -> Option<AltitudeSample>
where
    P: PointSet + ?Sized,
{
    let ray = Ray::new(*position, math::down());
    let leaf = index.intersect_ray(&ray, interval)?;
    let surface = nearest_point(points, leaf, position)?;
    Some(AltitudeSample {
        surface,
        clearance: position.y - surface.position.y,
    })
}

/// The four corners of the box's bottom face, counter-clockwise from `min`
pub fn bottom_corners(bounds: &AABB) -> [Point3; 4] {
    let (min, max) = (bounds.min, bounds.max);
    [
        Point3::new(min.x, min.y, min.z),
        Point3::new(max.x, min.y, min.z),
        Point3::new(max.x, min.y, max.z),
        Point3::new(min.x, min.y, max.z),
    ]
}

/// Every probe that lies inside some leaf, in probe order
pub fn probe_contacts<'a>(index: &'a SpatialIndex, probes: &[Point3]) -> Vec<Contact<'a>> {
    probes
        .iter()
        .enumerate()
        .filter_map(|(probe, point)| {
            index
                .intersect_point(point)
                .map(|leaf| Contact { probe, leaf })
        })
        .collect()
}

/// True if any probe lies inside a leaf
pub fn is_penetrating(index: &SpatialIndex, probes: &[Point3]) -> bool {
    probes.iter().any(|p| index.intersect_point(p).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    /// Flat 3x3 grid at height `y`, x and z in {-4, 0, 4}, row-major in z
    ///
    /// Every vertex column leads the depth-first walk straight to that
    /// vertex's own leaf, so picks and altitude samples are unambiguous.
    fn flat_grid(y: f32) -> Vec<Point3> {
        let mut points = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                points.push(Point3::new(col as f32 * 4.0 - 4.0, y, row as f32 * 4.0 - 4.0));
            }
        }
        points
    }

    #[test]
    fn test_nearest_point_prefers_first_on_ties() {
        let points = vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(5.0, 0.0, 0.0),
        ];
        let index = SpatialIndex::build_all(&points, 0).expect("non-empty input");
        let hit = nearest_point(&points, index.root(), &Point3::origin()).expect("non-empty leaf");
        assert_eq!(hit.index, 0);
        assert_relative_eq!(hit.distance, 1.0);

        let hit = nearest_point(&points, index.root(), &Point3::new(4.0, 0.0, 0.0))
            .expect("non-empty leaf");
        assert_eq!(hit.index, 2);
    }

    #[test]
    fn test_pick_from_above() {
        let points = flat_grid(0.0);
        let index = SpatialIndex::build_all(&points, 4).expect("non-empty input");

        let ray = Ray::new(Point3::new(4.0, 50.0, 4.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = pick(&index, &points, &ray, RayInterval::default()).expect("ray over the grid");
        assert_eq!(hit.index, 8);
        assert_eq!(hit.position, Point3::new(4.0, 0.0, 4.0));
        assert_relative_eq!(hit.distance, 50.0);

        let miss = Ray::new(Point3::new(40.0, 50.0, 40.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(pick(&index, &points, &miss, RayInterval::default()).is_none());
    }

    #[test]
    fn test_altitude_over_vertex() {
        let points = flat_grid(1.5);
        let index = SpatialIndex::build_all(&points, 4).expect("non-empty input");

        let forward = RayInterval::forward(100.0);
        let sample = altitude(&index, &points, &Point3::new(4.0, 10.0, 4.0), forward)
            .expect("above the grid");
        assert_eq!(sample.surface.index, 8);
        assert_relative_eq!(sample.clearance, 8.5);

        assert!(altitude(&index, &points, &Point3::new(30.0, 10.0, 0.0), forward).is_none());
    }

    #[test]
    fn test_altitude_does_not_look_behind_with_forward_interval() {
        let points = flat_grid(1.5);
        let index = SpatialIndex::build_all(&points, 4).expect("non-empty input");
        let below = Point3::new(0.0, -5.0, 0.0);
        assert!(altitude(&index, &points, &below, RayInterval::forward(100.0)).is_none());

        let sample = altitude(&index, &points, &below, RayInterval::default())
            .expect("symmetric interval");
        assert_eq!(sample.surface.index, 4);
        assert_relative_eq!(sample.clearance, -6.5);
    }

    #[test]
    fn test_bottom_corners() {
        let bounds = AABB::new(Point3::new(-1.0, 2.0, -3.0), Point3::new(1.0, 4.0, 3.0));
        let corners = bottom_corners(&bounds);
        assert!(corners.iter().all(|c| c.y == 2.0));
        assert_eq!(corners[0], bounds.min);
        assert_eq!(corners[2], Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_probes_detect_penetration() {
        let points = flat_grid(1.5);
        let index = SpatialIndex::build_all(&points, 4).expect("non-empty input");

        let hovering =
            AABB::from_center_extents(Point3::new(0.0, 3.0, 0.0), Vec3::new(0.5, 0.5, 0.5));
        assert!(!is_penetrating(&index, &bottom_corners(&hovering)));
        assert!(probe_contacts(&index, &bottom_corners(&hovering)).is_empty());

        // Bottom face resting on the grid with its corners on the outer vertices
        let landed = AABB::new(Point3::new(-4.0, 1.5, -4.0), Point3::new(4.0, 2.5, 4.0));
        let corners = bottom_corners(&landed);
        let contacts = probe_contacts(&index, &corners);
        assert!(is_penetrating(&index, &corners));
        assert_eq!(contacts.len(), 4);
        for contact in &contacts {
            assert!(contact.leaf.bounds().contains(&corners[contact.probe]));
        }
    }
}
