//! Corner-and-center cube cloud
//!
//! Eight points at the corners of a 10x10x10 box plus one at its center. The
//! center lies on all three splitting planes of the root, so with inclusive
//! boundaries it lands in every octant next to that octant's corner.

use crate::foundation::math::{Point3, Vec3};
use crate::spatial::{Ray, RayInterval, SpatialIndex, SpatialNode, AABB};

const CENTER: usize = 8;

fn cube_cloud() -> Vec<Point3> {
    let mut points: Vec<Point3> = (0..8)
        .map(|corner| {
            let x = if corner & 1 != 0 { 10.0 } else { 0.0 };
            let y = if corner & 2 != 0 { 10.0 } else { 0.0 };
            let z = if corner & 4 != 0 { 10.0 } else { 0.0 };
            Point3::new(x, y, z)
        })
        .collect();
    points.push(Point3::new(5.0, 5.0, 5.0));
    points
}

#[test]
fn test_root_materializes_all_eight_octants() {
    let points = cube_cloud();
    let index = SpatialIndex::build_all(&points, 2).expect("non-empty input");

    let root = index.root();
    assert_eq!(
        root.bounds(),
        &AABB::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0))
    );
    assert_eq!(root.children().len(), 8);

    for child in root.children() {
        assert_eq!(child.depth(), 1);
        assert_eq!(child.point_count(), 2, "corner plus shared center");
        assert!(child.point_indices().contains(&CENTER));

        let corner = child
            .point_indices()
            .iter()
            .copied()
            .find(|&i| i != CENTER)
            .expect("one corner per octant");
        assert!(child.bounds().contains(&points[corner]));
    }
}

#[test]
fn test_two_point_octants_split_into_single_point_leaves() {
    let points = cube_cloud();
    let index = SpatialIndex::build_all(&points, 2).expect("non-empty input");

    for child in index.root().children() {
        // Corner and center end up in opposite sub-octants
        assert_eq!(child.children().len(), 2);
        for grandchild in child.children() {
            assert!(grandchild.is_leaf());
            assert_eq!(grandchild.point_count(), 1);
            assert_eq!(grandchild.depth(), 2);
        }
    }

    let stats = index.stats();
    assert_eq!(stats.node_count, 1 + 8 + 16);
    assert_eq!(stats.leaf_count, 16);
    assert_eq!(stats.leaf_point_references, 16);
}

#[test]
fn test_depth_limit_one_stops_at_octants() {
    let points = cube_cloud();
    let index = SpatialIndex::build_all(&points, 1).expect("non-empty input");
    assert_eq!(index.root().children().len(), 8);
    assert!(index.root().children().iter().all(SpatialNode::is_leaf));
}

#[test]
fn test_single_point_leaves_are_never_split_further() {
    let points = cube_cloud();
    let index = SpatialIndex::build_all(&points, 8).expect("non-empty input");
    for node in index.root() {
        if node.point_count() <= 1 {
            assert!(node.is_leaf());
        }
    }
    // Extra depth budget does not change the shape
    assert_eq!(index.stats().deepest_level, 2);
}

#[test]
fn test_vertical_probe_finds_corner_leaf() {
    let points = cube_cloud();
    let index = SpatialIndex::build_all(&points, 2).expect("non-empty input");

    let ray = Ray::new(Point3::new(1.0, 100.0, 1.0), Vec3::new(0.0, -1.0, 0.0));
    let hit = index
        .intersect_ray(&ray, RayInterval::default())
        .expect("ray passes through the low corner column");
    assert_eq!(hit.point_indices(), &[0]);

    let hit = index
        .intersect_point(&Point3::new(10.0, 10.0, 10.0))
        .expect("far corner");
    assert_eq!(hit.point_indices(), &[7]);
}
