//! Top-down octree construction
//!
//! The root box is the tight bound of the referenced points. Each node is split
//! into eight octants; an octant becomes a child only if at least one of the
//! parent's points lies inside it, and a child is split further only while it
//! holds more than one point and depth budget remains.

use log::{debug, info, warn};

use super::{PointSet, SpatialError, SpatialIndex, SpatialNode, AABB};
use crate::core::config::OctreeConfig;
use crate::foundation::time::Stopwatch;

/// Collect the candidates whose point lies inside `bounds`
///
/// Input order is preserved. Indices the point set cannot resolve are skipped.
pub fn points_in_box<P>(points: &P, candidates: &[usize], bounds: &AABB) -> Vec<usize>
where
    P: PointSet + ?Sized,
{
    candidates
        .iter()
        .copied()
        .filter(|&index| points.point(index).is_some_and(|p| bounds.contains(&p)))
        .collect()
}

/// Builds a [`SpatialIndex`] over a borrowed point set
pub struct SpatialIndexBuilder<'a, P: PointSet + ?Sized> {
    points: &'a P,
    max_depth: u32,
}

impl<'a, P: PointSet + ?Sized> SpatialIndexBuilder<'a, P> {
    /// Create a builder with the default depth limit
    pub fn new(points: &'a P) -> Self {
        Self {
            points,
            max_depth: OctreeConfig::default().max_depth,
        }
    }

    /// Create a builder from configuration
    pub fn from_config(points: &'a P, config: &OctreeConfig) -> Self {
        Self::new(points).max_depth(config.max_depth)
    }

    /// Set the maximum subdivision depth (0 = the root is the only node)
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Build over every point in the set
    pub fn build_all(&self) -> Result<SpatialIndex, SpatialError> {
        let indices: Vec<usize> = (0..self.points.len()).collect();
        self.build(&indices)
    }

    /// Build over the given point indices
    ///
    /// Duplicate indices are kept as given (mesh index lists usually repeat
    /// shared vertices).
    pub fn build(&self, indices: &[usize]) -> Result<SpatialIndex, SpatialError> {
        let stopwatch = Stopwatch::start_new();
        debug!(
            "Building spatial index over {} point references (max depth {})",
            indices.len(),
            self.max_depth
        );

        let bounds = AABB::from_points(self.points, indices)?;
        let mut root = SpatialNode::new(bounds, indices.to_vec(), 0);
        let stuck_splits = if root.point_count() > 1 {
            self.subdivide(&mut root)
        } else {
            0
        };
        if stuck_splits > 0 {
            warn!(
                "{} splits produced children identical to their parent; coincident points \
                 fill all eight octants down to max depth {}",
                stuck_splits,
                self.max_depth
            );
        }

        let index = SpatialIndex::from_parts(root, self.max_depth);
        let stats = index.stats();
        info!(
            "Spatial index built: {} nodes, {} leaves, depth {} in {:.2} ms",
            stats.node_count,
            stats.leaf_count,
            stats.deepest_level,
            stopwatch.elapsed_millis()
        );
        Ok(index)
    }

    /// Split `node` recursively, returning how many children came out with the
    /// parent's own bounds
    ///
    /// A zero-size box (every point coincident) splits into eight copies of
    /// itself, each holding every point, so a stack of duplicated vertices
    /// grows `8^max_depth` nodes. Flat boxes double their points across both
    /// floors at each level.
    fn subdivide(&self, node: &mut SpatialNode) -> usize {
        if node.depth() >= self.max_depth {
            return 0;
        }

        let child_depth = node.depth() + 1;
        let mut stuck = 0;
        for child_bounds in node.bounds().subdivide_eight() {
            let candidates = points_in_box(self.points, node.point_indices(), &child_bounds);
            if candidates.is_empty() {
                continue;
            }
            if child_bounds == *node.bounds() {
                stuck += 1;
            }

            let mut child = SpatialNode::new(child_bounds, candidates, child_depth);
            if child.point_count() > 1 {
                stuck += self.subdivide(&mut child);
            }
            node.push_child(child);
        }
        stuck
    }
}
