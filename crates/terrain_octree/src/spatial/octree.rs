//! Octree spatial index over a mesh's vertex set
//!
//! Built once from a borrowed point set and frozen afterwards. The index keeps
//! only tree structure and point indices; positions stay with the host.

use super::{PointSet, SpatialError, SpatialIndexBuilder, SpatialNode};

/// Summary counts for a built index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Total number of nodes, root included
    pub node_count: usize,
    /// Number of nodes without children
    pub leaf_count: usize,
    /// Depth of the deepest node (root = 0)
    pub deepest_level: u32,
    /// Sum of leaf point-index list lengths; exceeds the input size when
    /// points sit on shared octant faces
    pub leaf_point_references: usize,
}

/// Octree spatial index
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialIndex {
    /// Root node containing every indexed point
    root: SpatialNode,

    /// Depth limit the tree was built with
    max_depth: u32,
}

impl SpatialIndex {
    pub(crate) fn from_parts(root: SpatialNode, max_depth: u32) -> Self {
        Self { root, max_depth }
    }

    /// Build an index over `indices` of `points`
    pub fn build<P>(points: &P, indices: &[usize], max_depth: u32) -> Result<Self, SpatialError>
    where
        P: PointSet + ?Sized,
    {
        SpatialIndexBuilder::new(points).max_depth(max_depth).build(indices)
    }

    /// Build an index over every point of `points`
    pub fn build_all<P>(points: &P, max_depth: u32) -> Result<Self, SpatialError>
    where
        P: PointSet + ?Sized,
    {
        SpatialIndexBuilder::new(points).max_depth(max_depth).build_all()
    }

    /// Root node
    pub fn root(&self) -> &SpatialNode {
        &self.root
    }

    /// Depth limit used at build time
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Get all leaf nodes (for visualization)
    pub fn leaves(&self) -> Vec<&SpatialNode> {
        let mut leaves = Vec::new();
        self.root.get_all_leaves(&mut leaves);
        leaves
    }

    /// Get all nodes at a specific depth (for visualization)
    pub fn nodes_at_depth(&self, depth: u32) -> Vec<&SpatialNode> {
        let mut nodes = Vec::new();
        self.root.get_nodes_at_depth(depth, &mut nodes);
        nodes
    }

    /// Node, leaf and depth counts in one pass
    pub fn stats(&self) -> IndexStats {
        self.root.iter().fold(IndexStats::default(), |mut stats, node| {
            stats.node_count += 1;
            stats.deepest_level = stats.deepest_level.max(node.depth());
            if node.is_leaf() {
                stats.leaf_count += 1;
                stats.leaf_point_references += node.point_count();
            }
            stats
        })
    }
}
