//! Octree nodes
//!
//! A node owns its bounding box, the indices of the points that fell inside
//! that box during the build, and zero or more (at most eight) children. Nodes
//! are assembled once by the builder and are read-only afterwards.

use super::AABB;

/// Single node in the octree hierarchy
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialNode {
    /// World-space bounds of this node
    bounds: AABB,

    /// Indices into the host point set, in insertion order
    point_indices: Vec<usize>,

    /// Populated octants only, in subdivision order
    children: Vec<SpatialNode>,

    /// Depth in the tree (0 = root)
    depth: u32,
}

impl SpatialNode {
    /// Create a new leaf node
    pub(crate) fn new(bounds: AABB, point_indices: Vec<usize>, depth: u32) -> Self {
        Self {
            bounds,
            point_indices,
            children: Vec::new(),
            depth,
        }
    }

    pub(crate) fn push_child(&mut self, child: Self) {
        debug_assert!(self.children.len() < 8, "a node has at most eight octants");
        self.children.push(child);
    }

    /// World-space bounds of this node
    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    /// Indices of the points owned by this node
    ///
    /// A point lying exactly on a plane shared by sibling octants is listed
    /// under each of them.
    pub fn point_indices(&self) -> &[usize] {
        &self.point_indices
    }

    /// Child nodes; empty for a leaf
    pub fn children(&self) -> &[SpatialNode] {
        &self.children
    }

    /// Depth in the tree (0 = root)
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Check if this node is a leaf (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of point indices owned by this node
    pub fn point_count(&self) -> usize {
        self.point_indices.len()
    }

    /// Pre-order walk over this node and every descendant
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Get all leaf nodes (for visualization)
    pub fn get_all_leaves<'a>(&'a self, leaves: &mut Vec<&'a SpatialNode>) {
        if self.is_leaf() {
            leaves.push(self);
        } else {
            for child in &self.children {
                child.get_all_leaves(leaves);
            }
        }
    }

    /// Get all nodes at a specific depth (for visualization)
    pub fn get_nodes_at_depth<'a>(&'a self, target_depth: u32, nodes: &mut Vec<&'a SpatialNode>) {
        if self.depth == target_depth {
            nodes.push(self);
        } else if self.depth < target_depth {
            for child in &self.children {
                child.get_nodes_at_depth(target_depth, nodes);
            }
        }
    }
}

impl<'a> IntoIterator for &'a SpatialNode {
    type Item = &'a SpatialNode;
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first, pre-order iterator over a subtree
///
/// Children are visited in their stored order, the same order the queries use.
#[derive(Debug)]
pub struct PreOrder<'a> {
    stack: Vec<&'a SpatialNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a SpatialNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
