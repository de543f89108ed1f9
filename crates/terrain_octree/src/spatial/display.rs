//! Box enumeration for debug drawing
//!
//! Renderers draw either the top few levels of the tree, colored by level, or
//! just the leaves. The mode is a plain value chosen by the host; the index
//! itself carries no display state.

use serde::{Deserialize, Serialize};

use super::{SpatialIndex, SpatialNode, AABB};

/// Which part of the tree a debug renderer should draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DisplayMode {
    /// Draw nothing
    #[default]
    Hidden,
    /// Draw every node whose level is below `count` (root is level 0)
    Levels {
        /// Number of levels to draw
        count: u32,
    },
    /// Draw only leaf boxes
    Leaves,
}

/// A box to draw and the tree level it came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelBox {
    /// Node bounds
    pub bounds: AABB,
    /// Node depth (root = 0)
    pub level: u32,
}

impl LevelBox {
    fn from_node(node: &SpatialNode) -> Self {
        Self {
            bounds: *node.bounds(),
            level: node.depth(),
        }
    }

    /// Index into a color table of `palette_len` entries, wrapping around
    pub fn palette_slot(&self, palette_len: usize) -> Option<usize> {
        (palette_len > 0).then(|| self.level as usize % palette_len)
    }
}

impl SpatialIndex {
    /// Boxes to draw for `mode`, in pre-order
    pub fn visible_boxes(&self, mode: DisplayMode) -> Vec<LevelBox> {
        match mode {
            DisplayMode::Hidden => Vec::new(),
            DisplayMode::Levels { count } => {
                let mut boxes = Vec::new();
                collect_levels(self.root(), count, &mut boxes);
                boxes
            }
            DisplayMode::Leaves => self
                .root()
                .iter()
                .filter(|node| node.is_leaf())
                .map(LevelBox::from_node)
                .collect(),
        }
    }
}

fn collect_levels(node: &SpatialNode, count: u32, boxes: &mut Vec<LevelBox>) {
    if node.depth() >= count {
        return;
    }
    boxes.push(LevelBox::from_node(node));
    for child in node.children() {
        collect_levels(child, count, boxes);
    }
}
