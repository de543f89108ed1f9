//! Point storage the index is built over
//!
//! The host keeps ownership of its vertex positions. The builder only borrows
//! them for the duration of a build and the finished index stores indices, so
//! turning a query result back into positions is always a lookup into the
//! host's own storage.

use crate::foundation::math::Point3;

/// Read access to a dense, 0-based set of positions
pub trait PointSet {
    /// Number of points
    fn len(&self) -> usize;

    /// Position of the point at `index`, or `None` past the end
    fn point(&self, index: usize) -> Option<Point3>;

    /// True if there are no points
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PointSet for [Point3] {
    fn len(&self) -> usize {
        <[Point3]>::len(self)
    }

    fn point(&self, index: usize) -> Option<Point3> {
        self.get(index).copied()
    }
}

impl PointSet for Vec<Point3> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn point(&self, index: usize) -> Option<Point3> {
        self.as_slice().point(index)
    }
}

impl PointSet for [[f32; 3]] {
    fn len(&self) -> usize {
        <[[f32; 3]]>::len(self)
    }

    fn point(&self, index: usize) -> Option<Point3> {
        self.get(index).map(|&[x, y, z]| Point3::new(x, y, z))
    }
}
