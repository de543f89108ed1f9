//! Math utilities and types
//!
//! Positions are points, directions are vectors; nalgebra keeps the two apart
//! so `point - point` yields a direction and `point + vector` a position.

pub use nalgebra::Vector3;

/// 3D vector type (directions, offsets, sizes)
pub type Vec3 = Vector3<f32>;

/// 3D point type (positions)
pub type Point3 = nalgebra::Point3<f32>;

/// Unit vector pointing straight down the world Y axis
pub fn down() -> Vec3 {
    -Vec3::y()
}

/// Per-axis minimum of two points
pub fn component_min(a: &Point3, b: &Point3) -> Point3 {
    a.inf(b)
}

/// Per-axis maximum of two points
pub fn component_max(a: &Point3, b: &Point3) -> Point3 {
    a.sup(b)
}

/// True if every coordinate of the point is finite
pub fn is_finite(p: &Point3) -> bool {
    p.x.is_finite() && p.y.is_finite() && p.z.is_finite()
}

/// Math utility functions
pub mod utils {
    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }
}
