//! Spatial partitioning over mesh vertices
//!
//! An octree built once over a terrain mesh's vertex positions and then queried
//! for "which region does this ray strike first?" (picking, altitude sensing)
//! and "which region contains this point?" (collision probes).

mod aabb;
mod builder;
mod display;
mod error;
mod node;
mod octree;
mod points;
mod query;
mod ray;

#[cfg(test)]
mod tests;

pub use aabb::AABB;
pub use builder::{points_in_box, SpatialIndexBuilder};
pub use display::{DisplayMode, LevelBox};
pub use error::SpatialError;
pub use node::{PreOrder, SpatialNode};
pub use octree::{IndexStats, SpatialIndex};
pub use points::PointSet;
pub use ray::{Ray, RayInterval};
