//! # Terrain Octree
//!
//! Octree spatial index over a terrain mesh's vertex positions, answering the
//! two questions a lander-style game asks every frame:
//!
//! - **Which region of the mesh does this ray strike first?** (mouse picking,
//!   altitude sensing)
//! - **Is this point inside the mesh's bounds?** (collision probes)
//!
//! ## Features
//!
//! - **One-shot build**: the tree is built from a borrowed point set and is
//!   frozen afterwards; rebuild it when geometry changes
//! - **Sparse subdivision**: empty octants are dropped, single-point octants
//!   stop splitting, depth is capped
//! - **Inclusive boundaries**: points on shared octant faces belong to every
//!   octant that touches them
//! - **Configurable**: depth and ray bounds load from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use terrain_octree::prelude::*;
//!
//! fn main() -> Result<(), SpatialError> {
//!     let points = vec![
//!         Point3::new(-1.0, 0.0, -1.0),
//!         Point3::new(1.0, 0.2, -1.0),
//!         Point3::new(1.0, 0.1, 1.0),
//!         Point3::new(-1.0, 0.3, 1.0),
//!     ];
//!     let index = SpatialIndex::build_all(&points, 4)?;
//!
//!     let ray = Ray::new(Point3::new(1.0, 10.0, 1.0), Vec3::new(0.0, -1.0, 0.0));
//!     if let Some(leaf) = index.intersect_ray(&ray, RayInterval::default()) {
//!         assert!(!leaf.point_indices().is_empty());
//!     }
//!
//!     let inside = index.intersect_point(&Point3::new(-1.0, 0.0, -1.0));
//!     assert!(inside.is_some());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod core;
pub mod foundation;
pub mod physics;
pub mod spatial;

/// Common imports for index users
pub mod prelude {
    pub use crate::{
        core::config::{Config, ConfigError, IndexSettings, OctreeConfig, QueryConfig},
        foundation::math::{Point3, Vec3},
        physics::sensing::{altitude, bottom_corners, is_penetrating, pick, probe_contacts},
        spatial::{
            DisplayMode, PointSet, Ray, RayInterval, SpatialError, SpatialIndex,
            SpatialIndexBuilder, SpatialNode, AABB,
        },
    };
}
