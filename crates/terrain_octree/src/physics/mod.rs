//! Physics-facing consumers of the terrain index
//!
//! Picking, altitude sensing and collision probing. Collision response stays
//! with the caller.

pub mod sensing;

pub use sensing::{
    altitude,
    bottom_corners,
    is_penetrating,
    nearest_point,
    pick,
    probe_contacts,
    AltitudeSample,
    Contact,
    PointHit,
};
