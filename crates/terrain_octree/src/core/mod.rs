//! Core configuration shared by the index and its hosts

pub mod config;

pub use config::{IndexSettings, OctreeConfig, QueryConfig};
