//! # Index Configuration
//!
//! Settings for building and querying the terrain octree, grouped the way the
//! host loads them from a single TOML or RON file.
//!
//! ```toml
//! log_level = "info"
//!
//! [octree]
//! max_depth = 8
//!
//! [query.ray_interval]
//! t_min = -1000.0
//! t_max = 1000.0
//!
//! [display]
//! mode = "levels"
//! count = 3
//! ```

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};
use crate::spatial::{DisplayMode, RayInterval};

/// # Octree Build Configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OctreeConfig {
    /// Maximum subdivision depth (0 keeps the whole mesh in the root)
    ///
    /// Coincident vertices never separate, so they are split all the way down
    /// to this depth with up to `8^max_depth` nodes. Keep it low for meshes
    /// that repeat positions.
    pub max_depth: u32,
}

impl OctreeConfig {
    /// Depth beyond which node counts explode with no gain at terrain scale
    pub const MAX_SUPPORTED_DEPTH: u32 = 16;

    /// Create a new octree configuration
    pub fn new() -> Self {
        Self { max_depth: 8 }
    }

    /// Set maximum subdivision depth
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth > Self::MAX_SUPPORTED_DEPTH {
            return Err(ConfigError::Invalid(format!(
                "octree max_depth {} exceeds the supported maximum of {}",
                self.max_depth,
                Self::MAX_SUPPORTED_DEPTH
            )));
        }
        Ok(())
    }
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Query Configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QueryConfig {
    /// Parametric bounds applied to every ray query
    pub ray_interval: RayInterval,
}

impl QueryConfig {
    /// Set the ray interval
    pub fn with_ray_interval(mut self, ray_interval: RayInterval) -> Self {
        self.ray_interval = ray_interval;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.ray_interval.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "ray interval [{}, {}] must be finite with t_min <= t_max",
                self.ray_interval.t_min, self.ray_interval.t_max
            )));
        }
        Ok(())
    }
}

/// # Complete Index Settings
///
/// Top-level configuration hosts load from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexSettings {
    /// Default log filter (overridden by `RUST_LOG`)
    pub log_level: String,
    /// Build settings
    pub octree: OctreeConfig,
    /// Query settings
    pub query: QueryConfig,
    /// Debug drawing mode handed to the renderer
    pub display: DisplayMode,
}

impl IndexSettings {
    /// Create settings with defaults
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            octree: OctreeConfig::default(),
            query: QueryConfig::default(),
            display: DisplayMode::default(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set build settings
    pub fn with_octree(mut self, octree: OctreeConfig) -> Self {
        self.octree = octree;
        self
    }

    /// Set query settings
    pub fn with_query(mut self, query: QueryConfig) -> Self {
        self.query = query;
        self
    }

    /// Set debug drawing mode
    pub fn with_display(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level cannot be empty".to_string()));
        }
        self.octree.validate()?;
        self.query.validate()?;
        Ok(())
    }
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for IndexSettings {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = IndexSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.octree.max_depth, 8);
        assert_eq!(settings.query.ray_interval, RayInterval::default());
        assert_eq!(settings.display, DisplayMode::Hidden);
    }

    #[test]
    fn test_parse_toml_with_partial_sections() {
        let text = r#"
            log_level = "debug"

            [octree]
            max_depth = 5

            [display]
            mode = "levels"
            count = 3
        "#;
        let settings = IndexSettings::from_toml_str(text).expect("valid toml");
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.octree.max_depth, 5);
        assert_eq!(settings.query, QueryConfig::default());
        assert_eq!(settings.display, DisplayMode::Levels { count: 3 });
    }

    #[test]
    fn test_parse_ron() {
        let text = r#"(
            octree: (max_depth: 4),
            query: (ray_interval: (t_min: 0.0, t_max: 250.0)),
        )"#;
        let settings = IndexSettings::from_ron_str(text).expect("valid ron");
        assert_eq!(settings.octree.max_depth, 4);
        assert_eq!(settings.query.ray_interval, RayInterval::forward(250.0));
        assert_eq!(settings.display, DisplayMode::Hidden);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let too_deep = IndexSettings::new().with_octree(OctreeConfig::new().with_max_depth(40));
        assert!(matches!(too_deep.validate(), Err(ConfigError::Invalid(_))));

        let inverted = IndexSettings::new()
            .with_query(QueryConfig::default().with_ray_interval(RayInterval::new(10.0, -10.0)));
        assert!(matches!(inverted.validate(), Err(ConfigError::Invalid(_))));

        let silent = IndexSettings::new().with_log_level("  ");
        assert!(silent.validate().is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = IndexSettings::load_from_file("settings.yaml").expect_err("not a config format");
        // The file does not exist, so the read fails before format dispatch
        assert!(matches!(err, ConfigError::Io(_)));

        let err = IndexSettings::default()
            .save_to_file("settings.yaml")
            .expect_err("not a config format");
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
