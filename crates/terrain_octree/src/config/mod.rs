//! Settings files for index hosts
//!
//! Hosts keep their [`IndexSettings`](crate::core::IndexSettings) in a TOML or
//! RON file; the extension picks the format.

pub use serde::{Serialize, Deserialize};

/// A settings type that can be read from and written to a `.toml` or `.ron` file
///
/// [`IndexSettings`](crate::core::IndexSettings) is the implementor hosts load
/// at startup. Parsing does not validate; call the type's `validate()` after
/// loading.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Read settings from `path`, choosing the parser by extension
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;

        if path.ends_with(".toml") {
            Self::from_toml_str(&contents)
        } else if path.ends_with(".ron") {
            Self::from_ron_str(&contents)
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Parse settings from TOML text; missing sections take their defaults
    fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse settings from RON text; missing fields take their defaults
    fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Write settings to `path` in the format its extension names
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Failures while reading, writing or checking a settings file
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The settings file could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file's text is not valid TOML/RON for the settings type
    #[error("Parse error: {0}")]
    Parse(String),

    /// The settings could not be rendered in the requested format
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// The path's extension is neither `.toml` nor `.ron`
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values that parsed but make no sense
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
