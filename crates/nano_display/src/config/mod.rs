//! Configuration system
//!
//! Settings files are TOML or RON, chosen by extension. `DisplaySystemConfig`
//! is the top-level structure applications load; `WindowConfig` describes the
//! window to create.
//!
//! Every field has a default, so a settings file only needs the values it
//! changes, and a missing file is not an error when loaded through
//! [`Config::load_or_default`].

mod window;

use std::path::Path;

pub use serde::{Deserialize, Serialize};
pub use window::{DisplaySystemConfig, WindowConfig};

/// On-disk settings format, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Format for a path, or `UnsupportedFormat` for any other extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn parse<T: for<'de> Deserialize<'de>>(self, text: &str) -> Result<T, ConfigError> {
        match self {
            Self::Toml => toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string())),
            Self::Ron => ron::from_str(text).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    fn render<T: Serialize>(self, value: &T) -> Result<String, ConfigError> {
        match self {
            Self::Toml => toml::to_string_pretty(value).map_err(|e| ConfigError::Serialize(e.to_string())),
            Self::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string())),
        }
    }
}

/// Configuration trait
///
/// Implemented by any settings struct that can round-trip through serde and
/// has sensible defaults. The format is never sniffed from file contents;
/// only the extension decides.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        format.parse(&contents)
    }

    /// Load configuration from file, or fall back to defaults when the file does not exist
    ///
    /// Any other failure (unreadable file, bad syntax, unknown extension) is
    /// still reported.
    fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("{} not found, using default configuration", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = ConfigFormat::from_path(path)?.render(self)?;
        std::fs::write(path, contents)?;
        log::debug!("saved configuration to {}", path.display());
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Extension other than `.toml` or `.ron`
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values that parse but make no sense together
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
