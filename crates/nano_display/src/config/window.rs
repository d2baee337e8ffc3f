//! # Window and display configuration
//!
//! Startup settings for the window, the logging filter, the VR compositor
//! timing mode and where power state is read from.

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};
use crate::display::WindowMode;
use crate::power::{SysfsPowerSource, DEFAULT_POWER_SUPPLY_ROOT};
use crate::vr::TimingMode;

/// # Window Configuration
///
/// Parameters for creating the application window. The defaults match an
/// 800x600 window at (32, 32) that immediately switches to fullscreen-windowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial position of the top-left corner
    pub position: (i32, i32),
    /// Initial client size in pixels
    pub size: (u32, u32),
    /// Mode applied right after creation
    pub mode: WindowMode,
    /// Display to apply the mode on; `None` means the one hosting the window
    pub display_index: Option<usize>,
    /// Whether the user may resize the window
    pub resizable: bool,
    /// Whether the window is shown on creation
    pub visible: bool,
}

impl WindowConfig {
    /// Create a window configuration with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            position: (32, 32),
            size: (800, 600),
            mode: WindowMode::FullscreenWindowed,
            display_index: None,
            resizable: true,
            visible: true,
        }
    }

    /// Set initial position
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.position = (x, y);
        self
    }

    /// Set initial size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Set the mode applied after creation
    pub fn with_mode(mut self, mode: WindowMode) -> Self {
        self.mode = mode;
        self
    }

    /// Target a specific display
    pub fn with_display(mut self, index: usize) -> Self {
        self.display_index = Some(index);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.size.0, self.size.1
            )));
        }
        if i32::try_from(self.size.0).is_err() || i32::try_from(self.size.1).is_err() {
            return Err(ConfigError::Invalid("window size exceeds native range".to_string()));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new("Nano Display")
    }
}

/// # Display System Configuration
///
/// Top-level configuration applications load at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySystemConfig {
    /// Default log filter, used when `RUST_LOG` is unset
    pub log_level: String,
    /// Window to create
    pub window: WindowConfig,
    /// Compositor timing mode for VR sessions
    pub vr_timing_mode: TimingMode,
    /// Directory laid out like `/sys/class/power_supply`
    pub power_supply_root: String,
}

impl DisplaySystemConfig {
    /// Create a configuration with defaults and the given window title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            log_level: "info".to_string(),
            window: WindowConfig::new(title),
            vr_timing_mode: TimingMode::default(),
            power_supply_root: DEFAULT_POWER_SUPPLY_ROOT.to_string(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Replace the window configuration
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Set VR compositor timing mode
    pub fn with_vr_timing_mode(mut self, mode: TimingMode) -> Self {
        self.vr_timing_mode = mode;
        self
    }

    /// Power source reading from the configured directory
    pub fn power_source(&self) -> SysfsPowerSource {
        SysfsPowerSource::new(&self.power_supply_root)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log level cannot be empty".to_string()));
        }
        self.window.validate()
    }
}

impl Default for DisplaySystemConfig {
    fn default() -> Self {
        Self::new("Nano Display")
    }
}

impl Config for DisplaySystemConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_title_only_window() {
        let config = WindowConfig::default();
        assert_eq!(config.position, (32, 32));
        assert_eq!(config.size, (800, 600));
        assert_eq!(config.mode, WindowMode::FullscreenWindowed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = WindowConfig::new("zero").with_size(0, 600);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_toml_partial_file_uses_defaults() {
        let text = r#"
            log_level = "debug"
            vr_timing_mode = "application_performs_post_present_handoff"

            [window]
            title = "Demo"
            mode = "windowed"
            size = [1024, 768]
        "#;
        let config: DisplaySystemConfig = toml::from_str(text).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.vr_timing_mode, TimingMode::ApplicationPerformsPostPresentHandoff);
        assert_eq!(config.window.title, "Demo");
        assert_eq!(config.window.mode, WindowMode::Windowed);
        assert_eq!(config.window.size, (1024, 768));
        assert_eq!(config.window.position, (32, 32));
        assert_eq!(config.window.display_index, None);
    }

    #[test]
    fn test_ron_file_round_trip() {
        let file = NamedTempFile::with_suffix(".ron").unwrap();
        let path = file.path();
        let config = DisplaySystemConfig::new("Saved")
            .with_log_level("warn")
            .with_window(WindowConfig::new("Saved").with_display(1).with_mode(WindowMode::Fullscreen))
            .with_vr_timing_mode(TimingMode::RuntimePerformsPostPresentHandoff);

        config.save_to_file(path).unwrap();
        let loaded = DisplaySystemConfig::load_from_file(path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = DisplaySystemConfig::default().save_to_file("settings.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_toml_file_with_bad_syntax_is_reported() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        file.write_all(b"log_level = [unterminated").unwrap();

        let result = DisplaySystemConfig::load_or_default(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = DisplaySystemConfig::load_or_default("/nonexistent/nano_display.toml").unwrap();
        assert_eq!(config, DisplaySystemConfig::default());
    }
}
