//! Configuration for the crosshair framework
//!
//! Settings live in a single TOML file next to the plugin:
//! - Type-safe config struct via serde
//! - Auto-generation of a default file on first load
//! - Manual reload capability
//!
//! # Example
//!
//! ```ignore
//! use dcf_core::CrosshairConfig;
//!
//! let config = CrosshairConfig::load().unwrap_or_default();
//! println!("Menu toggle key: {:#x}", config.toggle_key);
//! ```

mod loader;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use dcf_sdk::input::vk;

pub use loader::{config_path, game_root_dir, log_path, plugins_dir};

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Could not determine config directory from the game location
    #[error("Config directory not available - could not resolve game root")]
    NoConfigDirectory,
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Where the overlay takes its crosshair art from
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrosshairSource {
    #[default]
    Images = 0,
    IconFont = 1,
    WebIconPack = 2,
}

impl CrosshairSource {
    pub const ALL: [CrosshairSource; 3] = [
        CrosshairSource::Images,
        CrosshairSource::IconFont,
        CrosshairSource::WebIconPack,
    ];

    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }

    /// Label shown in the configuration menu
    pub const fn label(self) -> &'static str {
        match self {
            CrosshairSource::Images => "Images",
            CrosshairSource::IconFont => "Icon Font",
            CrosshairSource::WebIconPack => "Web Icon Pack",
        }
    }
}

impl fmt::Display for CrosshairSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Plugin configuration.
///
/// Loaded from `Data/SKSE/Plugins/DynamicCrosshairFramework.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairConfig {
    /// Config version for future migration support
    pub version: u32,

    /// Enable debug logging
    pub debug: bool,

    /// Print every crosshair change to the in-game console
    pub print_to_console: bool,

    /// Virtual key code that opens and closes the configuration menu
    pub toggle_key: u32,

    /// Crosshair art source
    pub source: CrosshairSource,

    /// Crosshair size in pixels
    pub crosshair_size: f32,
}

impl Default for CrosshairConfig {
    fn default() -> Self {
        Self {
            version: 1,
            debug: false,
            print_to_console: false,
            toggle_key: vk::F10,
            source: CrosshairSource::Images,
            crosshair_size: 32.0,
        }
    }
}

impl CrosshairConfig {
    /// Load config from the default path, creating a default file if missing.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&config_path()?)
    }

    /// Save config to the default path.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&config_path()?)
    }

    /// Reload config from the default path.
    pub fn reload(&mut self) -> ConfigResult<()> {
        self.reload_from(&config_path()?)
    }

    /// Load config from `path`, creating a default file if missing.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            tracing::debug!("Loaded config from {:?}", path);
            Ok(config)
        } else {
            let default = Self::default();
            default.save_to(path)?;
            tracing::info!("Created default config at {:?}", path);
            Ok(default)
        }
    }

    /// Save config to `path`.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reload config from `path`.
    ///
    /// Updates self with the current file contents.
    pub fn reload_from(&mut self, path: &Path) -> ConfigResult<()> {
        let content = std::fs::read_to_string(path)?;
        *self = toml::from_str(&content)?;
        tracing::debug!("Reloaded config from {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CrosshairConfig::default();
        assert_eq!(config.version, 1);
        assert!(!config.debug);
        assert_eq!(config.toggle_key, 0x79);
        assert_eq!(config.source, CrosshairSource::Images);
    }

    #[test]
    fn test_config_serialize() {
        let config = CrosshairConfig {
            source: CrosshairSource::WebIconPack,
            print_to_console: true,
            ..CrosshairConfig::default()
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("source = \"web_icon_pack\""));
        assert!(toml_str.contains("print_to_console = true"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: CrosshairConfig = toml::from_str("debug = true\nsource = \"icon_font\"").unwrap();
        assert!(config.debug);
        assert_eq!(config.source, CrosshairSource::IconFont);
        assert_eq!(config.toggle_key, vk::F10);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("crosshair.toml");

        let config = CrosshairConfig::load_from(&path).unwrap();
        assert_eq!(config, CrosshairConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_reload_picks_up_edits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crosshair.toml");

        let mut config = CrosshairConfig::load_from(&path).unwrap();
        std::fs::write(&path, "toggle_key = 0x7A\n").unwrap();
        config.reload_from(&path).unwrap();
        assert_eq!(config.toggle_key, vk::F11);
    }

    #[test]
    fn test_invalid_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crosshair.toml");
        std::fs::write(&path, "source = 12").unwrap();

        let result = CrosshairConfig::load_from(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_source_raw() {
        assert_eq!(CrosshairSource::from_raw(1), Some(CrosshairSource::IconFont));
        assert_eq!(CrosshairSource::from_raw(3), None);
        assert_eq!(CrosshairSource::WebIconPack.to_string(), "Web Icon Pack");
    }
}
