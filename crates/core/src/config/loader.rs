//! Config path resolution
//!
//! Handles resolving paths for configuration and log files based on the game's
//! install location.

use std::path::PathBuf;

use dcf_sdk::versions::PLUGIN_NAME;

use super::{ConfigError, ConfigResult};

/// Returns the game root directory, the folder holding the game executable.
///
/// The plugin is loaded into the game process, so the current executable is
/// the game itself:
/// `<game root>/SkyrimSE.exe`
pub fn game_root_dir() -> ConfigResult<PathBuf> {
    let exe = std::env::current_exe().map_err(ConfigError::IoError)?;

    exe.parent()
        .map(PathBuf::from)
        .ok_or(ConfigError::NoConfigDirectory)
}

/// Returns the script extender plugin directory.
///
/// Path: `<game root>/Data/SKSE/Plugins/`
pub fn plugins_dir() -> ConfigResult<PathBuf> {
    Ok(game_root_dir()?.join("Data").join("SKSE").join("Plugins"))
}

/// Returns the path of the plugin's config file.
///
/// Path: `<game root>/Data/SKSE/Plugins/DynamicCrosshairFramework.toml`
pub fn config_path() -> ConfigResult<PathBuf> {
    Ok(plugins_dir()?.join(format!("{}.toml", PLUGIN_NAME)))
}

/// Returns the path of the plugin's log file.
///
/// Path: `<game root>/Data/SKSE/Plugins/DynamicCrosshairFramework.log`
pub fn log_path() -> ConfigResult<PathBuf> {
    Ok(plugins_dir()?.join(format!("{}.log", PLUGIN_NAME)))
}
