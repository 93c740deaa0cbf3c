//! Plugin-lifetime state
//!
//! Everything built during `dcf_plugin_load` lives here, behind a OnceLock so
//! the FFI entry points can reach it from any thread.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use dcf_core::config::ConfigResult;
use dcf_core::{key_name, register_console_printer, CrosshairConfig, CrosshairMonitor, Menu};
use dcf_engine::{is_main_thread, HostWorld};
use dcf_sdk::ObjectRefHandle;

/// State owned by the loaded plugin
pub struct PluginState {
    pub monitor: CrosshairMonitor,
    pub menu: Menu,
    pub config: RwLock<CrosshairConfig>,
    /// Set once the bridge confirms the crosshair event source
    monitor_active: AtomicBool,
}

impl PluginState {
    /// Build the monitor and menu for `world`
    ///
    /// Starts inactive; call [`PluginState::activate`] once the crosshair
    /// event source is registered.
    pub fn new(world: Arc<dyn HostWorld>, config: CrosshairConfig) -> Self {
        let monitor = CrosshairMonitor::new(world);
        if config.print_to_console {
            register_console_printer(&monitor);
            tracing::debug!("Printing crosshair changes to the console");
        }

        Self {
            monitor,
            menu: Menu::new(&config),
            config: RwLock::new(config),
            monitor_active: AtomicBool::new(false),
        }
    }

    /// Start forwarding crosshair notifications to the monitor
    pub fn activate(&self) {
        self.monitor_active.store(true, Ordering::Release);
    }

    /// Stop forwarding crosshair notifications
    pub fn deactivate(&self) {
        self.monitor_active.store(false, Ordering::Release);
    }

    pub fn is_active(&self) -> bool {
        self.monitor_active.load(Ordering::Acquire)
    }

    /// Forward a raw crosshair notification to the monitor while active
    ///
    /// Returns `true` when the monitor's stored target or interaction changed.
    pub fn on_crosshair_ref(&self, raw_handle: u32) -> bool {
        if !self.is_active() {
            tracing::trace!("Crosshair notification while inactive, ignored");
            return false;
        }

        if !is_main_thread() {
            tracing::debug!("Crosshair notification off the main thread");
        }

        let candidate = ObjectRefHandle::from_raw(raw_handle).into_option();
        self.monitor.on_crosshair_ref_changed(candidate)
    }

    pub fn crosshair_size(&self) -> f32 {
        self.config.read().crosshair_size
    }

    /// Re-read the config file and apply it to the menu
    pub fn reload_config(&self) -> ConfigResult<()> {
        let mut config = self.config.write();
        config.reload()?;
        self.apply_config(&config);
        Ok(())
    }

    /// Re-read the config from `path` and apply it to the menu
    ///
    /// On error the current config stays in place.
    pub fn reload_config_from(&self, path: &Path) -> ConfigResult<()> {
        let mut config = self.config.write();
        config.reload_from(path)?;
        self.apply_config(&config);
        Ok(())
    }

    fn apply_config(&self, config: &CrosshairConfig) {
        self.menu.set_toggle_key(config.toggle_key);
        if self.menu.source() != config.source {
            self.menu.set_source(config.source);
        }
        tracing::info!(
            "Config reloaded, menu toggles with {}",
            key_name(config.toggle_key)
        );
    }
}

static STATE: OnceLock<PluginState> = OnceLock::new();

/// Store the plugin state
///
/// Returns `None` if the plugin was already loaded.
pub fn init_state(state: PluginState) -> Option<&'static PluginState> {
    STATE.set(state).ok()?;
    STATE.get()
}

/// Get the plugin state, `None` before a successful load
pub fn try_state() -> Option<&'static PluginState> {
    STATE.get()
}
