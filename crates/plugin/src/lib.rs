//! Dynamic Crosshair Plugin - FFI Layer
//!
//! This crate provides the FFI boundary between the native script extender
//! bridge and the Rust core logic. It compiles to a cdylib (.dll/.so).

pub mod ffi;
mod logging;
mod state;

/// Shutdown the plugin
///
/// Called from the FFI layer when the bridge unloads the plugin.
pub fn shutdown() {
    tracing::info!("Dynamic Crosshair Framework shutting down...");

    if let Some(state) = state::try_state() {
        state.deactivate();
        tracing::debug!(
            "Monitor saw {} notifications, {} changes",
            state.monitor.notification_count(),
            state.monitor.change_count()
        );
    }
}
