//! Dynamic Crosshair Framework - Core Logic
//!
//! This crate contains the interaction classifier, the crosshair monitor and
//! the configuration menu state for the dynamic crosshair framework.
//!
//! # Re-exports
//!
//! This crate re-exports the SDK and engine crates for convenience:
//! - [`sdk`] - Host game types, handles and the host function table
//! - [`engine`] - Host bridge loading, world traits and globals

// Re-export SDK and engine crates
pub use dcf_engine as engine;
pub use dcf_sdk as sdk;

pub mod config;
pub mod console;
pub mod interaction;
pub mod menu;
pub mod monitor;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use console::{describe_interaction, register_console_printer};
pub use interaction::{activation_flags, classify, ActivationFlags, InteractionType};
pub use monitor::{CrosshairCallback, CrosshairMonitor, MonitorState, ObserverKey};

// Re-export menu types
pub use menu::{key_name, KeyEvent, Menu, MenuInputSink};

// Re-export config types
pub use config::{ConfigError, ConfigResult, CrosshairConfig, CrosshairSource};
