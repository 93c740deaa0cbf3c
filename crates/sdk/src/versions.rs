//! ABI version and plugin identity constants
//!
//! The native bridge and the Rust plugin must agree on [`HOST_API_VERSION`].
//! Bump it whenever the layout of [`crate::HostApi`] changes.

/// Layout version of the [`crate::HostApi`] function table
pub const HOST_API_VERSION: u32 = 1;

/// Plugin name as registered with the script extender
pub const PLUGIN_NAME: &str = "DynamicCrosshairFramework";

/// Plugin version (major, minor, patch)
pub const PLUGIN_VERSION: (u16, u16, u16) = (0, 1, 0);
