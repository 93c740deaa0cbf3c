//! Dynamic Crosshair Engine - Host Loading and World Queries
//!
//! This crate handles:
//! - The [`HostWorld`] and [`PlayerCharacter`] capabilities the framework
//!   consumes from the game
//! - Validating the native bridge's [`HostApi`](dcf_sdk::HostApi) table and
//!   wrapping it as an [`FfiHost`]
//! - Storing the loaded host in a global for the plugin's lifetime
//!
//! # Architecture
//!
//! The host table is validated once during plugin load via
//! [`loader::load_host`] and stored in [`globals::HostGlobals`]. The core crate
//! only ever sees `dyn HostWorld`, so tests drive it with in-memory fakes.

pub mod error;
pub mod globals;
pub mod loader;
pub mod world;

pub use error::HostError;
pub use globals::{init_host, is_main_thread, HostGlobals};
pub use loader::{load_host, FfiHost};
pub use world::{HostWorld, PlayerCharacter};
