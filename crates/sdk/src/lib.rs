//! Dynamic Crosshair SDK - Host Game Type Definitions
//!
//! This crate contains the plain data types shared between the host bridge and
//! the Rust framework. It has no dependencies and compiles quickly, allowing
//! parallel compilation of dependent crates.
//!
//! # Modules
//!
//! - [`forms`] - Form types, form IDs and lock levels
//! - [`handle`] - Generational object reference handles
//! - [`host_api`] - The C function table supplied by the native bridge
//! - [`input`] - Input devices, event types and key codes
//! - [`versions`] - ABI version and plugin identity constants

pub mod forms;
pub mod handle;
pub mod host_api;
pub mod input;
pub mod versions;

pub use forms::*;
pub use handle::ObjectRefHandle;
pub use host_api::*;
pub use input::{InputDevice, InputEventType};
pub use versions::HOST_API_VERSION;
