//! Host function table
//!
//! The native bridge owns the game-side object model. It hands the plugin a
//! table of plain C functions at load time; everything the framework learns
//! about the world goes through this table. Object references cross the
//! boundary as raw [`crate::ObjectRefHandle`] values and forms as raw
//! [`crate::FormId`] values.

use std::ffi::c_char;

/// Returns the raw handle under the crosshair, 0 when nothing is targeted
pub type CrosshairTargetFn = unsafe extern "C" fn() -> u32;

/// Predicate on an object reference
pub type RefPredicateFn = unsafe extern "C" fn(handle: u32) -> bool;

/// Returns the base form type of a reference, or -1 when it has no base object
pub type RefFormTypeFn = unsafe extern "C" fn(handle: u32) -> i32;

/// Writes the display name into `buffer` (not null-terminated), returns the
/// full name length in bytes
pub type RefNameFn = unsafe extern "C" fn(handle: u32, buffer: *mut c_char, len: usize) -> usize;

/// Returns the raw lock level of a reference
pub type RefLockLevelFn = unsafe extern "C" fn(handle: u32) -> i32;

/// Returns the key form of a reference's lock, 0 when there is none
pub type RefLockKeyFn = unsafe extern "C" fn(handle: u32) -> u32;

/// Player query without arguments
pub type PlayerFlagFn = unsafe extern "C" fn() -> bool;

/// Returns how many of a form the player carries
pub type PlayerItemCountFn = unsafe extern "C" fn(form_id: u32) -> i32;

/// Prints a null-terminated message to the in-game console
pub type ConsolePrintFn = unsafe extern "C" fn(message: *const c_char);

/// Registers the bridge's crosshair event sink, returns false when the event
/// source is unavailable
pub type RegisterSinkFn = unsafe extern "C" fn() -> bool;

/// Table of host functions passed to `dcf_plugin_load`
///
/// Every entry is nullable. The loader rejects tables missing a required entry;
/// optional entries are documented as such.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct HostApi {
    /// Must equal [`crate::HOST_API_VERSION`]
    pub version: u32,

    pub crosshair_target: Option<CrosshairTargetFn>,
    pub ref_is_live: Option<RefPredicateFn>,
    pub ref_form_type: Option<RefFormTypeFn>,
    /// Optional
    pub ref_name: Option<RefNameFn>,
    pub ref_is_locked: Option<RefPredicateFn>,
    pub ref_lock_level: Option<RefLockLevelFn>,
    pub ref_lock_key: Option<RefLockKeyFn>,
    pub ref_is_dead: Option<RefPredicateFn>,

    pub player_available: Option<PlayerFlagFn>,
    pub player_is_sneaking: Option<PlayerFlagFn>,
    pub player_item_count: Option<PlayerItemCountFn>,
    pub player_would_be_stealing: Option<RefPredicateFn>,
    pub actor_is_hostile_to_player: Option<RefPredicateFn>,
    pub actor_is_player_teammate: Option<RefPredicateFn>,

    /// Optional
    pub console_print: Option<ConsolePrintFn>,
    /// Optional; without it the crosshair monitor stays inactive
    pub register_crosshair_sink: Option<RegisterSinkFn>,
}
