//! Object reference handles
//!
//! The host never hands out stable pointers to world objects. Instead it uses
//! a handle that combines a slot index with an age counter. The age advances
//! every time a slot is freed and reused, so a handle to a destroyed object
//! never compares equal to a handle to the object that replaced it.
//!
//! # Handle Format
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           u32 raw value                          │
//! ├─────────────────────────────┬───────────────────────────────────┤
//! │        Age (12 bits)        │        Slot Index (20 bits)       │
//! │         bits 20-31          │           bits 0-19               │
//! └─────────────────────────────┴───────────────────────────────────┘
//! ```
//!
//! - Slot index: Lower 20 bits
//! - Age: Upper 12 bits
//! - Invalid handle: 0 (slot 0 is never handed out)

use std::fmt;

/// Number of slot index bits
pub const INDEX_BITS: u32 = 20;

/// Number of age bits
pub const AGE_BITS: u32 = 12;

/// Invalid handle sentinel value
pub const INVALID_HANDLE: u32 = 0;

const INDEX_MASK: u32 = (1 << INDEX_BITS) - 1;
const AGE_MASK: u32 = (1 << AGE_BITS) - 1;

/// A generational handle to an object reference in the game world
///
/// Equality compares the full raw value, so two handles are equal only when
/// they name the same slot in the same generation. Whether the object behind a
/// valid handle is still alive is a question for the host.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ObjectRefHandle(u32);

impl ObjectRefHandle {
    /// Create a handle from its raw value
    #[inline]
    pub const fn from_raw(value: u32) -> Self {
        Self(value)
    }

    /// Build a handle from slot index and age
    #[inline]
    pub const fn new(index: u32, age: u32) -> Self {
        Self(((age & AGE_MASK) << INDEX_BITS) | (index & INDEX_MASK))
    }

    /// The invalid handle
    #[inline]
    pub const fn invalid() -> Self {
        Self(INVALID_HANDLE)
    }

    /// Get the raw handle value
    #[inline]
    pub const fn raw(&self) -> u32 {
        self.0
    }

    /// Slot index (lower 20 bits)
    #[inline]
    pub const fn index(&self) -> u32 {
        self.0 & INDEX_MASK
    }

    /// Slot age (upper 12 bits)
    #[inline]
    pub const fn age(&self) -> u32 {
        self.0 >> INDEX_BITS
    }

    /// Check that this is not the invalid sentinel
    ///
    /// A valid handle may still refer to an object that no longer exists.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.index() != 0
    }

    /// `Some(self)` for valid handles, `None` for the sentinel
    #[inline]
    pub fn into_option(self) -> Option<Self> {
        self.is_valid().then_some(self)
    }

    /// Same slot, next generation
    #[inline]
    pub const fn next_age(&self) -> Self {
        Self::new(self.index(), self.age().wrapping_add(1))
    }
}

impl From<Option<ObjectRefHandle>> for ObjectRefHandle {
    fn from(handle: Option<ObjectRefHandle>) -> Self {
        handle.unwrap_or_default()
    }
}

impl fmt::Debug for ObjectRefHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(
                f,
                "ObjectRefHandle(index={}, age={})",
                self.index(),
                self.age()
            )
        } else {
            write!(f, "ObjectRefHandle(invalid)")
        }
    }
}

impl fmt::Display for ObjectRefHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}:{}", self.index(), self.age())
        } else {
            write!(f, "invalid")
        }
    }
}
