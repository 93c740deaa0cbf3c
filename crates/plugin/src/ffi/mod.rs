//! C-compatible exports for the native bridge
//!
//! - [`exports`] - Plugin lifecycle, crosshair notifications and queries
//! - [`menu`] - Configuration menu input and state

pub mod exports;
pub mod menu;

use std::ffi::c_char;

/// Helper to write an error message to a C buffer
///
/// # Safety
/// - `error` must be a valid pointer or null
/// - `maxlen` must accurately reflect the buffer size
pub(crate) unsafe fn write_error(error: *mut c_char, maxlen: usize, msg: &str) {
    if !error.is_null() && maxlen > 0 {
        let bytes = msg.as_bytes();
        let len = bytes.len().min(maxlen - 1);
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), error as *mut u8, len);
        *error.add(len) = 0;
    }
}
