//! Configuration menu exports
//!
//! The bridge's input hook feeds raw events in with [`dcf_queue_input_event`]
//! and asks [`dcf_should_swallow_input`] whether to hide them from the game.
//! The overlay drains them each frame through [`dcf_process_input_queue`].

use std::ffi::c_void;

use dcf_core::{CrosshairSource, KeyEvent, MenuInputSink};
use dcf_sdk::{InputDevice, InputEventType};

use crate::state::try_state;

/// Native UI callbacks that receive translated menu input
///
/// Null callbacks are skipped.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct MenuInputCallbacks {
    /// Passed back unchanged as the first argument of every callback
    pub user_data: *mut c_void,
    pub add_char: Option<unsafe extern "C" fn(user_data: *mut c_void, code_point: u32)>,
    pub add_mouse_button:
        Option<unsafe extern "C" fn(user_data: *mut c_void, button: u32, pressed: bool)>,
    pub add_key: Option<unsafe extern "C" fn(user_data: *mut c_void, vk: u32, pressed: bool)>,
}

// SAFETY (all calls below): `dcf_process_input_queue` requires the callbacks
// and `user_data` to be valid for the duration of the call.
impl MenuInputSink for MenuInputCallbacks {
    fn add_char(&mut self, code_point: u32) {
        if let Some(add_char) = self.add_char {
            unsafe { add_char(self.user_data, code_point) };
        }
    }

    fn add_mouse_button(&mut self, button: u32, pressed: bool) {
        if let Some(add_mouse_button) = self.add_mouse_button {
            unsafe { add_mouse_button(self.user_data, button, pressed) };
        }
    }

    fn add_key(&mut self, vk: u32, pressed: bool) {
        if let Some(add_key) = self.add_key {
            unsafe { add_key(self.user_data, vk, pressed) };
        }
    }
}

/// Queue a raw input event from the bridge's input hook
///
/// Returns `false` for unknown devices or event types, for event types the
/// menu ignores, and when the queue is full.
#[no_mangle]
pub extern "C" fn dcf_queue_input_event(
    device: u32,
    event_type: u32,
    key_code: u32,
    value: f32,
    held_down_secs: f32,
) -> bool {
    let Some(state) = try_state() else {
        return false;
    };
    let (Some(device), Some(event_type)) =
        (InputDevice::from_raw(device), InputEventType::from_raw(event_type))
    else {
        tracing::trace!("Unknown input device {} or event type {}", device, event_type);
        return false;
    };

    state.menu.queue_input_event(KeyEvent {
        key_code,
        device,
        event_type,
        value,
        held_down_secs,
    })
}

/// Drain queued menu input into native UI callbacks
///
/// Returns the number of events processed.
///
/// # Safety
/// - `callbacks` must be null or point to a valid `MenuInputCallbacks` whose
///   function pointers and `user_data` stay valid for the duration of the call
#[no_mangle]
pub unsafe extern "C" fn dcf_process_input_queue(callbacks: *const MenuInputCallbacks) -> usize {
    let (Some(callbacks), Some(state)) = (callbacks.as_ref(), try_state()) else {
        return 0;
    };

    let mut sink = *callbacks;
    state.menu.process_input_queue(&mut sink)
}

/// Whether the game should ignore input because the menu has focus
#[no_mangle]
pub extern "C" fn dcf_should_swallow_input() -> bool {
    try_state().is_some_and(|s| s.menu.should_swallow_input())
}

#[no_mangle]
pub extern "C" fn dcf_menu_is_open() -> bool {
    try_state().is_some_and(|s| s.menu.is_open())
}

/// Current crosshair source, 0 (`Images`) before load
#[no_mangle]
pub extern "C" fn dcf_menu_source() -> u8 {
    try_state()
        .map(|s| s.menu.source())
        .unwrap_or_default() as u8
}

/// Switch the crosshair source and persist it to the config file
///
/// Returns `false` for unknown sources or before load.
#[no_mangle]
pub extern "C" fn dcf_set_menu_source(source: u8) -> bool {
    let (Some(source), Some(state)) = (CrosshairSource::from_raw(source), try_state()) else {
        return false;
    };

    state.menu.set_source(source);

    let mut config = state.config.write();
    config.source = source;
    if let Err(e) = config.save() {
        tracing::warn!("Failed to save config: {}", e);
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorded {
        chars: Vec<u32>,
        mouse: Vec<(u32, bool)>,
        keys: Vec<(u32, bool)>,
    }

    unsafe extern "C" fn record_char(user_data: *mut c_void, code_point: u32) {
        let recorded = &mut *(user_data as *mut Recorded);
        recorded.chars.push(code_point);
    }

    unsafe extern "C" fn record_mouse(user_data: *mut c_void, button: u32, pressed: bool) {
        let recorded = &mut *(user_data as *mut Recorded);
        recorded.mouse.push((button, pressed));
    }

    unsafe extern "C" fn record_key(user_data: *mut c_void, vk: u32, pressed: bool) {
        let recorded = &mut *(user_data as *mut Recorded);
        recorded.keys.push((vk, pressed));
    }

    #[test]
    fn test_callbacks_forward_user_data() {
        let mut recorded = Recorded::default();
        let mut sink = MenuInputCallbacks {
            user_data: &mut recorded as *mut Recorded as *mut c_void,
            add_char: Some(record_char),
            add_mouse_button: Some(record_mouse),
            add_key: Some(record_key),
        };

        sink.add_char(0x61);
        sink.add_mouse_button(1, true);
        sink.add_key(0x79, false);

        assert_eq!(recorded.chars, vec![0x61]);
        assert_eq!(recorded.mouse, vec![(1, true)]);
        assert_eq!(recorded.keys, vec![(0x79, false)]);
    }

    #[test]
    fn test_null_callbacks_are_skipped() {
        let mut sink = MenuInputCallbacks {
            user_data: std::ptr::null_mut(),
            add_char: None,
            add_mouse_button: None,
            add_key: None,
        };

        sink.add_char(0x61);
        sink.add_mouse_button(0, false);
        sink.add_key(0x1B, true);
    }

    #[test]
    fn test_exports_before_load() {
        assert!(!dcf_should_swallow_input());
        assert!(!dcf_queue_input_event(0, 0, 0x44, 1.0, 0.0));
        assert_eq!(unsafe { dcf_process_input_queue(std::ptr::null()) }, 0);
        assert_eq!(dcf_menu_source(), 0);
        assert!(!dcf_set_menu_source(1));
    }
}
