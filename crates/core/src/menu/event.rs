//! Normalized key events

use dcf_sdk::{InputDevice, InputEventType};

/// A button or character event captured from the host's input stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    /// Scan code for keyboard buttons, button index for mouse buttons, code
    /// point for characters
    pub key_code: u32,
    pub device: InputDevice,
    pub event_type: InputEventType,
    /// Button pressure, 0 when released
    pub value: f32,
    /// Seconds the button has been held, 0 on the first frame
    pub held_down_secs: f32,
}

impl KeyEvent {
    pub fn button(device: InputDevice, key_code: u32, value: f32, held_down_secs: f32) -> Self {
        Self {
            key_code,
            device,
            event_type: InputEventType::Button,
            value,
            held_down_secs,
        }
    }

    pub fn char(device: InputDevice, code_point: u32) -> Self {
        Self {
            key_code: code_point,
            device,
            event_type: InputEventType::Char,
            value: 0.0,
            held_down_secs: 0.0,
        }
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.value > 0.0
    }

    #[inline]
    pub fn is_repeating(&self) -> bool {
        self.held_down_secs > 0.0
    }

    /// Pressed this frame
    #[inline]
    pub fn is_down(&self) -> bool {
        self.is_pressed() && self.held_down_secs == 0.0
    }

    #[inline]
    pub fn is_held(&self) -> bool {
        self.is_pressed() && self.is_repeating()
    }

    /// Released this frame
    #[inline]
    pub fn is_up(&self) -> bool {
        self.value == 0.0 && self.is_repeating()
    }
}
