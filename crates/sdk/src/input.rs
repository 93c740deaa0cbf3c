//! Input event type definitions
//!
//! The host reports keyboard keys as DirectInput scan codes. The configuration
//! menu works in Win32 virtual key codes, so this module also carries the
//! translation between the two.

/// Device that produced an input event
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDevice {
    Keyboard = 0,
    Mouse = 1,
    Gamepad = 2,
    VirtualKeyboard = 3,
}

impl InputDevice {
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(InputDevice::Keyboard),
            1 => Some(InputDevice::Mouse),
            2 => Some(InputDevice::Gamepad),
            3 => Some(InputDevice::VirtualKeyboard),
            _ => None,
        }
    }
}

/// Kind of input event
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEventType {
    Button = 0,
    MouseMove = 1,
    Char = 2,
    Thumbstick = 3,
    DeviceConnect = 4,
    Kinect = 5,
}

impl InputEventType {
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(InputEventType::Button),
            1 => Some(InputEventType::MouseMove),
            2 => Some(InputEventType::Char),
            3 => Some(InputEventType::Thumbstick),
            4 => Some(InputEventType::DeviceConnect),
            5 => Some(InputEventType::Kinect),
            _ => None,
        }
    }
}

/// DirectInput keyboard scan codes
pub mod dik {
    pub const ESCAPE: u32 = 0x01;
    pub const KEY_1: u32 = 0x02;
    pub const KEY_0: u32 = 0x0B;
    pub const BACKSPACE: u32 = 0x0E;
    pub const TAB: u32 = 0x0F;
    pub const Q: u32 = 0x10;
    pub const P: u32 = 0x19;
    pub const RETURN: u32 = 0x1C;
    pub const LCONTROL: u32 = 0x1D;
    pub const A: u32 = 0x1E;
    pub const L: u32 = 0x26;
    pub const LSHIFT: u32 = 0x2A;
    pub const Z: u32 = 0x2C;
    pub const M: u32 = 0x32;
    pub const RSHIFT: u32 = 0x36;
    pub const LMENU: u32 = 0x38;
    pub const SPACE: u32 = 0x39;
    pub const F1: u32 = 0x3B;
    pub const F10: u32 = 0x44;
    pub const F11: u32 = 0x57;
    pub const F12: u32 = 0x58;
    pub const RCONTROL: u32 = 0x9D;
    pub const RMENU: u32 = 0xB8;
    pub const HOME: u32 = 0xC7;
    pub const UP: u32 = 0xC8;
    pub const PRIOR: u32 = 0xC9;
    pub const LEFT: u32 = 0xCB;
    pub const RIGHT: u32 = 0xCD;
    pub const END: u32 = 0xCF;
    pub const DOWN: u32 = 0xD0;
    pub const NEXT: u32 = 0xD1;
    pub const INSERT: u32 = 0xD2;
    pub const DELETE: u32 = 0xD3;
}

/// Win32 virtual key codes
pub mod vk {
    pub const BACK: u32 = 0x08;
    pub const TAB: u32 = 0x09;
    pub const RETURN: u32 = 0x0D;
    pub const ESCAPE: u32 = 0x1B;
    pub const SPACE: u32 = 0x20;
    pub const PRIOR: u32 = 0x21;
    pub const NEXT: u32 = 0x22;
    pub const END: u32 = 0x23;
    pub const HOME: u32 = 0x24;
    pub const LEFT: u32 = 0x25;
    pub const UP: u32 = 0x26;
    pub const RIGHT: u32 = 0x27;
    pub const DOWN: u32 = 0x28;
    pub const INSERT: u32 = 0x2D;
    pub const DELETE: u32 = 0x2E;
    pub const F1: u32 = 0x70;
    pub const F10: u32 = 0x79;
    pub const F11: u32 = 0x7A;
    pub const F12: u32 = 0x7B;
    pub const LSHIFT: u32 = 0xA0;
    pub const RSHIFT: u32 = 0xA1;
    pub const LCONTROL: u32 = 0xA2;
    pub const RCONTROL: u32 = 0xA3;
    pub const LMENU: u32 = 0xA4;
    pub const RMENU: u32 = 0xA5;
}

/// Letters in scan code order, one row of the keyboard per slice
const LETTER_ROWS: [(u32, &[u8]); 3] = [
    (dik::Q, b"QWERTYUIOP"),
    (dik::A, b"ASDFGHJKL"),
    (dik::Z, b"ZXCVBNM"),
];

/// Translate a DirectInput scan code to a Win32 virtual key code
///
/// Returns `None` for scan codes with no virtual key equivalent.
pub fn dik_to_vk(scan_code: u32) -> Option<u32> {
    let vk = match scan_code {
        dik::ESCAPE => vk::ESCAPE,
        // 1-9 then 0
        dik::KEY_1..=0x0A => u32::from(b'1') + (scan_code - dik::KEY_1),
        dik::KEY_0 => u32::from(b'0'),
        dik::BACKSPACE => vk::BACK,
        dik::TAB => vk::TAB,
        dik::RETURN => vk::RETURN,
        dik::SPACE => vk::SPACE,
        dik::LCONTROL => vk::LCONTROL,
        dik::RCONTROL => vk::RCONTROL,
        dik::LSHIFT => vk::LSHIFT,
        dik::RSHIFT => vk::RSHIFT,
        dik::LMENU => vk::LMENU,
        dik::RMENU => vk::RMENU,
        dik::F1..=dik::F10 => vk::F1 + (scan_code - dik::F1),
        dik::F11 => vk::F11,
        dik::F12 => vk::F12,
        dik::HOME => vk::HOME,
        dik::UP => vk::UP,
        dik::PRIOR => vk::PRIOR,
        dik::LEFT => vk::LEFT,
        dik::RIGHT => vk::RIGHT,
        dik::END => vk::END,
        dik::DOWN => vk::DOWN,
        dik::NEXT => vk::NEXT,
        dik::INSERT => vk::INSERT,
        dik::DELETE => vk::DELETE,
        _ => {
            let (start, letters) = LETTER_ROWS
                .iter()
                .find(|(start, row)| (*start..*start + row.len() as u32).contains(&scan_code))?;
            u32::from(letters[(scan_code - start) as usize])
        }
    };
    Some(vk)
}
