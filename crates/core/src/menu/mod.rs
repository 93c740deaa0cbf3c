//! Configuration menu input handling
//!
//! The host's input thread hands raw button and character events to
//! [`Menu::queue_input_events`]. The render thread drains them once per frame
//! with [`Menu::process_input_queue`], which translates keys, handles the
//! toggle and escape keys, and forwards everything to a [`MenuInputSink`].
//!
//! # Example
//!
//! ```ignore
//! use dcf_core::{CrosshairConfig, Menu};
//!
//! let menu = Menu::new(&CrosshairConfig::default());
//! menu.init();
//!
//! // Input thread
//! menu.queue_input_events(events);
//!
//! // Render thread, once per frame
//! menu.process_input_queue(&mut ui_io);
//! ```

mod event;
mod keys;

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use parking_lot::RwLock;

use dcf_sdk::input::{dik_to_vk, vk};
use dcf_sdk::{InputDevice, InputEventType};

use crate::config::{CrosshairConfig, CrosshairSource};

pub use event::KeyEvent;
pub use keys::key_name;

/// Capacity of the input queue per frame
const QUEUE_CAPACITY: usize = 256;

/// Highest mouse button index the UI understands
pub const MAX_MOUSE_BUTTON: u32 = 5;

/// Receiver of translated menu input, usually the UI layer's IO state
pub trait MenuInputSink {
    /// A typed character
    fn add_char(&mut self, code_point: u32);

    /// A mouse button press or release
    fn add_mouse_button(&mut self, button: u32, pressed: bool);

    /// A keyboard key press or release, as a virtual key code
    fn add_key(&mut self, vk: u32, pressed: bool);
}

/// Configuration menu state and its input queue
pub struct Menu {
    open: AtomicBool,
    initialized: AtomicBool,
    toggle_key: AtomicU32,
    source: RwLock<CrosshairSource>,
    sender: Sender<KeyEvent>,
    receiver: Receiver<KeyEvent>,
}

impl Menu {
    /// Create a closed menu using the configured toggle key and source
    pub fn new(config: &CrosshairConfig) -> Self {
        let (sender, receiver) = bounded(QUEUE_CAPACITY);
        Self {
            open: AtomicBool::new(false),
            initialized: AtomicBool::new(false),
            toggle_key: AtomicU32::new(config.toggle_key),
            source: RwLock::new(config.source),
            sender,
            receiver,
        }
    }

    /// Mark the menu ready to receive input
    ///
    /// Returns `false` if it was already initialized.
    pub fn init(&self) -> bool {
        if self.initialized.swap(true, Ordering::AcqRel) {
            return false;
        }
        tracing::info!(
            "Menu initialized, toggle with {}",
            key_name(self.toggle_key())
        );
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    pub fn set_open(&self, open: bool) {
        self.open.store(open, Ordering::Release);
    }

    /// Flip the menu open or closed, returning the new state
    pub fn toggle(&self) -> bool {
        let open = !self.open.fetch_xor(true, Ordering::AcqRel);
        tracing::debug!("Menu {}", if open { "opened" } else { "closed" });
        open
    }

    /// Whether game input should be blocked while the menu has focus
    pub fn should_swallow_input(&self) -> bool {
        self.is_initialized() && self.is_open()
    }

    pub fn toggle_key(&self) -> u32 {
        self.toggle_key.load(Ordering::Acquire)
    }

    pub fn set_toggle_key(&self, vk: u32) {
        self.toggle_key.store(vk, Ordering::Release);
    }

    pub fn source(&self) -> CrosshairSource {
        *self.source.read()
    }

    pub fn set_source(&self, source: CrosshairSource) {
        *self.source.write() = source;
        tracing::info!("Crosshair source changed to: {}", source);
    }

    /// Queue a single event for the next frame
    ///
    /// Only button and character events are kept. Returns `false` if the event
    /// was filtered or the queue is full.
    pub fn queue_input_event(&self, event: KeyEvent) -> bool {
        if !matches!(event.event_type, InputEventType::Button | InputEventType::Char) {
            return false;
        }

        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                tracing::warn!("Menu input queue full, dropping event");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::error!("Menu input queue disconnected");
                false
            }
        }
    }

    /// Queue a batch of events, returning how many were kept
    pub fn queue_input_events<I>(&self, events: I) -> usize
    where
        I: IntoIterator<Item = KeyEvent>,
    {
        events
            .into_iter()
            .filter(|event| self.queue_input_event(*event))
            .count()
    }

    /// Drain queued input into `sink`
    ///
    /// Releasing the toggle key flips the menu; releasing Escape closes it.
    /// Returns the number of events processed.
    pub fn process_input_queue(&self, sink: &mut dyn MenuInputSink) -> usize {
        let mut count = 0;

        while let Ok(event) = self.receiver.try_recv() {
            self.process_event(&event, sink);
            count += 1;

            if count >= QUEUE_CAPACITY {
                break;
            }
        }

        count
    }

    /// Check how many events are currently queued
    pub fn queued_event_count(&self) -> usize {
        self.receiver.len()
    }

    fn process_event(&self, event: &KeyEvent, sink: &mut dyn MenuInputSink) {
        if event.event_type == InputEventType::Char {
            sink.add_char(event.key_code);
            return;
        }

        let pressed = event.is_pressed();
        match event.device {
            InputDevice::Mouse => {
                sink.add_mouse_button(event.key_code.min(MAX_MOUSE_BUTTON), pressed);
            }
            InputDevice::Keyboard => {
                let Some(key) = dik_to_vk(event.key_code) else {
                    tracing::trace!("No virtual key for scan code {:#x}", event.key_code);
                    return;
                };

                if !pressed {
                    if key == self.toggle_key() {
                        self.toggle();
                    } else if key == vk::ESCAPE && self.is_open() {
                        self.set_open(false);
                    }
                }

                sink.add_key(key, pressed);
            }
            InputDevice::Gamepad | InputDevice::VirtualKeyboard => {}
        }
    }
}
