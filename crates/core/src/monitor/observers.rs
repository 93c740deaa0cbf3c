//! Crosshair change observers
//!
//! Observers are kept in registration order. Keys come from a slot map so a
//! removed observer's key never matches a later registration.

use std::sync::Arc;

use slotmap::{new_key_type, SlotMap};

use dcf_sdk::ObjectRefHandle;

new_key_type! {
    /// Key for registered crosshair observers, used for removal
    pub struct ObserverKey;
}

/// Callback invoked with the new crosshair target
pub type CrosshairCallback = Arc<dyn Fn(ObjectRefHandle) + Send + Sync>;

/// Ordered observer registry
pub(crate) struct ObserverList {
    keys: SlotMap<ObserverKey, ()>,
    callbacks: Vec<(ObserverKey, CrosshairCallback)>,
}

impl ObserverList {
    pub fn new() -> Self {
        Self {
            keys: SlotMap::with_key(),
            callbacks: Vec::new(),
        }
    }

    pub fn push(&mut self, callback: CrosshairCallback) -> ObserverKey {
        let key = self.keys.insert(());
        self.callbacks.push((key, callback));
        key
    }

    pub fn remove(&mut self, key: ObserverKey) -> bool {
        if self.keys.remove(key).is_none() {
            return false;
        }
        self.callbacks.retain(|(k, _)| *k != key);
        true
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Clone the callbacks in registration order
    ///
    /// Lets the caller release the list's lock before running them.
    pub fn snapshot(&self) -> Vec<CrosshairCallback> {
        self.callbacks
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect()
    }
}
