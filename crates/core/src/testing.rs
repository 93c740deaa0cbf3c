//! In-memory host used by unit tests

use std::collections::HashMap;

use parking_lot::{Mutex, RwLock};

use dcf_engine::{HostWorld, PlayerCharacter};
use dcf_sdk::{FormId, FormType, LockLevel, ObjectRefHandle};

/// One object reference in the fake world
#[derive(Debug, Clone, Default)]
pub struct FakeRef {
    pub form_type: Option<FormType>,
    pub name: String,
    pub locked: bool,
    pub lock_level: Option<LockLevel>,
    pub lock_key: Option<FormId>,
    pub dead: bool,
    pub stealing: bool,
    pub hostile: bool,
    pub teammate: bool,
}

impl FakeRef {
    pub fn of(form_type: FormType) -> Self {
        Self {
            form_type: Some(form_type),
            ..Self::default()
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn locked(mut self, level: LockLevel) -> Self {
        self.locked = true;
        self.lock_level = Some(level);
        self
    }

    pub fn with_key(mut self, key: FormId) -> Self {
        self.lock_key = Some(key);
        self
    }
}

#[derive(Debug, Default)]
struct PlayerState {
    present: bool,
    sneaking: bool,
    inventory: HashMap<FormId, i32>,
}

#[derive(Default)]
pub struct FakeWorld {
    refs: RwLock<HashMap<ObjectRefHandle, FakeRef>>,
    target: RwLock<Option<ObjectRefHandle>>,
    player: RwLock<PlayerState>,
    pub console: Mutex<Vec<String>>,
}

impl FakeWorld {
    /// A world with a player and nothing in it
    pub fn new() -> Self {
        let world = Self::default();
        world.player.write().present = true;
        world
    }

    pub fn insert(&self, handle: ObjectRefHandle, object: FakeRef) -> ObjectRefHandle {
        self.refs.write().insert(handle, object);
        handle
    }

    pub fn update(&self, handle: ObjectRefHandle, f: impl FnOnce(&mut FakeRef)) {
        if let Some(object) = self.refs.write().get_mut(&handle) {
            f(object);
        }
    }

    pub fn destroy(&self, handle: ObjectRefHandle) {
        self.refs.write().remove(&handle);
    }

    pub fn set_target(&self, handle: Option<ObjectRefHandle>) {
        *self.target.write() = handle;
    }

    pub fn set_player_present(&self, present: bool) {
        self.player.write().present = present;
    }

    pub fn set_sneaking(&self, sneaking: bool) {
        self.player.write().sneaking = sneaking;
    }

    pub fn give(&self, item: FormId, count: i32) {
        self.player.write().inventory.insert(item, count);
    }

    fn with_ref<T>(&self, handle: ObjectRefHandle, f: impl FnOnce(&FakeRef) -> T) -> Option<T> {
        self.refs.read().get(&handle).map(f)
    }
}

impl HostWorld for FakeWorld {
    fn crosshair_target(&self) -> Option<ObjectRefHandle> {
        *self.target.read()
    }

    fn is_live(&self, handle: ObjectRefHandle) -> bool {
        self.refs.read().contains_key(&handle)
    }

    fn form_type(&self, handle: ObjectRefHandle) -> Option<FormType> {
        self.with_ref(handle, |r| r.form_type).flatten()
    }

    fn name(&self, handle: ObjectRefHandle) -> Option<String> {
        self.with_ref(handle, |r| r.name.clone())
    }

    fn is_locked(&self, handle: ObjectRefHandle) -> bool {
        self.with_ref(handle, |r| r.locked).unwrap_or(false)
    }

    fn lock_level(&self, handle: ObjectRefHandle) -> Option<LockLevel> {
        self.with_ref(handle, |r| r.lock_level).flatten()
    }

    fn lock_key(&self, handle: ObjectRefHandle) -> Option<FormId> {
        self.with_ref(handle, |r| r.lock_key).flatten()
    }

    fn is_dead(&self, handle: ObjectRefHandle) -> bool {
        self.with_ref(handle, |r| r.dead).unwrap_or(false)
    }

    fn player(&self) -> Option<&dyn PlayerCharacter> {
        if self.player.read().present {
            Some(self)
        } else {
            None
        }
    }

    fn console_print(&self, message: &str) {
        self.console.lock().push(message.to_string());
    }
}

impl PlayerCharacter for FakeWorld {
    fn is_sneaking(&self) -> bool {
        self.player.read().sneaking
    }

    fn item_count(&self, item: FormId) -> i32 {
        self.player.read().inventory.get(&item).copied().unwrap_or(0)
    }

    fn would_be_stealing(&self, target: ObjectRefHandle) -> bool {
        self.with_ref(target, |r| r.stealing).unwrap_or(false)
    }

    fn is_hostile(&self, actor: ObjectRefHandle) -> bool {
        self.with_ref(actor, |r| r.hostile).unwrap_or(false)
    }

    fn is_teammate(&self, actor: ObjectRefHandle) -> bool {
        self.with_ref(actor, |r| r.teammate).unwrap_or(false)
    }
}
