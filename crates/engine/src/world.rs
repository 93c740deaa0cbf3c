//! World query capabilities
//!
//! These traits are the only view the framework has of the game. They are
//! read-only: nothing here mutates world state. Every query is expected to be
//! cheap, since the crosshair monitor runs them on every notification.

use dcf_sdk::{FormId, FormType, LockLevel, ObjectRefHandle};

/// Read-only access to world objects and the player
pub trait HostWorld: Send + Sync {
    /// The object reference under the crosshair right now
    fn crosshair_target(&self) -> Option<ObjectRefHandle>;

    /// Whether `handle` still resolves to a live object
    ///
    /// Handles are generational, but the host may free an object without
    /// recycling its slot yet, so equality alone is not enough.
    fn is_live(&self, handle: ObjectRefHandle) -> bool;

    /// Base form type, `None` when the reference has no base object or the
    /// type is not one the framework knows
    fn form_type(&self, handle: ObjectRefHandle) -> Option<FormType>;

    /// Display name
    fn name(&self, handle: ObjectRefHandle) -> Option<String>;

    fn is_locked(&self, handle: ObjectRefHandle) -> bool;

    fn lock_level(&self, handle: ObjectRefHandle) -> Option<LockLevel>;

    /// Key item that opens the reference's lock
    fn lock_key(&self, handle: ObjectRefHandle) -> Option<FormId>;

    /// Whether an actor reference is a dead body
    fn is_dead(&self, handle: ObjectRefHandle) -> bool;

    /// The player character, `None` while no save is loaded
    fn player(&self) -> Option<&dyn PlayerCharacter>;

    /// Print a line to the in-game console
    fn console_print(&self, _message: &str) {}
}

/// Queries against the player character
pub trait PlayerCharacter {
    fn is_sneaking(&self) -> bool;

    /// How many of `item` the player carries
    fn item_count(&self, item: FormId) -> i32;

    /// Whether taking `target` would be a crime
    fn would_be_stealing(&self, target: ObjectRefHandle) -> bool;

    /// Whether `actor` is hostile toward the player
    fn is_hostile(&self, actor: ObjectRefHandle) -> bool;

    /// Whether `actor` is a follower
    fn is_teammate(&self, actor: ObjectRefHandle) -> bool;

    fn has_lockpicks(&self) -> bool {
        self.item_count(FormId::LOCKPICK) > 0
    }
}
