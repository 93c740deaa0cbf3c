//! Crosshair monitor
//!
//! Turns the host's "crosshair reference changed" notifications into
//! edge-triggered observer calls. Each notification is classified and compared
//! with the last (target, interaction) pair; observers only hear about changes.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use dcf_core::CrosshairMonitor;
//!
//! let monitor = CrosshairMonitor::new(Arc::new(host));
//!
//! let key = monitor.register_observer(|target| {
//!     tracing::info!("Now looking at {}", target);
//! });
//!
//! // From the host's crosshair event sink
//! monitor.on_crosshair_ref_changed(host.crosshair_target());
//!
//! // Later, unregister if needed
//! monitor.remove_observer(key);
//! ```
//!
//! # Threading
//!
//! Notifications arrive on the game's main thread. Snapshot reads such as
//! [`CrosshairMonitor::last_interaction`] may come from the render thread;
//! the state lock makes them consistent but possibly one frame old.

mod observers;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use dcf_engine::HostWorld;
use dcf_sdk::{FormType, ObjectRefHandle};

use crate::interaction::{activation_flags, classify, ActivationFlags, InteractionType};

pub use observers::{CrosshairCallback, ObserverKey};
use observers::ObserverList;

/// Last observed crosshair state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorState {
    /// Invalid handle when nothing was targeted
    pub last_target: ObjectRefHandle,
    pub last_interaction: InteractionType,
}

/// Edge detector over crosshair notifications
pub struct CrosshairMonitor {
    world: Arc<dyn HostWorld>,
    state: RwLock<MonitorState>,
    observers: RwLock<ObserverList>,
    notifications: AtomicU64,
    changes: AtomicU64,
}

impl CrosshairMonitor {
    pub fn new(world: Arc<dyn HostWorld>) -> Self {
        Self {
            world,
            state: RwLock::new(MonitorState::default()),
            observers: RwLock::new(ObserverList::new()),
            notifications: AtomicU64::new(0),
            changes: AtomicU64::new(0),
        }
    }

    /// The host this monitor queries
    pub fn world(&self) -> &Arc<dyn HostWorld> {
        &self.world
    }

    /// Handle a crosshair notification
    ///
    /// A candidate whose handle no longer resolves counts as no target. When
    /// the (target, interaction) pair differs from the stored one it is
    /// replaced, and if there is a target every observer is called with it.
    ///
    /// Returns `true` when the stored pair changed.
    pub fn on_crosshair_ref_changed(&self, candidate: Option<ObjectRefHandle>) -> bool {
        self.notifications.fetch_add(1, Ordering::Relaxed);

        let candidate = candidate.filter(|c| self.world.is_live(*c));
        let next = MonitorState {
            last_target: candidate.into(),
            last_interaction: classify(self.world.as_ref(), candidate),
        };

        {
            let mut state = self.state.write();
            if *state == next {
                return false;
            }
            tracing::debug!(
                "Crosshair changed: {} ({}) -> {} ({})",
                state.last_target,
                state.last_interaction,
                next.last_target,
                next.last_interaction
            );
            *state = next;
        }
        self.changes.fetch_add(1, Ordering::Relaxed);

        // Observers run without either lock so they can query the monitor and
        // add or remove observers, including themselves
        if let Some(target) = candidate {
            let observers = self.observers.read().snapshot();
            tracing::trace!("Notifying {} crosshair observers", observers.len());
            for observer in observers {
                observer(target);
            }
        }

        true
    }

    /// Register a callback for crosshair changes
    ///
    /// Callbacks run in registration order on the notifying thread. A change
    /// notifies the observers registered when it happened; one removed during
    /// the dispatch still sees that change, one added during it does not.
    pub fn register_observer<F>(&self, callback: F) -> ObserverKey
    where
        F: Fn(ObjectRefHandle) + Send + Sync + 'static,
    {
        self.observers.write().push(Arc::new(callback))
    }

    /// Remove an observer by its key
    ///
    /// Returns `true` if the observer was found and removed.
    pub fn remove_observer(&self, key: ObserverKey) -> bool {
        self.observers.write().remove(key)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.read().len()
    }

    // === Snapshot queries ===

    pub fn state(&self) -> MonitorState {
        *self.state.read()
    }

    /// Interaction recorded at the last change
    pub fn last_interaction(&self) -> InteractionType {
        self.state.read().last_interaction
    }

    /// Target recorded at the last change
    pub fn last_target(&self) -> Option<ObjectRefHandle> {
        self.state.read().last_target.into_option()
    }

    /// Number of notifications received
    pub fn notification_count(&self) -> u64 {
        self.notifications.load(Ordering::Relaxed)
    }

    /// Number of notifications that changed the stored state
    pub fn change_count(&self) -> u64 {
        self.changes.load(Ordering::Relaxed)
    }

    // === Live queries ===
    //
    // These ask the host for the current target every time and never touch
    // the stored state.

    /// The live object under the crosshair
    pub fn current_target(&self) -> Option<ObjectRefHandle> {
        self.world
            .crosshair_target()
            .filter(|t| self.world.is_live(*t))
    }

    pub fn current_interaction(&self) -> InteractionType {
        classify(self.world.as_ref(), self.current_target())
    }

    pub fn current_activation_flags(&self) -> ActivationFlags {
        activation_flags(self.world.as_ref(), self.current_target())
    }

    pub fn has_interaction(&self, interaction: InteractionType) -> bool {
        self.current_interaction() == interaction
    }

    /// Whether the current target's base form is of `form_type`
    pub fn is_form_type(&self, form_type: FormType) -> bool {
        self.current_target()
            .and_then(|t| self.world.form_type(t))
            .is_some_and(|t| t == form_type)
    }

    pub fn is_looking_at_interactable(&self) -> bool {
        self.current_interaction() != InteractionType::None
    }

    pub fn player_has_lockpicks(&self) -> bool {
        self.world.player().is_some_and(|p| p.has_lockpicks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeRef, FakeWorld};
    use dcf_sdk::FormId;
    use std::sync::Mutex;

    struct Fixture {
        world: Arc<FakeWorld>,
        monitor: CrosshairMonitor,
        fired: Arc<Mutex<Vec<ObjectRefHandle>>>,
    }

    fn fixture() -> Fixture {
        let world = Arc::new(FakeWorld::new());
        let monitor = CrosshairMonitor::new(world.clone());
        let fired = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&fired);
        monitor.register_observer(move |target| log.lock().unwrap().push(target));
        Fixture {
            world,
            monitor,
            fired,
        }
    }

    impl Fixture {
        fn fired(&self) -> Vec<ObjectRefHandle> {
            self.fired.lock().unwrap().clone()
        }
    }

    #[test]
    fn test_initial_state() {
        let f = fixture();
        assert_eq!(f.monitor.state(), MonitorState::default());
        assert_eq!(f.monitor.last_target(), None);
        assert_eq!(f.monitor.last_interaction(), InteractionType::None);
    }

    #[test]
    fn test_repeat_notification_fires_once() {
        let f = fixture();
        let book = f.world.insert(ObjectRefHandle::new(1, 0), FakeRef::of(FormType::Book));

        assert!(f.monitor.on_crosshair_ref_changed(Some(book)));
        assert!(!f.monitor.on_crosshair_ref_changed(Some(book)));

        assert_eq!(f.fired(), vec![book]);
        assert_eq!(f.monitor.last_interaction(), InteractionType::Read);
        assert_eq!(f.monitor.notification_count(), 2);
        assert_eq!(f.monitor.change_count(), 1);
    }

    #[test]
    fn test_edge_triggering() {
        let f = fixture();
        let a = f.world.insert(ObjectRefHandle::new(1, 0), FakeRef::of(FormType::Book));
        let b = f.world.insert(ObjectRefHandle::new(2, 0), FakeRef::of(FormType::Flora));

        let fired_at: Vec<usize> = [a, a, b, b, a]
            .into_iter()
            .enumerate()
            .filter(|(_, target)| f.monitor.on_crosshair_ref_changed(Some(*target)))
            .map(|(i, _)| i)
            .collect();

        assert_eq!(fired_at, vec![0, 2, 4]);
        assert_eq!(f.fired(), vec![a, b, a]);
    }

    #[test]
    fn test_same_category_different_target_fires() {
        let f = fixture();
        let a = f.world.insert(ObjectRefHandle::new(1, 0), FakeRef::of(FormType::Book));
        let b = f.world.insert(ObjectRefHandle::new(2, 0), FakeRef::of(FormType::Note));

        f.monitor.on_crosshair_ref_changed(Some(a));
        f.monitor.on_crosshair_ref_changed(Some(b));
        assert_eq!(f.fired(), vec![a, b]);
    }

    #[test]
    fn test_category_change_on_same_target_fires() {
        let f = fixture();
        let npc = f.world.insert(ObjectRefHandle::new(1, 0), FakeRef::of(FormType::Npc));

        f.monitor.on_crosshair_ref_changed(Some(npc));
        f.world.set_sneaking(true);
        f.monitor.on_crosshair_ref_changed(Some(npc));

        assert_eq!(f.fired(), vec![npc, npc]);
        assert_eq!(f.monitor.last_interaction(), InteractionType::Pickpocket);
    }

    #[test]
    fn test_reused_slot_is_a_change() {
        let f = fixture();
        let old = f.world.insert(ObjectRefHandle::new(9, 0), FakeRef::of(FormType::Misc));
        f.monitor.on_crosshair_ref_changed(Some(old));

        f.world.destroy(old);
        let new = f.world.insert(old.next_age(), FakeRef::of(FormType::Misc));
        assert!(f.monitor.on_crosshair_ref_changed(Some(new)));

        assert_eq!(f.fired(), vec![old, new]);
        assert_eq!(f.monitor.last_target(), Some(new));
    }

    #[test]
    fn test_absent_target_clears_without_firing() {
        let f = fixture();
        let chest = f.world.insert(ObjectRefHandle::new(1, 0), FakeRef::of(FormType::Container));
        f.monitor.on_crosshair_ref_changed(Some(chest));

        assert!(f.monitor.on_crosshair_ref_changed(None));
        assert_eq!(f.monitor.last_interaction(), InteractionType::None);
        assert_eq!(f.monitor.last_target(), None);
        assert_eq!(f.fired(), vec![chest]);

        // Already empty
        assert!(!f.monitor.on_crosshair_ref_changed(None));
    }

    #[test]
    fn test_destroyed_candidate_counts_as_absent() {
        let f = fixture();
        let chest = f.world.insert(ObjectRefHandle::new(1, 0), FakeRef::of(FormType::Container));
        f.monitor.on_crosshair_ref_changed(Some(chest));

        f.world.destroy(chest);
        assert!(f.monitor.on_crosshair_ref_changed(Some(chest)));
        assert_eq!(f.monitor.last_target(), None);
        assert_eq!(f.fired(), vec![chest]);
    }

    #[test]
    fn test_uninteractable_target_still_fires() {
        let f = fixture();
        let hostile = f.world.insert(ObjectRefHandle::new(1, 0), FakeRef::of(FormType::Npc));
        f.world.update(hostile, |r| r.hostile = true);

        assert!(f.monitor.on_crosshair_ref_changed(Some(hostile)));
        assert_eq!(f.monitor.last_interaction(), InteractionType::None);
        assert_eq!(f.fired(), vec![hostile]);
    }

    #[test]
    fn test_observers_in_registration_order() {
        let world = Arc::new(FakeWorld::new());
        let monitor = CrosshairMonitor::new(world.clone());
        let order = Arc::new(Mutex::new(Vec::new()));
        for id in 0..3 {
            let order = Arc::clone(&order);
            monitor.register_observer(move |_| order.lock().unwrap().push(id));
        }
        let book = world.insert(ObjectRefHandle::new(1, 0), FakeRef::of(FormType::Book));

        monitor.on_crosshair_ref_changed(Some(book));
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
        assert_eq!(monitor.observer_count(), 3);
    }

    #[test]
    fn test_removed_observer_is_silent() {
        let f = fixture();
        let extra = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&extra);
        let key = f.monitor.register_observer(move |_| *counter.lock().unwrap() += 1);
        assert!(f.monitor.remove_observer(key));
        assert!(!f.monitor.remove_observer(key));

        let book = f.world.insert(ObjectRefHandle::new(1, 0), FakeRef::of(FormType::Book));
        f.monitor.on_crosshair_ref_changed(Some(book));
        assert_eq!(*extra.lock().unwrap(), 0);
        assert_eq!(f.fired(), vec![book]);
    }

    #[test]
    fn test_observer_can_remove_itself() {
        let world = Arc::new(FakeWorld::new());
        let monitor = Arc::new(CrosshairMonitor::new(world.clone()));
        let own_key: Arc<Mutex<Option<ObserverKey>>> = Arc::new(Mutex::new(None));
        let calls = Arc::new(AtomicU64::new(0));

        let key = {
            let monitor_ref = Arc::downgrade(&monitor);
            let own_key = Arc::clone(&own_key);
            let calls = Arc::clone(&calls);
            monitor.register_observer(move |_| {
                calls.fetch_add(1, Ordering::Relaxed);
                let key = *own_key.lock().unwrap();
                if let (Some(monitor), Some(key)) = (monitor_ref.upgrade(), key) {
                    assert!(monitor.remove_observer(key));
                }
            })
        };
        *own_key.lock().unwrap() = Some(key);

        let a = world.insert(ObjectRefHandle::new(1, 0), FakeRef::of(FormType::Book));
        let b = world.insert(ObjectRefHandle::new(2, 0), FakeRef::of(FormType::Book));
        assert!(monitor.on_crosshair_ref_changed(Some(a)));
        assert!(monitor.on_crosshair_ref_changed(Some(b)));

        assert_eq!(calls.load(Ordering::Relaxed), 1);
        assert_eq!(monitor.observer_count(), 0);
    }

    #[test]
    fn test_observer_can_query_monitor() {
        let world = Arc::new(FakeWorld::new());
        let monitor = Arc::new(CrosshairMonitor::new(world.clone()));
        let seen = Arc::new(Mutex::new(None));

        let inner = Arc::clone(&monitor);
        let sink = Arc::clone(&seen);
        monitor.register_observer(move |_| *sink.lock().unwrap() = Some(inner.last_interaction()));

        let flora = world.insert(ObjectRefHandle::new(1, 0), FakeRef::of(FormType::Flora));
        monitor.on_crosshair_ref_changed(Some(flora));
        assert_eq!(*seen.lock().unwrap(), Some(InteractionType::Harvest));
    }

    #[test]
    fn test_live_queries_follow_world() {
        let f = fixture();
        let door = f.world.insert(
            ObjectRefHandle::new(1, 0),
            FakeRef::of(FormType::Door).locked(dcf_sdk::LockLevel::Easy),
        );
        f.world.set_target(Some(door));

        assert_eq!(f.monitor.current_target(), Some(door));
        assert!(f.monitor.has_interaction(InteractionType::LockpickNone));
        assert!(f.monitor.is_form_type(FormType::Door));
        assert!(!f.monitor.is_form_type(FormType::Container));
        assert!(f
            .monitor
            .current_activation_flags()
            .contains(ActivationFlags::UNLOCK));
        assert!(!f.monitor.player_has_lockpicks());

        f.world.give(FormId::LOCKPICK, 2);
        assert!(f.monitor.player_has_lockpicks());
        assert_eq!(f.monitor.current_interaction(), InteractionType::Lockpick);

        // No notification was delivered, stored state is untouched
        assert_eq!(f.monitor.last_interaction(), InteractionType::None);
        assert!(f.fired().is_empty());

        f.world.set_target(None);
        assert!(!f.monitor.is_looking_at_interactable());
        assert!(!f.monitor.is_form_type(FormType::Door));
    }
}
