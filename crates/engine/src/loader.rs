//! Host table loading
//!
//! Validates the bridge's [`HostApi`] table and wraps it in [`FfiHost`], a
//! [`HostWorld`] implementation that forwards every query across the C ABI.

use std::ffi::{c_char, CString};

use dcf_sdk::{
    ConsolePrintFn, CrosshairTargetFn, FormId, FormType, HostApi, LockLevel, ObjectRefHandle,
    PlayerFlagFn, PlayerItemCountFn, RefFormTypeFn, RefLockKeyFn, RefLockLevelFn, RefNameFn,
    RefPredicateFn, RegisterSinkFn, HOST_API_VERSION,
};

use crate::error::HostError;
use crate::world::{HostWorld, PlayerCharacter};

/// Names longer than this take a second, heap-sized call
const NAME_BUFFER_LEN: usize = 128;

/// [`HostWorld`] backed by the native bridge's function table
///
/// Required entries are stored unwrapped; only optional ones stay `Option`.
pub struct FfiHost {
    crosshair_target: CrosshairTargetFn,
    ref_is_live: RefPredicateFn,
    ref_form_type: RefFormTypeFn,
    ref_name: Option<RefNameFn>,
    ref_is_locked: RefPredicateFn,
    ref_lock_level: RefLockLevelFn,
    ref_lock_key: RefLockKeyFn,
    ref_is_dead: RefPredicateFn,
    player_available: PlayerFlagFn,
    player_is_sneaking: PlayerFlagFn,
    player_item_count: PlayerItemCountFn,
    player_would_be_stealing: RefPredicateFn,
    actor_is_hostile_to_player: RefPredicateFn,
    actor_is_player_teammate: RefPredicateFn,
    console_print: Option<ConsolePrintFn>,
    register_crosshair_sink: Option<RegisterSinkFn>,
}

fn required<T>(entry: Option<T>, name: &'static str) -> Result<T, HostError> {
    entry.ok_or(HostError::MissingFunction(name))
}

/// Validate a host table and wrap it
///
/// # Safety
/// `api` must be null or point to a `HostApi` that is valid for reads. Every
/// non-null function pointer in it must stay callable for the plugin's lifetime.
#[tracing::instrument(skip_all)]
pub unsafe fn load_host(api: *const HostApi) -> Result<FfiHost, HostError> {
    let api = api.as_ref().ok_or(HostError::NullTable)?;

    if api.version != HOST_API_VERSION {
        return Err(HostError::VersionMismatch {
            expected: HOST_API_VERSION,
            found: api.version,
        });
    }

    let host = FfiHost {
        crosshair_target: required(api.crosshair_target, "crosshair_target")?,
        ref_is_live: required(api.ref_is_live, "ref_is_live")?,
        ref_form_type: required(api.ref_form_type, "ref_form_type")?,
        ref_name: api.ref_name,
        ref_is_locked: required(api.ref_is_locked, "ref_is_locked")?,
        ref_lock_level: required(api.ref_lock_level, "ref_lock_level")?,
        ref_lock_key: required(api.ref_lock_key, "ref_lock_key")?,
        ref_is_dead: required(api.ref_is_dead, "ref_is_dead")?,
        player_available: required(api.player_available, "player_available")?,
        player_is_sneaking: required(api.player_is_sneaking, "player_is_sneaking")?,
        player_item_count: required(api.player_item_count, "player_item_count")?,
        player_would_be_stealing: required(
            api.player_would_be_stealing,
            "player_would_be_stealing",
        )?,
        actor_is_hostile_to_player: required(
            api.actor_is_hostile_to_player,
            "actor_is_hostile_to_player",
        )?,
        actor_is_player_teammate: required(
            api.actor_is_player_teammate,
            "actor_is_player_teammate",
        )?,
        console_print: api.console_print,
        register_crosshair_sink: api.register_crosshair_sink,
    };

    if host.ref_name.is_none() {
        tracing::debug!("ref_name: not available, names will be empty");
    }
    if host.console_print.is_none() {
        tracing::debug!("console_print: not available");
    }

    tracing::info!("Host API v{} loaded", api.version);
    Ok(host)
}

impl FfiHost {
    /// Ask the bridge to subscribe to crosshair reference events
    ///
    /// Returns `false` when the bridge has no event source to offer.
    pub fn register_crosshair_sink(&self) -> bool {
        match self.register_crosshair_sink {
            // SAFETY: validated at load, callable for the plugin's lifetime
            Some(register) => unsafe { register() },
            None => false,
        }
    }
}

// SAFETY: the table only holds plain function pointers into the bridge, which
// does its own synchronization with the game.
unsafe impl Send for FfiHost {}
unsafe impl Sync for FfiHost {}

// SAFETY (all calls below): every function pointer was validated non-null in
// `load_host`, whose contract keeps them callable for the plugin's lifetime.
// Handles and form IDs are plain integers; the bridge tolerates stale ones.
impl HostWorld for FfiHost {
    fn crosshair_target(&self) -> Option<ObjectRefHandle> {
        ObjectRefHandle::from_raw(unsafe { (self.crosshair_target)() }).into_option()
    }

    fn is_live(&self, handle: ObjectRefHandle) -> bool {
        handle.is_valid() && unsafe { (self.ref_is_live)(handle.raw()) }
    }

    fn form_type(&self, handle: ObjectRefHandle) -> Option<FormType> {
        let raw = unsafe { (self.ref_form_type)(handle.raw()) };
        u8::try_from(raw).ok().and_then(FormType::from_raw)
    }

    fn name(&self, handle: ObjectRefHandle) -> Option<String> {
        let ref_name = self.ref_name?;

        let mut buffer = vec![0u8; NAME_BUFFER_LEN];
        let mut len =
            unsafe { ref_name(handle.raw(), buffer.as_mut_ptr() as *mut c_char, buffer.len()) };
        if len > buffer.len() {
            buffer.resize(len, 0);
            // The name may have changed between the calls
            let second =
                unsafe { ref_name(handle.raw(), buffer.as_mut_ptr() as *mut c_char, buffer.len()) };
            len = len.min(second);
        }
        buffer.truncate(len);

        Some(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn is_locked(&self, handle: ObjectRefHandle) -> bool {
        unsafe { (self.ref_is_locked)(handle.raw()) }
    }

    fn lock_level(&self, handle: ObjectRefHandle) -> Option<LockLevel> {
        LockLevel::from_raw(unsafe { (self.ref_lock_level)(handle.raw()) })
    }

    fn lock_key(&self, handle: ObjectRefHandle) -> Option<FormId> {
        FormId::from_raw(unsafe { (self.ref_lock_key)(handle.raw()) })
    }

    fn is_dead(&self, handle: ObjectRefHandle) -> bool {
        unsafe { (self.ref_is_dead)(handle.raw()) }
    }

    fn player(&self) -> Option<&dyn PlayerCharacter> {
        if unsafe { (self.player_available)() } {
            Some(self)
        } else {
            None
        }
    }

    fn console_print(&self, message: &str) {
        let Some(print) = self.console_print else {
            return;
        };
        match CString::new(message) {
            Ok(message) => unsafe { print(message.as_ptr()) },
            Err(e) => tracing::warn!("Console message has an interior nul: {}", e),
        }
    }
}

impl PlayerCharacter for FfiHost {
    fn is_sneaking(&self) -> bool {
        unsafe { (self.player_is_sneaking)() }
    }

    fn item_count(&self, item: FormId) -> i32 {
        unsafe { (self.player_item_count)(item.0) }
    }

    fn would_be_stealing(&self, target: ObjectRefHandle) -> bool {
        unsafe { (self.player_would_be_stealing)(target.raw()) }
    }

    fn is_hostile(&self, actor: ObjectRefHandle) -> bool {
        unsafe { (self.actor_is_hostile_to_player)(actor.raw()) }
    }

    fn is_teammate(&self, actor: ObjectRefHandle) -> bool {
        unsafe { (self.actor_is_player_teammate)(actor.raw()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    unsafe extern "C" fn target() -> u32 {
        ObjectRefHandle::new(7, 2).raw()
    }
    unsafe extern "C" fn yes(_handle: u32) -> bool {
        true
    }
    unsafe extern "C" fn no(_handle: u32) -> bool {
        false
    }
    unsafe extern "C" fn door(_handle: u32) -> i32 {
        FormType::Door as i32
    }
    unsafe extern "C" fn requires_key(_handle: u32) -> i32 {
        LockLevel::RequiresKey as i32
    }
    unsafe extern "C" fn key(_handle: u32) -> u32 {
        0x0001_2345
    }
    unsafe extern "C" fn player_yes() -> bool {
        true
    }
    unsafe extern "C" fn three(_form: u32) -> i32 {
        3
    }
    unsafe extern "C" fn long_name(_handle: u32, buffer: *mut c_char, len: usize) -> usize {
        let name = "A".repeat(200);
        let n = name.len().min(len);
        std::ptr::copy_nonoverlapping(name.as_ptr(), buffer as *mut u8, n);
        name.len()
    }

    static NAME_CALLS: AtomicUsize = AtomicUsize::new(0);

    /// Long on the first call, short on every later one
    unsafe extern "C" fn shrinking_name(_handle: u32, buffer: *mut c_char, len: usize) -> usize {
        let name = if NAME_CALLS.fetch_add(1, Ordering::SeqCst) == 0 {
            "B".repeat(200)
        } else {
            "Short".to_string()
        };
        let n = name.len().min(len);
        std::ptr::copy_nonoverlapping(name.as_ptr(), buffer as *mut u8, n);
        name.len()
    }

    fn full_api() -> HostApi {
        HostApi {
            version: HOST_API_VERSION,
            crosshair_target: Some(target),
            ref_is_live: Some(yes),
            ref_form_type: Some(door),
            ref_name: Some(long_name),
            ref_is_locked: Some(yes),
            ref_lock_level: Some(requires_key),
            ref_lock_key: Some(key),
            ref_is_dead: Some(no),
            player_available: Some(player_yes),
            player_is_sneaking: Some(player_yes),
            player_item_count: Some(three),
            player_would_be_stealing: Some(no),
            actor_is_hostile_to_player: Some(no),
            actor_is_player_teammate: Some(yes),
            console_print: None,
            register_crosshair_sink: None,
        }
    }

    #[test]
    fn test_null_table_rejected() {
        let result = unsafe { load_host(std::ptr::null()) };
        assert!(matches!(result, Err(HostError::NullTable)));
    }

    #[test]
    fn test_version_mismatch_rejected() {
        let mut api = full_api();
        api.version = HOST_API_VERSION + 1;
        let result = unsafe { load_host(&api) };
        assert!(matches!(result, Err(HostError::VersionMismatch { .. })));
    }

    #[test]
    fn test_missing_required_function() {
        let mut api = full_api();
        api.player_item_count = None;
        match unsafe { load_host(&api) } {
            Err(HostError::MissingFunction(name)) => assert_eq!(name, "player_item_count"),
            _ => panic!("expected MissingFunction"),
        }
    }

    #[test]
    fn test_queries_forward_to_table() {
        let api = full_api();
        let host = unsafe { load_host(&api) }.unwrap();

        let handle = host.crosshair_target().unwrap();
        assert_eq!(handle, ObjectRefHandle::new(7, 2));
        assert!(host.is_live(handle));
        assert!(!host.is_live(ObjectRefHandle::invalid()));
        assert_eq!(host.form_type(handle), Some(FormType::Door));
        assert_eq!(host.lock_level(handle), Some(LockLevel::RequiresKey));
        assert_eq!(host.lock_key(handle), Some(FormId(0x0001_2345)));

        let player = host.player().unwrap();
        assert!(player.is_sneaking());
        assert!(player.has_lockpicks());
        assert!(player.is_teammate(handle));
    }

    #[test]
    fn test_long_names_are_read_in_full() {
        let api = full_api();
        let host = unsafe { load_host(&api) }.unwrap();
        let name = host.name(ObjectRefHandle::new(7, 2)).unwrap();
        assert_eq!(name.len(), 200);
    }

    #[test]
    fn test_name_shrinking_between_calls() {
        let mut api = full_api();
        api.ref_name = Some(shrinking_name);
        let host = unsafe { load_host(&api) }.unwrap();
        assert_eq!(host.name(ObjectRefHandle::new(7, 2)).as_deref(), Some("Short"));
    }

    #[test]
    fn test_optional_entries_degrade() {
        let mut api = full_api();
        api.ref_name = None;
        let host = unsafe { load_host(&api) }.unwrap();
        assert_eq!(host.name(ObjectRefHandle::new(7, 2)), None);
        assert!(!host.register_crosshair_sink());
        host.console_print("ignored");
    }
}
