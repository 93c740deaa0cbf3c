//! C-compatible exports called by the native bridge

use std::ffi::c_char;
use std::sync::Arc;

use slotmap::{Key, KeyData};
use tracing::instrument;

use dcf_core::{CrosshairConfig, InteractionType, ObserverKey};
use dcf_engine::{init_host, load_host, HostError, HostGlobals, HostWorld};
use dcf_sdk::versions::PLUGIN_NAME;
use dcf_sdk::{FormType, HostApi, HOST_API_VERSION};

use super::write_error;
use crate::logging::init_logging;
use crate::state::{init_state, try_state, PluginState};

// Plugin metadata - static strings with null terminators for C compatibility
static AUTHOR: &[u8] = b"dollan\0";
static NAME: &[u8] = b"DynamicCrosshairFramework\0";
static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();

/// Observer callback registered from native code, receives the raw handle
pub type CrosshairCallbackFn = unsafe extern "C" fn(handle: u32);

/// Called when the bridge loads the plugin
///
/// # Safety
/// - `api` must be null or point to a valid `HostApi` whose function pointers
///   stay callable until the process exits
/// - `error` must be a valid pointer to a buffer of at least `maxlen` bytes, or null
#[no_mangle]
#[instrument(skip_all)]
pub unsafe extern "C" fn dcf_plugin_load(
    api: *const HostApi,
    error: *mut c_char,
    maxlen: usize,
) -> bool {
    // Config first so its debug flag can pick the log level
    let (config, config_error) = match CrosshairConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (CrosshairConfig::default(), Some(e)),
    };

    init_logging(&config);

    tracing::info!("{} v{} loading...", PLUGIN_NAME, env!("CARGO_PKG_VERSION"));

    if let Some(e) = config_error {
        tracing::warn!("Failed to load config, using defaults: {}", e);
    }

    match load_with(api, config) {
        Ok(_) => {
            tracing::info!("Dynamic Crosshair Framework loaded successfully!");
            tracing::info!("Main thread ID: {:?}", std::thread::current().id());
            true
        }
        Err(e) => {
            tracing::error!("Failed to load host API: {}", e);
            write_error(error, maxlen, &format!("Host API error: {}", e));
            false
        }
    }
}

/// Validate the host table and build the plugin state around it
///
/// # Safety
/// Same contract for `api` as [`dcf_plugin_load`].
unsafe fn load_with(
    api: *const HostApi,
    config: CrosshairConfig,
) -> Result<&'static PluginState, HostError> {
    let host = load_host(api)?;
    let globals = init_host(HostGlobals::new(host))?;

    let world: Arc<dyn HostWorld> = globals.host.clone();
    let state =
        init_state(PluginState::new(world, config)).ok_or(HostError::AlreadyInitialized)?;

    // Without the event source the monitor would never hear anything
    if globals.host.register_crosshair_sink() {
        state.activate();
        tracing::info!("Crosshair event sink registered");
    } else {
        tracing::warn!("Crosshair event source unavailable, monitor stays inactive");
    }

    Ok(state)
}

/// Called when the bridge unloads the plugin
///
/// # Safety
/// - `error` must be a valid pointer to a buffer of at least `maxlen` bytes, or null
#[no_mangle]
#[instrument(skip_all)]
pub unsafe extern "C" fn dcf_plugin_unload(error: *mut c_char, maxlen: usize) -> bool {
    tracing::info!("Dynamic Crosshair Framework unloading...");

    match std::panic::catch_unwind(crate::shutdown) {
        Ok(()) => true,
        Err(_) => {
            write_error(error, maxlen, "Panic during shutdown");
            false
        }
    }
}

// Metadata exports - these return static strings for the bridge to display

#[no_mangle]
pub extern "C" fn dcf_get_author() -> *const c_char {
    AUTHOR.as_ptr() as *const c_char
}

#[no_mangle]
pub extern "C" fn dcf_get_name() -> *const c_char {
    NAME.as_ptr() as *const c_char
}

#[no_mangle]
pub extern "C" fn dcf_get_version() -> *const c_char {
    VERSION.as_ptr() as *const c_char
}

/// Host table layout this build expects
#[no_mangle]
pub extern "C" fn dcf_get_api_version() -> u32 {
    HOST_API_VERSION
}

/// Called from the bridge once game data has finished loading
#[no_mangle]
#[instrument(skip_all)]
pub extern "C" fn dcf_on_data_loaded() {
    let Some(state) = try_state() else {
        tracing::warn!("Data loaded before plugin load, ignored");
        return;
    };

    state.menu.init();
}

/// Called from the bridge's crosshair event sink
///
/// `raw_handle` is 0 when the crosshair left every object.
#[no_mangle]
pub extern "C" fn dcf_on_crosshair_ref(raw_handle: u32) {
    if let Some(state) = try_state() {
        state.on_crosshair_ref(raw_handle);
    }
}

/// Re-read the config file and apply the toggle key and source to the menu
///
/// Returns `false` before load or when the file cannot be read or parsed.
#[no_mangle]
#[instrument(skip_all)]
pub extern "C" fn dcf_reload_config() -> bool {
    let Some(state) = try_state() else {
        return false;
    };

    match state.reload_config() {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Failed to reload config: {}", e);
            false
        }
    }
}

/// Configured crosshair size in pixels, the default before load
#[no_mangle]
pub extern "C" fn dcf_crosshair_size() -> f32 {
    try_state()
        .map(PluginState::crosshair_size)
        .unwrap_or(CrosshairConfig::default().crosshair_size)
}

// === Query exports ===

/// Interaction with the live crosshair target, 0 (`None`) before load
#[no_mangle]
pub extern "C" fn dcf_current_interaction() -> u8 {
    try_state()
        .map(|s| s.monitor.current_interaction())
        .unwrap_or_default()
        .raw()
}

/// Interaction recorded at the last crosshair change
#[no_mangle]
pub extern "C" fn dcf_last_interaction() -> u8 {
    try_state()
        .map(|s| s.monitor.last_interaction())
        .unwrap_or_default()
        .raw()
}

/// Activation flags of the live crosshair target
#[no_mangle]
pub extern "C" fn dcf_current_activation_flags() -> u32 {
    try_state()
        .map(|s| s.monitor.current_activation_flags().bits())
        .unwrap_or(0)
}

/// Raw handle of the live crosshair target, 0 when there is none
#[no_mangle]
pub extern "C" fn dcf_current_target() -> u32 {
    try_state()
        .and_then(|s| s.monitor.current_target())
        .map(|t| t.raw())
        .unwrap_or(0)
}

/// Unknown interaction values never match
#[no_mangle]
pub extern "C" fn dcf_has_interaction(interaction: u8) -> bool {
    let Some(interaction) = InteractionType::from_raw(interaction) else {
        return false;
    };
    try_state().is_some_and(|s| s.monitor.has_interaction(interaction))
}

/// Unknown form type values never match
#[no_mangle]
pub extern "C" fn dcf_is_form_type(form_type: u8) -> bool {
    let Some(form_type) = FormType::from_raw(form_type) else {
        return false;
    };
    try_state().is_some_and(|s| s.monitor.is_form_type(form_type))
}

#[no_mangle]
pub extern "C" fn dcf_is_looking_at_interactable() -> bool {
    try_state().is_some_and(|s| s.monitor.is_looking_at_interactable())
}

#[no_mangle]
pub extern "C" fn dcf_player_has_lockpicks() -> bool {
    try_state().is_some_and(|s| s.monitor.player_has_lockpicks())
}

// === Observer exports ===

/// Register a native crosshair observer
///
/// Returns a key for [`dcf_remove_crosshair_callback`], or 0 if the callback is
/// null or the plugin is not loaded.
///
/// `callback` must stay callable until it is removed or the process exits. It
/// may remove itself or other callbacks while running; removals take effect
/// from the next crosshair change.
#[no_mangle]
pub extern "C" fn dcf_register_crosshair_callback(
    callback: Option<CrosshairCallbackFn>,
) -> u64 {
    let (Some(callback), Some(state)) = (callback, try_state()) else {
        return 0;
    };

    // SAFETY: the caller keeps the callback alive while registered
    let key = state
        .monitor
        .register_observer(move |target| unsafe { callback(target.raw()) });

    tracing::debug!("Registered native crosshair callback {:?}", key);
    key.data().as_ffi()
}

/// Remove a native crosshair observer
///
/// Returns `true` if the observer was found and removed.
#[no_mangle]
pub extern "C" fn dcf_remove_crosshair_callback(key: u64) -> bool {
    if key == 0 {
        return false;
    }
    let Some(state) = try_state() else {
        return false;
    };

    let key = ObserverKey::from(KeyData::from_ffi(key));
    state.monitor.remove_observer(key)
}
