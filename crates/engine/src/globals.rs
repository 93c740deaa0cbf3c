//! Global host storage
//!
//! The host table is validated once during plugin load and stored here.
//! Access is thread-safe via OnceLock.

use std::sync::{Arc, OnceLock};
use std::thread::ThreadId;

use crate::error::HostError;
use crate::loader::FfiHost;

/// Global host state
pub struct HostGlobals {
    /// The validated host function table
    pub host: Arc<FfiHost>,

    /// Main game thread ID for thread safety checks
    pub main_thread_id: ThreadId,
}

impl HostGlobals {
    /// Create new HostGlobals, recording the calling thread as the main thread
    pub fn new(host: FfiHost) -> Self {
        Self {
            host: Arc::new(host),
            main_thread_id: std::thread::current().id(),
        }
    }
}

/// Global host storage
static HOST: OnceLock<HostGlobals> = OnceLock::new();

/// Initialize host globals
///
/// Called once during plugin load. Returns error if already initialized.
pub fn init_host(globals: HostGlobals) -> Result<&'static HostGlobals, HostError> {
    HOST.set(globals).map_err(|_| HostError::AlreadyInitialized)?;
    HOST.get().ok_or(HostError::AlreadyInitialized)
}

/// Check if current thread is the main game thread
pub fn is_main_thread() -> bool {
    HOST.get()
        .map(|g| std::thread::current().id() == g.main_thread_id)
        .unwrap_or(false)
}
