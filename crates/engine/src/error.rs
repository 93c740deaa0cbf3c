//! Error types for host table loading

/// Error type for host loading operations
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The bridge passed a null table pointer
    #[error("Host API table is null")]
    NullTable,

    /// The bridge was built against a different table layout
    #[error("Host API version mismatch: expected {expected}, got {found}")]
    VersionMismatch { expected: u32, found: u32 },

    /// A required function pointer is null
    #[error("Required host function missing: {0}")]
    MissingFunction(&'static str),

    /// Host already initialized
    #[error("Host already initialized")]
    AlreadyInitialized,
}
