// ============================================================================
// File: src/error.rs
// ----------------------------------------------------------------------------
// Error types for disk management operations
// ============================================================================

use std::io;

/// Errors produced by disk management operations.
///
/// Covers process launch failures, input validation, and tool-reported
/// failures surfaced by the lifecycle layer. Tool output itself is never an
/// error at the adapter level; it is returned as data for the caller to
/// interpret.
#[derive(Debug, thiserror::Error)]
pub enum DiskError {
    /// The external tool could not be started
    #[error("failed to launch {command}: {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    /// RAM disk size must be a positive number of megabytes
    #[error("invalid RAM disk size: {size} MB")]
    InvalidSize { size: u64 },

    /// Erase and eject require a device path
    #[error("device path must not be empty")]
    EmptyDevicePath,

    /// Raw identifier does not name a registered file system
    #[error("unknown file system identifier: '{identifier}'")]
    UnknownFileSystem { identifier: String },

    /// The external tool ran but reported failure
    #[error("{command} failed with status {status}: {error}")]
    ToolFailure {
        command: String,
        status: i32,
        error: String,
    },
}

/// Result type for disk management operations
pub type Result<T> = std::result::Result<T, DiskError>;
