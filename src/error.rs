//! Error types for the platform bridge.

use thiserror::Error;

/// Main error type for platform bridge operations.
#[derive(Error, Debug)]
pub enum ScreenbarError {
    /// The native application-lifecycle interfaces cannot be loaded on the
    /// running OS/runtime combination. Recoverable: the coordinator keeps
    /// working without native event translation.
    #[error("native application lifecycle interfaces are unavailable on this platform")]
    UnsupportedPlatform,

    /// The OS "open" action reported failure for a URL.
    #[error("could not open {url}")]
    OpenFailed { url: String },

    /// An operation that needs the host services ran before `configure`.
    #[error("platform has not been configured")]
    NotConfigured,

    /// IO errors from spawning the OS "open" process.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScreenbarError {
    /// Create an open failure for a URL.
    pub fn open_failed(url: impl Into<String>) -> Self {
        Self::OpenFailed { url: url.into() }
    }
}

/// Result type alias using ScreenbarError.
pub type Result<T> = std::result::Result<T, ScreenbarError>;
