//! Injected native-platform surface.
//!
//! The native application object is passed in at construction time instead
//! of being reached through a process-wide global, so tests can substitute
//! a fake native layer.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Result;

/// Response object delivered alongside a quit request.
///
/// Calling [`cancel_quit`](Self::cancel_quit) vetoes the termination at the
/// native layer.
pub trait QuitResponse: Send {
    fn cancel_quit(&self);
}

/// One native application-lifecycle callback.
///
/// A fixed, enumerated dispatch table: one variant per callback category
/// the native layer can deliver.
pub enum NativeCallback {
    About,
    Preferences,
    PrintFiles,
    /// Termination was requested; carries the response used to veto it.
    QuitRequested { response: Box<dyn QuitResponse> },
    SessionActivated,
    SessionDeactivated,
    SystemAboutToSleep,
    SystemAwoke,
    ScreenAboutToSleep,
    ScreenAwoke,
    Hidden,
    Unhidden,
    MovedToBackground,
    RaisedToForeground,
    ReOpened,
    OpenFiles { paths: Vec<PathBuf> },
}

impl fmt::Debug for NativeCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeCallback::About => write!(f, "About"),
            NativeCallback::Preferences => write!(f, "Preferences"),
            NativeCallback::PrintFiles => write!(f, "PrintFiles"),
            NativeCallback::QuitRequested { .. } => write!(f, "QuitRequested"),
            NativeCallback::SessionActivated => write!(f, "SessionActivated"),
            NativeCallback::SessionDeactivated => write!(f, "SessionDeactivated"),
            NativeCallback::SystemAboutToSleep => write!(f, "SystemAboutToSleep"),
            NativeCallback::SystemAwoke => write!(f, "SystemAwoke"),
            NativeCallback::ScreenAboutToSleep => write!(f, "ScreenAboutToSleep"),
            NativeCallback::ScreenAwoke => write!(f, "ScreenAwoke"),
            NativeCallback::Hidden => write!(f, "Hidden"),
            NativeCallback::Unhidden => write!(f, "Unhidden"),
            NativeCallback::MovedToBackground => write!(f, "MovedToBackground"),
            NativeCallback::RaisedToForeground => write!(f, "RaisedToForeground"),
            NativeCallback::ReOpened => write!(f, "ReOpened"),
            NativeCallback::OpenFiles { paths } => {
                f.debug_struct("OpenFiles").field("paths", paths).finish()
            }
        }
    }
}

/// Receiver side of the native callback registration.
pub trait NativeCallbackHandler: Send + Sync {
    fn on_callback(&self, callback: NativeCallback);
}

/// The native application object.
///
/// Availability is probed at runtime: on hosts without the lifecycle
/// interfaces, [`install_handler`](Self::install_handler) returns
/// [`ScreenbarError::UnsupportedPlatform`](crate::ScreenbarError::UnsupportedPlatform)
/// and the caller continues without native event translation.
pub trait NativeApp: Send + Sync {
    /// Register `handler` for every lifecycle callback category in one
    /// atomic step.
    fn install_handler(&self, handler: Arc<dyn NativeCallbackHandler>) -> Result<()>;
}

/// Process-spawning facility used for the OS "open" action.
pub trait ProcessLauncher: Send + Sync {
    /// Run `program` with `args` and return its exit code.
    fn exec(&self, program: &str, args: &[&str]) -> io::Result<i32>;
}
