//! Application event types for the event bus.
//!
//! The lifecycle variants mirror the native application callbacks
//! one-to-one: each is published exactly once per callback and never
//! synthesized otherwise.

use std::path::PathBuf;
use std::sync::Arc;

use crate::commands::CommandDescriptor;
use crate::windowing::WindowId;

/// Events that flow through the application event bus.
///
/// Events are categorized by their source:
/// - Lifecycle events: rebroadcast native application callbacks
/// - Window events: activation notifications from the windowing toolkit
/// - Module events: command metadata changes that menu UIs react to
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The application "About" dialog was requested.
    About,

    /// The application preferences dialog was requested.
    Preferences,

    /// Printing of files was requested.
    Print,

    /// Application termination was requested. Termination is always vetoed
    /// at the native layer; a subscriber decides whether to actually exit.
    Quit,

    /// The application was raised to the foreground or moved to the
    /// background.
    Focus { foreground: bool },

    /// The application was hidden or unhidden.
    Visibility { visible: bool },

    /// The user session was activated or deactivated (fast user switching).
    UserSession { active: bool },

    /// The system is about to sleep (`true`) or just awoke (`false`).
    SystemSleep { sleeping: bool },

    /// The screen is about to sleep (`true`) or just awoke (`false`).
    ScreenSleep { sleeping: bool },

    /// The application was re-opened, e.g. by clicking the dock icon.
    ReOpen,

    /// The OS asked the application to open files, in the order the native
    /// event supplied them. Duplicates are permitted.
    OpenFiles { paths: Vec<PathBuf> },

    /// A top-level window became the active window.
    WinActivated { window: WindowId },

    /// A batch of command descriptors changed. Published once per batch so
    /// menu-rebuilding subscribers coalesce the refresh into a single pass.
    ModulesUpdated {
        commands: Vec<Arc<CommandDescriptor>>,
    },
}

impl AppEvent {
    /// Stable short name of the event kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AppEvent::About => "about",
            AppEvent::Preferences => "preferences",
            AppEvent::Print => "print",
            AppEvent::Quit => "quit",
            AppEvent::Focus { .. } => "focus",
            AppEvent::Visibility { .. } => "visibility",
            AppEvent::UserSession { .. } => "user-session",
            AppEvent::SystemSleep { .. } => "system-sleep",
            AppEvent::ScreenSleep { .. } => "screen-sleep",
            AppEvent::ReOpen => "re-open",
            AppEvent::OpenFiles { .. } => "open-files",
            AppEvent::WinActivated { .. } => "win-activated",
            AppEvent::ModulesUpdated { .. } => "modules-updated",
        }
    }

    /// Get a short description of the event for logging.
    pub fn description(&self) -> String {
        match self {
            AppEvent::About => "about dialog requested".to_string(),
            AppEvent::Preferences => "preferences dialog requested".to_string(),
            AppEvent::Print => "printing requested".to_string(),
            AppEvent::Quit => "application quit requested".to_string(),
            AppEvent::Focus { foreground } => {
                format!(
                    "application {}",
                    if *foreground {
                        "raised to foreground"
                    } else {
                        "moved to background"
                    }
                )
            }
            AppEvent::Visibility { visible } => {
                format!("application {}", if *visible { "unhidden" } else { "hidden" })
            }
            AppEvent::UserSession { active } => {
                format!(
                    "user session {}",
                    if *active { "activated" } else { "deactivated" }
                )
            }
            AppEvent::SystemSleep { sleeping } => {
                format!("system {}", if *sleeping { "about to sleep" } else { "awoke" })
            }
            AppEvent::ScreenSleep { sleeping } => {
                format!("screen {}", if *sleeping { "about to sleep" } else { "awoke" })
            }
            AppEvent::ReOpen => "application re-opened".to_string(),
            AppEvent::OpenFiles { paths } => {
                format!("open request for {} files", paths.len())
            }
            AppEvent::WinActivated { window } => {
                format!("window {} activated", window.raw())
            }
            AppEvent::ModulesUpdated { commands } => {
                format!("{} commands updated", commands.len())
            }
        }
    }
}
