//! Bridges native application-lifecycle callbacks onto the portable
//! application event bus, and coordinates the single shared screen menu bar
//! across top-level windows.
//!
//! Two components do the work:
//! - [`platform::macos::AppEventDispatcher`] registers as the sole handler
//!   for every native lifecycle callback and republishes each one as an
//!   [`events::AppEvent`].
//! - [`platform::macos::MacosPlatform`] enables the shared screen menu bar,
//!   lifts application-level commands out of the in-window menu tree, and
//!   reassigns the one retained menu bar to whichever managed window has
//!   focus.
//!
//! The event bus, command registry, windowing toolkit, and native OS layer
//! are all injected behind traits, so the core runs (and is tested) on any
//! host without linking a toolkit.

pub mod commands;
pub mod error;
pub mod events;
pub mod logging;
pub mod platform;
pub mod windowing;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Result, ScreenbarError};
pub use events::{AppEvent, EventBus, EventListener, SubscriptionSet};
pub use platform::macos::{MacosPlatform, PlatformConfig, PlatformServices};
