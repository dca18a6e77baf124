//! Native lifecycle callback translation.
//!
//! Rebroadcasts native application callbacks as portable bus events, one
//! publish per callback.

use std::sync::Arc;

use crate::error::Result;
use crate::events::{AppEvent, EventBus};
use crate::platform::traits::{NativeApp, NativeCallback, NativeCallbackHandler};

/// Translates native application callbacks into [`AppEvent`] publishes.
///
/// Stateless beyond the bus handle. [`install`](Self::install) registers
/// the dispatcher for every callback category in one atomic step; on hosts
/// without the native interfaces, installation fails with
/// `UnsupportedPlatform` and the caller continues without translation.
///
/// Every publish is synchronous and unbuffered: the bus is invoked from
/// within the native callback, with no batching or suspension.
pub struct AppEventDispatcher {
    bus: Arc<dyn EventBus>,
}

impl AppEventDispatcher {
    /// Build the dispatcher and register it with the native application.
    pub fn install(app: &dyn NativeApp, bus: Arc<dyn EventBus>) -> Result<Arc<Self>> {
        let dispatcher = Arc::new(Self { bus });
        app.install_handler(Arc::clone(&dispatcher) as Arc<dyn NativeCallbackHandler>)?;
        tracing::debug!("native lifecycle callbacks installed");
        Ok(dispatcher)
    }

    fn publish(&self, event: AppEvent) {
        tracing::trace!("rebroadcasting native callback: {}", event.description());
        self.bus.publish(event);
    }
}

impl NativeCallbackHandler for AppEventDispatcher {
    fn on_callback(&self, callback: NativeCallback) {
        match callback {
            NativeCallback::About => self.publish(AppEvent::About),
            NativeCallback::Preferences => self.publish(AppEvent::Preferences),
            NativeCallback::PrintFiles => self.publish(AppEvent::Print),
            NativeCallback::QuitRequested { response } => {
                // Publish first, veto second: every subscriber observes the
                // Quit event before any process exit can happen. Actual
                // termination is left to a subscriber, out-of-band.
                self.publish(AppEvent::Quit);
                response.cancel_quit();
            }
            NativeCallback::SessionActivated => self.publish(AppEvent::UserSession { active: true }),
            NativeCallback::SessionDeactivated => {
                self.publish(AppEvent::UserSession { active: false })
            }
            NativeCallback::SystemAboutToSleep => {
                self.publish(AppEvent::SystemSleep { sleeping: true })
            }
            NativeCallback::SystemAwoke => self.publish(AppEvent::SystemSleep { sleeping: false }),
            NativeCallback::ScreenAboutToSleep => {
                self.publish(AppEvent::ScreenSleep { sleeping: true })
            }
            NativeCallback::ScreenAwoke => self.publish(AppEvent::ScreenSleep { sleeping: false }),
            NativeCallback::Hidden => self.publish(AppEvent::Visibility { visible: false }),
            NativeCallback::Unhidden => self.publish(AppEvent::Visibility { visible: true }),
            NativeCallback::MovedToBackground => {
                self.publish(AppEvent::Focus { foreground: false })
            }
            NativeCallback::RaisedToForeground => {
                self.publish(AppEvent::Focus { foreground: true })
            }
            NativeCallback::ReOpened => self.publish(AppEvent::ReOpen),
            NativeCallback::OpenFiles { paths } => self.publish(AppEvent::OpenFiles { paths }),
        }
    }
}
