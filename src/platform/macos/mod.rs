//! macOS platform coordination.
//!
//! Handles the macOS-specific application concerns:
//! - native application callbacks are rebroadcast as bus events
//! - the shared screen menu bar is enabled and follows window focus
//! - application-level commands are lifted out of the in-window menu tree

mod dispatcher;

pub use dispatcher::AppEventDispatcher;

use std::any::Any;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::commands::{CommandRegistry, APP_COMMAND_TAG};
use crate::error::{Result, ScreenbarError};
use crate::events::{AppEvent, EventBus, EventListener, SubscriptionSet};
use crate::platform::traits::{NativeApp, ProcessLauncher};
use crate::windowing::{MenuBar, MenuBarId, WindowManager};

/// Configuration for the macOS platform coordinator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Use the OS-managed single screen menu bar. With this off the
    /// coordinator still runs its startup steps, but menu retention and
    /// reassignment have no visual effect since no shared menu bar exists.
    pub screen_menu_bar: bool,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            screen_menu_bar: true,
        }
    }
}

/// Host services the coordinator depends on.
pub struct PlatformServices {
    pub bus: Arc<dyn EventBus>,
    pub registry: Arc<dyn CommandRegistry>,
    pub windows: Arc<dyn WindowManager>,
    pub native: Arc<dyn NativeApp>,
    pub launcher: Arc<dyn ProcessLauncher>,
}

/// Coordinator lifecycle. There is no way back out of `Disposed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlatformState {
    Unconfigured,
    Configured,
    Disposed,
}

/// The macOS platform coordinator.
///
/// Owns the single shared menu-bar handle and the bus subscriptions created
/// at configure time. All methods are expected to run on the toolkit's UI
/// thread.
pub struct MacosPlatform {
    config: PlatformConfig,
    state: PlatformState,
    services: Option<PlatformServices>,
    dispatcher: Option<Arc<AppEventDispatcher>>,
    /// The one menu-bar handle the process retains. Written only by
    /// `register_app_menus` and the activation listener.
    menu_bar: Arc<Mutex<Option<MenuBarId>>>,
    subscriptions: Option<SubscriptionSet>,
}

impl Default for MacosPlatform {
    fn default() -> Self {
        Self::new(PlatformConfig::default())
    }
}

impl MacosPlatform {
    pub fn new(config: PlatformConfig) -> Self {
        Self {
            config,
            state: PlatformState::Unconfigured,
            services: None,
            dispatcher: None,
            menu_bar: Arc::new(Mutex::new(None)),
            subscriptions: None,
        }
    }

    /// Run the startup sequence, in order:
    /// 1. enable the OS-managed screen menu bar (when configured on)
    /// 2. strip application-level commands from the regular menu tree and
    ///    publish one aggregate `ModulesUpdated` notification
    /// 3. install the native event dispatcher; hosts without the native
    ///    interfaces continue without event translation
    /// 4. subscribe the window-activation listener
    ///
    /// Calling `configure` a second time is a guarded no-op.
    pub fn configure(&mut self, services: PlatformServices) {
        if self.state != PlatformState::Unconfigured {
            tracing::warn!("configure called in state {:?}, ignoring", self.state);
            return;
        }

        if self.config.screen_menu_bar {
            services.windows.enable_screen_menu_bar();
        }

        remove_app_commands_from_menu(&*services.registry, &*services.bus);

        self.dispatcher =
            match AppEventDispatcher::install(&*services.native, Arc::clone(&services.bus)) {
                Ok(dispatcher) => Some(dispatcher),
                Err(ScreenbarError::UnsupportedPlatform) => {
                    tracing::warn!(
                        "native lifecycle interfaces unavailable, continuing without event translation"
                    );
                    None
                }
                Err(e) => {
                    tracing::error!("failed to install native callback handler: {}", e);
                    None
                }
            };

        let listener = Arc::new(WinActivationListener {
            screen_menu_bar: self.config.screen_menu_bar,
            menu_bar: Arc::clone(&self.menu_bar),
            windows: Arc::clone(&services.windows),
        });
        self.subscriptions = Some(services.bus.subscribe(listener));

        self.services = Some(services);
        self.state = PlatformState::Configured;
        tracing::debug!("macOS platform configured");
    }

    /// Offer the application's menu structure to the coordinator.
    ///
    /// When shared-menu mode is on and `menus` is a [`MenuBar`], it is
    /// retained as the single shared handle, replacing any previous one.
    ///
    /// Always returns `false` ("not handled"): the caller should still
    /// perform its normal per-window menu assignment; the coordinator only
    /// additionally intercepts the singleton case.
    pub fn register_app_menus(&self, menus: &dyn Any) -> bool {
        if self.config.screen_menu_bar {
            if let Some(menu_bar) = menus.downcast_ref::<MenuBar>() {
                *lock_slot(&self.menu_bar) = Some(menu_bar.id());
                tracing::debug!("retained shared menu bar {:?}", menu_bar.id());
            }
        }
        false
    }

    /// Whether native event translation is active, i.e. the dispatcher was
    /// installed during `configure`.
    pub fn has_native_events(&self) -> bool {
        self.dispatcher.is_some()
    }

    /// Open a URL via the OS "open" action.
    ///
    /// A non-zero exit status is surfaced as
    /// [`ScreenbarError::OpenFailed`]; it is not retried.
    pub fn open(&self, url: &str) -> Result<()> {
        let services = self.services.as_ref().ok_or(ScreenbarError::NotConfigured)?;
        let status = services.launcher.exec("open", &[url])?;
        if status != 0 {
            return Err(ScreenbarError::open_failed(url));
        }
        Ok(())
    }

    /// Tear down the bus subscriptions created by `configure`.
    ///
    /// Safe to call when the dispatcher was never constructed and for an
    /// empty subscription set. A second call does nothing.
    pub fn dispose(&mut self) {
        if let Some(subscriptions) = self.subscriptions.take() {
            if let Some(services) = &self.services {
                services.bus.unsubscribe(subscriptions);
            }
        }
        self.dispatcher = None;
        self.state = PlatformState::Disposed;
        tracing::debug!("macOS platform disposed");
    }
}

/// Bus listener that moves the shared menu bar to each newly activated
/// managed window.
///
/// The retained handle is reassigned, never copied: at most one window
/// visually owns the menu bar at a time, and re-activating the same window
/// simply applies the same assignment again.
struct WinActivationListener {
    screen_menu_bar: bool,
    menu_bar: Arc<Mutex<Option<MenuBarId>>>,
    windows: Arc<dyn WindowManager>,
}

impl EventListener for WinActivationListener {
    fn on_event(&self, event: &AppEvent) {
        let AppEvent::WinActivated { window } = event else {
            return;
        };
        if !self.screen_menu_bar || !self.windows.is_managed(*window) {
            return;
        }
        if let Some(menu_bar) = *lock_slot(&self.menu_bar) {
            self.windows.set_menu_bar(*window, menu_bar);
        }
    }
}

/// Strip application-level commands from the regular menu tree.
///
/// Commands tagged [`APP_COMMAND_TAG`] are triggered from the native
/// application menu instead; their menu paths are cleared and one aggregate
/// `ModulesUpdated` notification carries the whole batch so menu UIs
/// rebuild in a single pass.
fn remove_app_commands_from_menu(registry: &dyn CommandRegistry, bus: &dyn EventBus) {
    let mut updated = Vec::new();
    for command in registry.commands() {
        if command.has_tag(APP_COMMAND_TAG) {
            command.clear_menu_path();
            updated.push(command);
        }
    }
    tracing::debug!("moved {} commands to the application menu", updated.len());
    bus.publish(AppEvent::ModulesUpdated { commands: updated });
}

fn lock_slot(slot: &Mutex<Option<MenuBarId>>) -> MutexGuard<'_, Option<MenuBarId>> {
    // A poisoned slot still holds a valid handle; recover it.
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
