//! Shared test fakes for the injected collaborators.
//!
//! The bus fake dispatches synchronously on the calling thread, matching
//! the single-UI-thread model the real collaborators run under.

use std::collections::HashSet;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::commands::{CommandDescriptor, CommandRegistry};
use crate::error::{Result, ScreenbarError};
use crate::events::{AppEvent, EventBus, EventListener, SubscriptionId, SubscriptionSet};
use crate::platform::traits::{
    NativeApp, NativeCallback, NativeCallbackHandler, ProcessLauncher, QuitResponse,
};
use crate::windowing::{MenuBarId, WindowId, WindowManager};

/// Synchronous in-memory event bus that records everything it publishes.
///
/// The journal additionally records side effects interleaved with the
/// publishes (e.g. the quit veto), so tests can assert ordering.
pub struct RecordingBus {
    inner: Mutex<BusInner>,
    journal: Arc<Mutex<Vec<String>>>,
}

struct BusInner {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Arc<dyn EventListener>)>,
    log: Vec<AppEvent>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(BusInner {
                next_id: 0,
                listeners: Vec::new(),
                log: Vec::new(),
            }),
            journal: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn published(&self) -> Vec<AppEvent> {
        self.inner.lock().unwrap().log.clone()
    }

    pub fn active_subscriptions(&self) -> usize {
        self.inner.lock().unwrap().listeners.len()
    }

    pub fn journal(&self) -> Arc<Mutex<Vec<String>>> {
        self.journal.clone()
    }
}

impl EventBus for RecordingBus {
    fn publish(&self, event: AppEvent) {
        let listeners: Vec<Arc<dyn EventListener>> = {
            let mut inner = self.inner.lock().unwrap();
            inner.log.push(event.clone());
            inner
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect()
        };
        self.journal
            .lock()
            .unwrap()
            .push(format!("publish:{}", event.kind()));
        for listener in listeners {
            listener.on_event(&event);
        }
    }

    fn subscribe(&self, listener: Arc<dyn EventListener>) -> SubscriptionSet {
        let mut inner = self.inner.lock().unwrap();
        let id = SubscriptionId::new(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, listener));
        SubscriptionSet::new(vec![id])
    }

    fn unsubscribe(&self, subscriptions: SubscriptionSet) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .listeners
            .retain(|(id, _)| !subscriptions.ids().contains(id));
    }
}

/// Native application fake; delivers callbacks to the installed handler.
pub struct FakeNativeApp {
    supported: bool,
    handler: Mutex<Option<Arc<dyn NativeCallbackHandler>>>,
}

impl FakeNativeApp {
    pub fn new() -> Self {
        Self {
            supported: true,
            handler: Mutex::new(None),
        }
    }

    /// A native layer whose lifecycle interfaces are missing.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            handler: Mutex::new(None),
        }
    }

    pub fn has_handler(&self) -> bool {
        self.handler.lock().unwrap().is_some()
    }

    /// Simulate the OS delivering a callback.
    pub fn deliver(&self, callback: NativeCallback) {
        let handler = self.handler.lock().unwrap().clone();
        handler
            .expect("no native callback handler installed")
            .on_callback(callback);
    }
}

impl NativeApp for FakeNativeApp {
    fn install_handler(&self, handler: Arc<dyn NativeCallbackHandler>) -> Result<()> {
        if !self.supported {
            return Err(ScreenbarError::UnsupportedPlatform);
        }
        *self.handler.lock().unwrap() = Some(handler);
        Ok(())
    }
}

/// Quit response that records the veto in a shared journal.
pub struct FakeQuitResponse {
    journal: Arc<Mutex<Vec<String>>>,
    cancelled: Arc<AtomicBool>,
}

impl FakeQuitResponse {
    pub fn new(journal: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            journal,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn cancelled_flag(&self) -> Arc<AtomicBool> {
        self.cancelled.clone()
    }
}

impl QuitResponse for FakeQuitResponse {
    fn cancel_quit(&self) {
        self.journal.lock().unwrap().push("veto".to_string());
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

/// Command registry fake backed by a plain vector.
#[derive(Default)]
pub struct FakeRegistry {
    commands: Mutex<Vec<Arc<CommandDescriptor>>>,
}

impl FakeRegistry {
    pub fn add(&self, command: Arc<CommandDescriptor>) {
        self.commands.lock().unwrap().push(command);
    }
}

impl CommandRegistry for FakeRegistry {
    fn commands(&self) -> Vec<Arc<CommandDescriptor>> {
        self.commands.lock().unwrap().clone()
    }
}

/// Windowing toolkit fake that records menu-bar assignments.
#[derive(Default)]
pub struct FakeWindows {
    managed: Mutex<HashSet<WindowId>>,
    assignments: Mutex<Vec<(WindowId, MenuBarId)>>,
    screen_menu_enabled: Mutex<usize>,
}

impl FakeWindows {
    /// Mark a window as a managed top-level frame.
    pub fn manage(&self, window: WindowId) {
        self.managed.lock().unwrap().insert(window);
    }

    pub fn assignments(&self) -> Vec<(WindowId, MenuBarId)> {
        self.assignments.lock().unwrap().clone()
    }

    pub fn screen_menu_enabled_count(&self) -> usize {
        *self.screen_menu_enabled.lock().unwrap()
    }
}

impl WindowManager for FakeWindows {
    fn enable_screen_menu_bar(&self) {
        *self.screen_menu_enabled.lock().unwrap() += 1;
    }

    fn is_managed(&self, window: WindowId) -> bool {
        self.managed.lock().unwrap().contains(&window)
    }

    fn set_menu_bar(&self, window: WindowId, menu_bar: MenuBarId) {
        self.assignments.lock().unwrap().push((window, menu_bar));
    }
}

/// Process launcher fake with a fixed exit code.
pub struct FakeLauncher {
    exit_code: i32,
    invocations: Mutex<Vec<(String, Vec<String>)>>,
}

impl FakeLauncher {
    pub fn succeeding() -> Self {
        Self {
            exit_code: 0,
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(exit_code: i32) -> Self {
        Self {
            exit_code,
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn invocations(&self) -> Vec<(String, Vec<String>)> {
        self.invocations.lock().unwrap().clone()
    }
}

impl ProcessLauncher for FakeLauncher {
    fn exec(&self, program: &str, args: &[&str]) -> io::Result<i32> {
        self.invocations.lock().unwrap().push((
            program.to_string(),
            args.iter().map(|arg| arg.to_string()).collect(),
        ));
        Ok(self.exit_code)
    }
}
