//! Windowing toolkit interface.
//!
//! Windows, menu bars, and activation notifications are owned by the host
//! application's toolkit; this crate works with opaque handles and the
//! small operation surface below.

/// Opaque handle to a top-level window owned by the windowing toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Opaque handle to a menu-bar object owned by the windowing toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuBarId(u64);

impl MenuBarId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// The menu-bar structure handed to
/// [`MacosPlatform::register_app_menus`](crate::MacosPlatform::register_app_menus).
///
/// Only this kind is retained as the shared screen menu bar; any other menu
/// structure passes through untouched.
#[derive(Debug, Clone)]
pub struct MenuBar {
    id: MenuBarId,
}

impl MenuBar {
    pub fn new(id: MenuBarId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> MenuBarId {
        self.id
    }
}

/// Window and menu-bar operations provided by the windowing toolkit.
pub trait WindowManager: Send + Sync {
    /// Turn on the OS-managed single screen menu bar for the process.
    fn enable_screen_menu_bar(&self);

    /// Whether the window is of the kind that carries the shared menu bar
    /// (a regular top-level frame rather than a dialog or panel).
    fn is_managed(&self, window: WindowId) -> bool;

    /// Make `menu_bar` the visible menu bar of `window`.
    fn set_menu_bar(&self, window: WindowId, menu_bar: MenuBarId);
}
