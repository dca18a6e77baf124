//! Command registry interface.
//!
//! The registry itself is owned by the host application; this crate
//! enumerates the registered commands and rewrites the menu path of those
//! handled at the application level.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

/// Tag marking a command as handled at the application level: triggered via
/// the native application menu instead of the regular in-window menu tree.
pub const APP_COMMAND_TAG: &str = "app-command";

/// A command known to the host application's registry.
///
/// Descriptors are shared between the registry and this crate behind `Arc`;
/// the menu path is the one mutable attribute and uses interior mutability
/// so shared descriptors can still be rewritten.
#[derive(Debug)]
pub struct CommandDescriptor {
    id: String,
    tags: BTreeSet<String>,
    menu_path: Mutex<Vec<String>>,
}

impl CommandDescriptor {
    pub fn new(
        id: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
        menu_path: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            menu_path: Mutex::new(menu_path),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the command carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Current position of the command in the menu tree. Empty means the
    /// command does not appear in the regular menus.
    pub fn menu_path(&self) -> Vec<String> {
        self.lock_menu_path().clone()
    }

    pub fn set_menu_path(&self, path: Vec<String>) {
        *self.lock_menu_path() = path;
    }

    /// Remove the command from the regular menu tree.
    pub fn clear_menu_path(&self) {
        self.lock_menu_path().clear();
    }

    fn lock_menu_path(&self) -> MutexGuard<'_, Vec<String>> {
        // A poisoned path still holds a valid value; recover it.
        self.menu_path
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PartialEq for CommandDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.tags == other.tags && self.menu_path() == other.menu_path()
    }
}

impl Eq for CommandDescriptor {}

/// The host application's enumerable command registry.
pub trait CommandRegistry: Send + Sync {
    /// Snapshot of every registered command.
    fn commands(&self) -> Vec<Arc<CommandDescriptor>>;
}
