//! Platform integration layer.
//!
//! `traits` defines the injected native-OS surface; `macos` contains the
//! coordinator and the lifecycle event dispatcher built on top of it.

pub mod macos;
pub mod traits;

pub use traits::{NativeApp, NativeCallback, NativeCallbackHandler, ProcessLauncher, QuitResponse};
