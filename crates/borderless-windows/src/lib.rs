//! Win32 host for the borderless chrome.
//!
//! Only built on Windows; other targets get an empty crate.
#![cfg(windows)]

/// Demo borderless window.
pub mod demo;

/// Message-pipeline hook (window subclass).
pub mod hook;

/// System menu call-through.
pub mod menu;

/// Decoding raw window messages.
pub mod message;

/// Monitor lookup.
pub mod monitor;

/// `HostWindow` implementation wrapping an `HWND`.
pub mod window;

pub use hook::{ChromeWindow, HookHandle};
pub use monitor::Win32Monitors;
pub use window::Win32Window;
