//! Touch-input helpers for Windows kiosk hosts.
//!
//! Two stateless operations, each a single forwarding to the shell:
//!
//! - [`set_touch_disable_property`] sets or clears the per-window
//!   "disable edge gesture when fullscreen" property;
//! - [`hide_touch_keyboard`] posts a close request to the on-screen touch
//!   keyboard if it is showing.
//!
//! Built as a DLL, the crate exports `SetTouchDisableProperty` and
//! `HideTouchKeyboard` with C signatures for non-Rust hosts.  Rust callers use
//! the functions here with [`Win32Shell`] and get a [`ShellError`] on failure.

// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except:
//   • `platform::win32` – Win32 shell FFI
//   • `ffi`             – `#[no_mangle]` exports (the lint counts those)
// Each unsafe block in those modules MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]
// The crate is named after the DLL the host imports (`NativeWrappers.dll`).
#![allow(non_snake_case)]

pub mod error;
pub mod gesture;
pub mod handle;
pub mod keyboard;
pub mod platform;

#[cfg(windows)]
mod ffi;

#[cfg(test)]
mod testing;

pub use error::{Result, ShellError};
pub use gesture::{set_touch_disable_property, EDGE_GESTURE_DISABLE_TOUCH_WHEN_FULLSCREEN};
pub use handle::WindowHandle;
pub use keyboard::{hide_touch_keyboard, TOUCH_KEYBOARD_CLASS};
pub use platform::{PropertyKey, PropertyStore, Shell};

#[cfg(windows)]
pub use platform::win32::{Win32PropertyStore, Win32Shell};
