// ── Platform abstraction layer ────────────────────────────────────────────────
//
// The three shell primitives the components are built from.  No `unsafe`
// lives here; all Win32 FFI is confined to the `win32` sub-module and never
// leaks outward.  Tests substitute `crate::testing::FakeShell`.

use crate::{error::Result, handle::WindowHandle};

#[cfg(windows)]
pub mod win32;

/// A shell property identifier: format id plus property id within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyKey {
    /// Format GUID as a big-endian `u128` (the usual textual GUID order).
    pub fmtid: u128,
    /// Property id within the format (`PROPID`).
    pub pid: u32,
}

impl PropertyKey {
    pub const fn new(fmtid: u128, pid: u32) -> Self {
        Self { fmtid, pid }
    }
}

/// A per-window key/value store handed out by the shell.
///
/// Dropping the store releases it.  Implementations must release exactly
/// once, whatever happened to the writes.
pub trait PropertyStore {
    /// Write `value` under `key`, encoded as the platform's native boolean.
    fn set_bool(&mut self, key: &PropertyKey, value: bool) -> Result<()>;
}

/// The window-manager operations the crate forwards to.
pub trait Shell {
    type Store: PropertyStore;

    /// Acquire the property store attached to `hwnd`.
    fn window_property_store(&self, hwnd: WindowHandle) -> Result<Self::Store>;

    /// Find a top-level window by class name.  Titles are not matched.
    fn find_top_level_window(&self, class_name: &str) -> Option<WindowHandle>;

    /// Queue a close request (`WM_SYSCOMMAND` / `SC_CLOSE`) to `hwnd` without
    /// waiting for it to be handled.
    fn post_close_request(&self, hwnd: WindowHandle) -> Result<()>;
}
