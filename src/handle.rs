// ── Window handle ─────────────────────────────────────────────────────────────
//
// Handles are owned by the window manager; we only carry them from the host
// to the platform call and never dereference or retain them.

use std::{ffi::c_void, ptr::NonNull};

/// An opaque, non-null reference to a platform window.
///
/// Valid only for the lifetime of the window it names.  A destroyed window's
/// handle still constructs fine; the platform call rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(NonNull<c_void>);

impl WindowHandle {
    /// Wrap a native handle. Returns `None` for the null handle.
    pub fn from_raw(raw: *mut c_void) -> Option<Self> {
        NonNull::new(raw).map(Self)
    }

    /// The native handle, for passing back to the platform.
    pub fn as_raw(self) -> *mut c_void {
        self.0.as_ptr()
    }
}
