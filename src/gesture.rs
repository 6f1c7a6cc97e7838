// ── Edge-gesture suppression ──────────────────────────────────────────────────
//
// Writes the shell's "disable edge gesture when fullscreen" flag on a window.
// The property store lives only inside `write_flag`; it is released when that
// scope ends, on the success path and the failure path alike.

use tracing::{debug, warn};

use crate::{
    error::Result,
    handle::WindowHandle,
    platform::{PropertyKey, PropertyStore, Shell},
};

/// `PKEY_EdgeGesture_DisableTouchWhenFullscreen`:
/// `{32CE38B2-2C9A-41B1-9BC5-B3784394AA44}`, pid 2.
pub const EDGE_GESTURE_DISABLE_TOUCH_WHEN_FULLSCREEN: PropertyKey =
    PropertyKey::new(0x32CE38B2_2C9A_41B1_9BC5_B3784394AA44, 2);

/// Disable (`true`) or re-enable (`false`) edge-swipe touch gestures while
/// `hwnd` is fullscreen.
///
/// The flag belongs to the window manager and persists until it is changed
/// again or the window is destroyed.  Repeating a call is harmless.
pub fn set_touch_disable_property<S: Shell>(
    shell: &S,
    hwnd: WindowHandle,
    disable: bool,
) -> Result<()> {
    let result = write_flag(shell, hwnd, disable);
    match &result {
        Ok(()) => debug!(?hwnd, disable, "edge gesture flag written"),
        Err(err) => warn!(?hwnd, disable, %err, "failed to write edge gesture flag"),
    }
    result
}

fn write_flag<S: Shell>(shell: &S, hwnd: WindowHandle, disable: bool) -> Result<()> {
    let mut store = shell.window_property_store(hwnd)?;
    store.set_bool(&EDGE_GESTURE_DISABLE_TOUCH_WHEN_FULLSCREEN, disable)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
