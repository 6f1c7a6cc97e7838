// ── Touch keyboard dismissal ──────────────────────────────────────────────────

use tracing::{debug, warn};

use crate::{error::Result, platform::Shell};

/// Window class of the on-screen touch keyboard (TabTip.exe).
pub const TOUCH_KEYBOARD_CLASS: &str = "IPTip_Main_Window";

/// Ask the on-screen touch keyboard to close, if it is showing.
///
/// Returns `Ok(false)` when no keyboard window exists; that is the normal
/// "keyboard not shown" case, not an error.  `Ok(true)` means the close
/// request was queued.  The call does not wait for the keyboard to act on it.
pub fn hide_touch_keyboard<S: Shell>(shell: &S) -> Result<bool> {
    let Some(hwnd) = shell.find_top_level_window(TOUCH_KEYBOARD_CLASS) else {
        debug!("touch keyboard not shown");
        return Ok(false);
    };

    match shell.post_close_request(hwnd) {
        Ok(()) => {
            debug!(?hwnd, "close request posted to touch keyboard");
            Ok(true)
        }
        Err(err) => {
            warn!(?hwnd, %err, "failed to post close request to touch keyboard");
            Err(err)
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
