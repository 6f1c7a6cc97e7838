// ── Exported C ABI ────────────────────────────────────────────────────────────
//
// The entry points the host loads from the DLL.  Names are unmangled and
// signatures use Win32 types so a P/Invoke or C caller sees plain
// `BOOL f(HWND, BOOL)` / `BOOL f(void)`.  Every failure collapses to `FALSE`;
// the components have already logged the reason.
//
// No unsafe blocks here; the allow covers `#[no_mangle]`, which the
// `unsafe_code` lint reports.

#![allow(unsafe_code)]

use std::ffi::c_void;

use windows::Win32::Foundation::{BOOL, FALSE, HMODULE, HWND, TRUE};

use crate::{
    gesture::set_touch_disable_property, handle::WindowHandle, keyboard::hide_touch_keyboard,
    platform::win32::Win32Shell,
};

/// Loader notification.  Process and thread attach/detach are all no-ops.
///
/// Runs under the loader lock, so it must stay free of logging and allocation.
#[no_mangle]
pub extern "system" fn DllMain(_module: HMODULE, _reason: u32, _reserved: *mut c_void) -> BOOL {
    TRUE
}

/// `BOOL SetTouchDisableProperty(HWND hwnd, BOOL fDisableTouch)`
///
/// `TRUE` only if the window's property store was obtained and the edge
/// gesture flag written.  A null `hwnd` is `FALSE` without touching the shell.
#[no_mangle]
pub extern "C" fn SetTouchDisableProperty(hwnd: HWND, disable_touch: BOOL) -> BOOL {
    let Some(hwnd) = WindowHandle::from_raw(hwnd.0) else {
        return FALSE;
    };
    set_touch_disable_property(&Win32Shell, hwnd, disable_touch.as_bool())
        .is_ok()
        .into()
}

/// `BOOL HideTouchKeyboard(void)`
///
/// `TRUE` if the touch keyboard window exists and the close request was
/// queued; `FALSE` if it is not shown or the post failed.
#[no_mangle]
pub extern "C" fn HideTouchKeyboard() -> BOOL {
    hide_touch_keyboard(&Win32Shell).unwrap_or(false).into()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
