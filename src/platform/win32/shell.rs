// ── Win32 shell ───────────────────────────────────────────────────────────────
//
// `Shell` over the real window manager:
//   • property store  → SHGetPropertyStoreForWindow / IPropertyStore::SetValue
//   • window lookup   → FindWindowW (class only, any title)
//   • close request   → PostMessageW(WM_SYSCOMMAND, SC_CLOSE)

#![allow(unsafe_code)]

use windows::{
    core::{GUID, PCWSTR, PROPVARIANT},
    Win32::{
        Foundation::{HWND, LPARAM, WPARAM},
        UI::{
            Shell::PropertiesSystem::{IPropertyStore, SHGetPropertyStoreForWindow, PROPERTYKEY},
            WindowsAndMessaging::{FindWindowW, PostMessageW, SC_CLOSE, WM_SYSCOMMAND},
        },
    },
};

use crate::{
    error::{Result, ShellError},
    handle::WindowHandle,
    platform::{PropertyKey, PropertyStore, Shell},
};

/// The live Windows shell.  Stateless; every call goes straight to Win32.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Shell;

/// A window's `IPropertyStore`.  The COM reference is released when this
/// value is dropped.
pub struct Win32PropertyStore(IPropertyStore);

impl Shell for Win32Shell {
    type Store = Win32PropertyStore;

    fn window_property_store(&self, hwnd: WindowHandle) -> Result<Win32PropertyStore> {
        // SAFETY: the handle is passed through untouched; the shell validates
        // it and fails with an HRESULT for stale or foreign handles.  The
        // returned interface is owned and released on drop.
        let store: IPropertyStore = unsafe { SHGetPropertyStoreForWindow(to_hwnd(hwnd)) }
            .map_err(|e| ShellError::from_acquire_code(hresult_bits(&e)))?;
        Ok(Win32PropertyStore(store))
    }

    fn find_top_level_window(&self, class_name: &str) -> Option<WindowHandle> {
        let class_wide: Vec<u16> = class_name
            .encode_utf16()
            .chain(std::iter::once(0))
            .collect();

        // SAFETY: class_wide is a valid null-terminated UTF-16 string that
        // outlives the call.  A null window name matches any title.
        // FindWindowW reports "not found" as an error; both mean no window.
        let hwnd = unsafe { FindWindowW(PCWSTR(class_wide.as_ptr()), PCWSTR::null()) }.ok()?;
        WindowHandle::from_raw(hwnd.0)
    }

    fn post_close_request(&self, hwnd: WindowHandle) -> Result<()> {
        // SAFETY: PostMessageW only queues the message; it never dereferences
        // the handle in our process and fails cleanly for dead windows.
        // SC_CLOSE carries no lParam payload.
        unsafe {
            PostMessageW(
                to_hwnd(hwnd),
                WM_SYSCOMMAND,
                WPARAM(SC_CLOSE as usize),
                LPARAM(0),
            )
        }
        .map_err(|e| ShellError::from_post_code(hresult_bits(&e)))
    }
}

impl PropertyStore for Win32PropertyStore {
    fn set_bool(&mut self, key: &PropertyKey, value: bool) -> Result<()> {
        let key = to_propertykey(key);
        // VT_BOOL holding VARIANT_TRUE / VARIANT_FALSE.
        let value = PROPVARIANT::from(value);

        // SAFETY: key and value are live locals for the duration of the call;
        // SetValue copies the variant into the store.
        unsafe { self.0.SetValue(&key, &value) }.map_err(|e| ShellError::WriteRejected {
            code: hresult_bits(&e),
        })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn to_hwnd(hwnd: WindowHandle) -> HWND {
    HWND(hwnd.as_raw())
}

pub(crate) fn to_propertykey(key: &PropertyKey) -> PROPERTYKEY {
    PROPERTYKEY {
        fmtid: GUID::from_u128(key.fmtid),
        pid: key.pid,
    }
}

/// HRESULT.0 is i32; reinterpret the bits as u32 for display and matching.
/// Win32 errors appear as 0x8007xxxx HRESULTs.
fn hresult_bits(e: &windows::core::Error) -> u32 {
    e.code().0 as u32
}

// ── Tests ─────────────────────────────────────────────────────────────────────
