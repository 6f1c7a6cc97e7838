// ── In-memory shell for tests ─────────────────────────────────────────────────
//
// Stands in for the window manager: windows with a class name, an optional
// property store and a message queue.  Stores share the shell's state so
// releases and writes are observable after the call returns.

use std::{cell::RefCell, collections::HashMap, ffi::c_void, rc::Rc};

use crate::{
    error::{Result, ShellError, HRESULT_INVALID_WINDOW_HANDLE},
    gesture::EDGE_GESTURE_DISABLE_TOUCH_WHEN_FULLSCREEN,
    handle::WindowHandle,
    platform::{PropertyKey, PropertyStore, Shell},
};

/// E_NOINTERFACE
const NO_INTERFACE: u32 = 0x8000_4002;
/// E_ACCESSDENIED
const ACCESS_DENIED: u32 = 0x8007_0005;
/// HRESULT_FROM_WIN32(ERROR_NOT_ENOUGH_QUOTA): the target queue is full.
const QUEUE_FULL: u32 = 0x8007_0718;

struct FakeWindow {
    hwnd: WindowHandle,
    class_name: String,
    has_store: bool,
    properties: HashMap<PropertyKey, bool>,
    close_requests: usize,
}

#[derive(Default)]
struct State {
    next_handle: usize,
    windows: Vec<FakeWindow>,
    stores_acquired: usize,
    stores_released: usize,
    reject_writes: bool,
    reject_posts: bool,
}

impl State {
    fn window_mut(&mut self, hwnd: WindowHandle) -> Option<&mut FakeWindow> {
        self.windows.iter_mut().find(|w| w.hwnd == hwnd)
    }

    fn window(&self, hwnd: WindowHandle) -> Option<&FakeWindow> {
        self.windows.iter().find(|w| w.hwnd == hwnd)
    }
}

#[derive(Default)]
pub(crate) struct FakeShell {
    state: Rc<RefCell<State>>,
}

pub(crate) struct FakeStore {
    state: Rc<RefCell<State>>,
    hwnd: WindowHandle,
}

impl FakeShell {
    pub(crate) fn add_window(&self, class_name: &str) -> WindowHandle {
        self.create(class_name, true)
    }

    pub(crate) fn add_window_without_store(&self, class_name: &str) -> WindowHandle {
        self.create(class_name, false)
    }

    fn create(&self, class_name: &str, has_store: bool) -> WindowHandle {
        let mut state = self.state.borrow_mut();
        state.next_handle += 0x10;
        // Fake handles are never dereferenced; any non-null value will do.
        let hwnd = WindowHandle::from_raw(state.next_handle as *mut c_void)
            .expect("fake handles start above zero");
        state.windows.push(FakeWindow {
            hwnd,
            class_name: class_name.to_owned(),
            has_store,
            properties: HashMap::new(),
            close_requests: 0,
        });
        hwnd
    }

    pub(crate) fn destroy_window(&self, hwnd: WindowHandle) {
        self.state.borrow_mut().windows.retain(|w| w.hwnd != hwnd);
    }

    pub(crate) fn reject_writes(&self, reject: bool) {
        self.state.borrow_mut().reject_writes = reject;
    }

    pub(crate) fn reject_posts(&self, reject: bool) {
        self.state.borrow_mut().reject_posts = reject;
    }

    pub(crate) fn edge_gesture_flag(&self, hwnd: WindowHandle) -> Option<bool> {
        self.state
            .borrow()
            .window(hwnd)?
            .properties
            .get(&EDGE_GESTURE_DISABLE_TOUCH_WHEN_FULLSCREEN)
            .copied()
    }

    pub(crate) fn close_requests(&self, hwnd: WindowHandle) -> usize {
        self.state
            .borrow()
            .window(hwnd)
            .map_or(0, |w| w.close_requests)
    }

    pub(crate) fn stores_acquired(&self) -> usize {
        self.state.borrow().stores_acquired
    }

    pub(crate) fn stores_released(&self) -> usize {
        self.state.borrow().stores_released
    }
}

impl Shell for FakeShell {
    type Store = FakeStore;

    fn window_property_store(&self, hwnd: WindowHandle) -> Result<FakeStore> {
        let mut state = self.state.borrow_mut();
        let window = state
            .window(hwnd)
            .ok_or(ShellError::from_acquire_code(HRESULT_INVALID_WINDOW_HANDLE))?;
        if !window.has_store {
            return Err(ShellError::from_acquire_code(NO_INTERFACE));
        }
        state.stores_acquired += 1;
        Ok(FakeStore {
            state: Rc::clone(&self.state),
            hwnd,
        })
    }

    fn find_top_level_window(&self, class_name: &str) -> Option<WindowHandle> {
        self.state
            .borrow()
            .windows
            .iter()
            .find(|w| w.class_name == class_name)
            .map(|w| w.hwnd)
    }

    fn post_close_request(&self, hwnd: WindowHandle) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.reject_posts {
            return Err(ShellError::from_post_code(QUEUE_FULL));
        }
        let window = state
            .window_mut(hwnd)
            .ok_or(ShellError::from_post_code(HRESULT_INVALID_WINDOW_HANDLE))?;
        window.close_requests += 1;
        Ok(())
    }
}

impl PropertyStore for FakeStore {
    fn set_bool(&mut self, key: &PropertyKey, value: bool) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.reject_writes {
            return Err(ShellError::WriteRejected {
                code: ACCESS_DENIED,
            });
        }
        let window = state
            .window_mut(self.hwnd)
            .ok_or(ShellError::HandleInvalid)?;
        window.properties.insert(*key, value);
        Ok(())
    }
}

impl Drop for FakeStore {
    fn drop(&mut self) {
        self.state.borrow_mut().stores_released += 1;
    }
}
