// ── Win32 platform implementation ─────────────────────────────────────────────
//
// `Win32Shell` is the crate's one real FFI site: three shell calls, each in
// its own `unsafe` block with a `// SAFETY:` note.  Handles cross it opaque
// and are never dereferenced here.  The only other `unsafe` allowance is in
// `ffi`, for `#[no_mangle]`.

#![allow(unsafe_code)]

mod shell;

pub use shell::{Win32PropertyStore, Win32Shell};
