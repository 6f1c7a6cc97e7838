// ── Central error type ────────────────────────────────────────────────────────
//
// Every fallible operation in the crate returns `error::Result<T>`.  The C ABI
// collapses these to `FALSE` (see `ffi`); Rust callers get the variant, and
// the components log it before returning.

/// `HRESULT_FROM_WIN32(ERROR_INVALID_HANDLE)`, a.k.a. `E_HANDLE`.
pub(crate) const HRESULT_INVALID_HANDLE: u32 = 0x8007_0006;

/// `HRESULT_FROM_WIN32(ERROR_INVALID_WINDOW_HANDLE)`.
pub(crate) const HRESULT_INVALID_WINDOW_HANDLE: u32 = 0x8007_0578;

/// Every error that the shell operations can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellError {
    /// The window handle was null, or the platform no longer recognises it.
    HandleInvalid,

    /// The shell returned no property store for the window.
    PropertyStoreUnavailable {
        /// Raw HRESULT bits reported by the platform.
        code: u32,
    },

    /// The property store refused the value.
    WriteRejected {
        /// Raw HRESULT bits reported by the platform.
        code: u32,
    },

    /// The close request could not be queued to the target window.
    PostRejected {
        /// Raw HRESULT bits reported by the platform.
        code: u32,
    },
}

impl ShellError {
    /// Classify a failed property-store acquisition.
    ///
    /// Handle errors get their own variant; anything else means the shell had
    /// no store to give us.
    pub fn from_acquire_code(code: u32) -> Self {
        match code {
            HRESULT_INVALID_HANDLE | HRESULT_INVALID_WINDOW_HANDLE => Self::HandleInvalid,
            code => Self::PropertyStoreUnavailable { code },
        }
    }

    /// Classify a failed close-request post.
    pub fn from_post_code(code: u32) -> Self {
        match code {
            HRESULT_INVALID_HANDLE | HRESULT_INVALID_WINDOW_HANDLE => Self::HandleInvalid,
            code => Self::PostRejected { code },
        }
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HandleInvalid => write!(f, "invalid window handle"),
            Self::PropertyStoreUnavailable { code } => {
                write!(f, "window property store unavailable (error {code:#010x})")
            }
            Self::WriteRejected { code } => {
                write!(f, "property write rejected (error {code:#010x})")
            }
            Self::PostRejected { code } => {
                write!(f, "close request not queued (error {code:#010x})")
            }
        }
    }
}

impl std::error::Error for ShellError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ShellError>;

// ── Tests ─────────────────────────────────────────────────────────────────────
