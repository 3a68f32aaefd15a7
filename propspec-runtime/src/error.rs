// Error types for the propspec bridge.

use std::fmt;

use propspec_ffi::SpecErrorCode;

/// Rich error type for bridge operations. Every variant is a caller error or
/// an internal fault local to one call; nothing here is fatal to the host
/// process.
#[derive(Debug, PartialEq, Eq)]
pub enum BridgeError {
    /// An exported operation received an argument count other than 1.
    BadArity { got: u32 },
    /// The argument did not resolve to a prop-spec handle of the registered
    /// kind.
    NotAHandle,
    BufferTooSmall,
    UnknownType,
    Internal(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::BadArity { got } => {
                write!(f, "expected exactly 1 argument, got {got}")
            }
            BridgeError::NotAHandle => write!(f, "argument is not a prop-spec handle"),
            BridgeError::BufferTooSmall => write!(f, "buffer too small"),
            BridgeError::UnknownType => write!(f, "type tag is not registered"),
            BridgeError::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for BridgeError {}

/// Convenience alias used throughout the bridge.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Convert a native error code to a `BridgeResult<()>`.
/// `Ok` maps to `Ok(())`, all others map to the corresponding `BridgeError`.
pub fn check_native(code: SpecErrorCode) -> BridgeResult<()> {
    match code {
        SpecErrorCode::Ok => Ok(()),
        other => Err(BridgeError::from(other)),
    }
}

impl From<SpecErrorCode> for BridgeError {
    fn from(code: SpecErrorCode) -> Self {
        match code {
            SpecErrorCode::Ok => {
                // Callers should not convert Ok into an error. If they do,
                // treat it as an internal logic bug.
                BridgeError::Internal("unexpected Ok error code".into())
            }
            SpecErrorCode::BufferTooSmall => BridgeError::BufferTooSmall,
            SpecErrorCode::UnknownType => BridgeError::UnknownType,
            SpecErrorCode::InternalError => BridgeError::Internal(String::new()),
        }
    }
}
