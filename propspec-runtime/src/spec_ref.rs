// PropSpecRef: lightweight 8-byte Copy reference to a native prop-spec
// record.
//
// Does NOT own the record — the native type system does, and it guarantees
// the record outlives every call that can observe the reference.

use std::ffi::CStr;
use std::fmt;

use propspec_ffi::{PropSpecHandle, RawPropSpec, TypeTag};

use crate::api::native;
use crate::error::{check_native, BridgeError, BridgeResult};

/// A typed, non-owning reference to one native prop-spec record.
///
/// - `Copy` — freely cloned; it is just the raw identifier.
/// - Immutable — the bridge only ever reads through it.
/// - Never null once constructed (`from_raw` contract).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PropSpecRef {
    handle: PropSpecHandle,
}

impl PropSpecRef {
    /// Create from a raw FFI handle.
    ///
    /// # Safety
    /// The caller must ensure the handle points to a live prop-spec record
    /// owned by the native type system.
    #[inline]
    pub unsafe fn from_raw(handle: PropSpecHandle) -> Self {
        debug_assert!(!handle.0.is_null(), "prop-spec handle must not be null");
        PropSpecRef { handle }
    }

    /// Get the underlying raw handle.
    #[inline]
    pub fn raw(&self) -> PropSpecHandle {
        self.handle
    }

    /// Read the record header in place.
    #[inline]
    fn record(&self) -> &RawPropSpec {
        // SAFETY: from_raw's contract guarantees a live, correctly laid out
        // record behind the handle.
        unsafe { &*(self.handle.0 as *const RawPropSpec) }
    }

    /// The spec's own meta-kind tag.
    #[inline]
    pub fn declared_kind(&self) -> TypeTag {
        self.record().declared_type
    }

    /// The kind of value this property holds.
    #[inline]
    pub fn value_kind(&self) -> TypeTag {
        self.record().value_type
    }

    /// The property's declared name.
    pub fn name(&self) -> BridgeResult<String> {
        let ptr = self.record().name;
        if ptr.is_null() {
            return Err(BridgeError::Internal("prop-spec name pointer is null".into()));
        }
        // SAFETY: the native system stores NUL-terminated names that live as
        // long as the record.
        let cstr = unsafe { CStr::from_ptr(ptr) };
        cstr.to_str()
            .map(|s| s.to_owned())
            .map_err(|_| BridgeError::Internal("prop-spec name is not valid UTF-8".into()))
    }

    /// Human-readable name of the declared kind.
    pub fn declared_kind_name(&self) -> BridgeResult<String> {
        type_name(self.declared_kind())
    }

    /// Human-readable name of the value kind.
    pub fn value_kind_name(&self) -> BridgeResult<String> {
        type_name(self.value_kind())
    }

    /// Whether this spec's declared kind is `kind` (or a subtype of it).
    #[inline]
    pub fn is(&self, kind: TypeTag) -> bool {
        unsafe { ((*native().types).is_a)(self.declared_kind(), kind) }
    }
}

impl fmt::Debug for PropSpecRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropSpecRef")
            .field("handle", &self.handle)
            .finish()
    }
}

/// Resolve a type tag to its registered human-readable name.
pub fn type_name(tag: TypeTag) -> BridgeResult<String> {
    // Stack buffer — 256 bytes covers every registered type name.
    let mut buf = [0u8; 256];
    let mut out_len: u32 = 0;
    let code = unsafe {
        ((*native().types).type_name)(tag, buf.as_mut_ptr(), buf.len() as u32, &mut out_len)
    };
    check_native(code)?;
    std::str::from_utf8(&buf[..out_len as usize])
        .map(|s| s.to_owned())
        .map_err(|_| BridgeError::Internal("type name is not valid UTF-8".into()))
}
