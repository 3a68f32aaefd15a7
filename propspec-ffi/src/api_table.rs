use std::ffi::c_void;

use crate::error::SpecErrorCode;
use crate::handles::*;

// ---------------------------------------------------------------------------
// Native type system (metadata owner)
// ---------------------------------------------------------------------------

/// Table passed in by the native type system at module load. All pointers
/// stay valid for the life of the process.
#[repr(C)]
pub struct NativeApiTable {
    pub version: u32,
    pub types: *const NativeTypeApi,
    /// The registered fundamental kind tags, written once before load.
    pub kinds: *const KindTags,
}

unsafe impl Send for NativeApiTable {}
unsafe impl Sync for NativeApiTable {}

#[repr(C)]
pub struct NativeTypeApi {
    /// Write the registered name of a type tag into a caller-supplied
    /// buffer (UTF-8, not NUL-terminated).
    pub type_name: unsafe extern "C" fn(
        tag: TypeTag,
        buf: *mut u8,
        buf_len: u32,
        out_len: *mut u32,
    ) -> SpecErrorCode,

    /// Whether `tag` is `ancestor` or a registered subtype of it.
    pub is_a: unsafe extern "C" fn(tag: TypeTag, ancestor: TypeTag) -> bool,
}

/// The fundamental prop-spec kind tags, one per classified kind. A spec's
/// declared tag is matched against these through `is_a`.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct KindTags {
    pub enumeration: TypeTag,
    pub boolean: TypeTag,
    pub uint64: TypeTag,
    pub double: TypeTag,
    pub int32: TypeTag,
    pub uint32: TypeTag,
    pub int64: TypeTag,
    pub string: TypeTag,
    pub boxed: TypeTag,
    pub object: TypeTag,
}

// ---------------------------------------------------------------------------
// Host runtime (term construction, resources, logging)
// ---------------------------------------------------------------------------

/// Table passed in by the host runtime at module load.
#[repr(C)]
pub struct HostApiTable {
    pub version: u32,
    pub term: *const HostTermApi,
    pub resource: *const HostResourceApi,
    pub logging: *const HostLogApi,
}

unsafe impl Send for HostApiTable {}
unsafe impl Sync for HostApiTable {}

/// Term constructors. Every term is scoped to the environment that built it.
#[repr(C)]
pub struct HostTermApi {
    pub make_atom: unsafe extern "C" fn(env: EnvHandle, name: *const u8, len: u32) -> Term,
    pub make_int32: unsafe extern "C" fn(env: EnvHandle, val: i32) -> Term,
    pub make_uint32: unsafe extern "C" fn(env: EnvHandle, val: u32) -> Term,
    pub make_int64: unsafe extern "C" fn(env: EnvHandle, val: i64) -> Term,
    pub make_uint64: unsafe extern "C" fn(env: EnvHandle, val: u64) -> Term,
    pub make_double: unsafe extern "C" fn(env: EnvHandle, val: f64) -> Term,
    pub make_string: unsafe extern "C" fn(env: EnvHandle, s: *const u8, len: u32) -> Term,
    pub make_tuple2: unsafe extern "C" fn(env: EnvHandle, a: Term, b: Term) -> Term,
    pub make_tuple3: unsafe extern "C" fn(env: EnvHandle, a: Term, b: Term, c: Term) -> Term,
    pub list_empty: unsafe extern "C" fn(env: EnvHandle) -> Term,
    pub list_prepend: unsafe extern "C" fn(env: EnvHandle, head: Term, tail: Term) -> Term,
    /// The host's bad-argument value; returning it fails the call without
    /// raising in the bridge.
    pub make_badarg: unsafe extern "C" fn(env: EnvHandle) -> Term,
}

/// Resource mechanism: opaque allocations tracked by the host runtime's
/// garbage collector, tagged with a registered kind.
#[repr(C)]
pub struct HostResourceApi {
    /// Register a handle kind. Called once at module init, before any
    /// call handling begins.
    pub open_kind: unsafe extern "C" fn(
        name: *const u8,
        name_len: u32,
        callbacks: *const crate::callbacks::ResourceCallbacks,
    ) -> ResourceKind,

    /// Allocate a resource of `kind` with `size` bytes of payload.
    /// The allocation starts with one reference held by the caller.
    pub alloc: unsafe extern "C" fn(kind: ResourceKind, size: u32) -> *mut c_void,

    /// Produce the GC-visible term for a resource allocation.
    pub wrap: unsafe extern "C" fn(env: EnvHandle, obj: *mut c_void) -> Term,

    /// Drop one reference to a resource allocation.
    pub release: unsafe extern "C" fn(obj: *mut c_void),

    /// Resolve a term to a resource payload of `kind`. Returns false when
    /// the term is not a resource or is a resource of another kind.
    pub get: unsafe extern "C" fn(
        env: EnvHandle,
        term: Term,
        kind: ResourceKind,
        out: *mut *mut c_void,
    ) -> bool,
}

#[repr(C)]
pub struct HostLogApi {
    /// `level`: 0=Debug, 1=Warning, 2=Error. `msg` is a UTF-8 byte slice
    /// (not NUL-terminated).
    pub log: unsafe extern "C" fn(level: u8, msg: *const u8, len: u32),
}
