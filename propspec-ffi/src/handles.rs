use std::ffi::c_void;

/// Opaque pointer to one native prop-spec record. The bridge never frees it;
/// the native type system owns the metadata and outlives every call.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PropSpecHandle(pub *mut c_void);

/// Native type identifier. Tags are assigned by the native type system at
/// registration time and are stable for the life of the process.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct TypeTag(pub u64);

/// Opaque host-runtime call environment. Valid only for the duration of the
/// call it was handed to.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct EnvHandle(pub *mut c_void);

/// A host-runtime value. Meaningful only within the environment that
/// produced it.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Term(pub u64);

/// A handle kind registered with the host runtime's resource mechanism.
/// Written once at module init, read thereafter.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ResourceKind(pub *mut c_void);

// PropSpecHandle and ResourceKind are raw identifiers into structures the
// native system / host runtime keep alive for the whole process; they can be
// moved and shared freely. EnvHandle is call-scoped and deliberately gets no
// Send/Sync impls.
unsafe impl Send for PropSpecHandle {}
unsafe impl Sync for PropSpecHandle {}
unsafe impl Send for ResourceKind {}
unsafe impl Sync for ResourceKind {}
