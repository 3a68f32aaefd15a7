// propspec-runtime: Safe Rust layer wrapping propspec-ffi.
// All unsafe FFI calls are confined to this crate and propspec-host; callers
// interact only with the safe types exported here.

pub mod api;
pub mod error;
pub mod logging;
pub mod ffi_guard;
pub mod spec_ref;
pub mod describe;
pub mod exports;

// Re-export the primary public API surface.
pub use api::{host, init_api, is_api_initialized, native};
pub use error::{check_native, BridgeError, BridgeResult};
pub use logging::{LOG_DEBUG, LOG_ERROR, LOG_WARNING};
pub use ffi_guard::ffi_boundary;
pub use spec_ref::{type_name, PropSpecRef};
pub use describe::{clamp_double, describe, Descriptor, Detail, EnumEntry};
pub use exports::{exported_ops, OpExport, OpFn};

// Re-export FFI types needed by export call sites.
pub use propspec_ffi::{
    EnvHandle, HostApiTable, NativeApiTable, PropSpecHandle, ResourceKind, SpecErrorCode, Term,
    TypeTag,
};
