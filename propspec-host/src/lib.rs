//! propspec-host: host-runtime integration for the prop-spec bridge.
//!
//! Owns the handle kind, the exported call surface, and the module entry
//! points. Use `propspec_host::entry!()` in a cdylib crate to generate the
//! loadable-module exports.

pub mod callbacks;
pub mod ops;
pub mod resource;
pub mod terms;

use propspec_ffi::{HostApiTable, NativeApiTable};
use propspec_runtime as runtime;

pub use ops::describe_term;
pub use resource::{unwrap, wrap};
pub use runtime::exported_ops;

// Re-export for `entry!` path resolution and integration-layer access.
pub use propspec_ffi as ffi;

/// Initialize the bridge. Called once by the `entry!()` generated module
/// init. Stores both API tables, registers the handle kind, and logs a
/// greeting. Returns false when either table pointer is null or init panics.
pub fn init(host: *const HostApiTable, native: *const NativeApiTable) -> bool {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        if host.is_null() || native.is_null() {
            return false;
        }
        runtime::init_api(host, native);
        resource::open_kind();
        runtime::plog!(
            runtime::LOG_DEBUG,
            "[propspec] bridge initialized, {} ops exported",
            runtime::exported_ops().count()
        );
        true
    }))
    .unwrap_or(false)
}

/// Shut down the bridge. The handle kind and the wrapped metadata are owned
/// elsewhere, so this only logs.
pub fn shutdown() {
    let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        if runtime::is_api_initialized() {
            runtime::plog!(runtime::LOG_DEBUG, "[propspec] bridge shut down");
        }
    }));
}

/// Generates the loadable-module entry points for the bridge.
///
/// Place this at the top of your cdylib crate's `lib.rs`:
/// ```ignore
/// propspec_host::entry!();
/// ```
#[macro_export]
macro_rules! entry {
    () => {
        mod __propspec_entry {
            #[unsafe(no_mangle)]
            pub extern "C" fn propspec_init(
                host: *const $crate::ffi::HostApiTable,
                native: *const $crate::ffi::NativeApiTable,
            ) -> bool {
                $crate::init(host, native)
            }

            #[unsafe(no_mangle)]
            pub extern "C" fn propspec_shutdown() {
                $crate::shutdown()
            }
        }
    };
}
