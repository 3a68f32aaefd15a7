// Global API table storage. Initialized once during module load, then
// read-only.

use std::sync::OnceLock;

use propspec_ffi::{HostApiTable, NativeApiTable};

/// Wrapper so raw pointers can live inside OnceLock (which requires
/// Send+Sync). SAFETY: both tables are created by their owners before
/// `init_api` and live for the entire process. Access is read-only after
/// init.
struct ApiRef {
    host: *const HostApiTable,
    native: *const NativeApiTable,
}
unsafe impl Send for ApiRef {}
unsafe impl Sync for ApiRef {}

static API: OnceLock<ApiRef> = OnceLock::new();

/// Store both API table pointers. Called once by module init.
/// Panics if either pointer is null or if called more than once.
pub fn init_api(host: *const HostApiTable, native: *const NativeApiTable) {
    assert!(!host.is_null(), "init_api called with null host table");
    assert!(!native.is_null(), "init_api called with null native table");
    if API.set(ApiRef { host, native }).is_err() {
        panic!("init_api called more than once");
    }
}

/// Access the host runtime's API table. Panics if called before `init_api`.
#[inline(always)]
pub fn host() -> &'static HostApiTable {
    // SAFETY: validated non-null in init_api; the host runtime guarantees the
    // table outlives the module.
    unsafe { &*API.get().expect("propspec API not initialized").host }
}

/// Access the native type system's API table. Panics if called before
/// `init_api`.
#[inline(always)]
pub fn native() -> &'static NativeApiTable {
    // SAFETY: as for `host`.
    unsafe { &*API.get().expect("propspec API not initialized").native }
}

/// Returns true once both API tables have been stored.
#[inline]
pub fn is_api_initialized() -> bool {
    API.get().is_some()
}
