// Lifecycle callbacks invoked by the host runtime outside normal call paths.
// All three are log-only: the handle never owns the wrapped metadata, so
// there is nothing to release when the host collects it.

use std::ffi::c_void;

use propspec_ffi::ResourceCallbacks;
use propspec_runtime::{ffi_boundary, LOG_DEBUG};

extern "C" fn collected(obj: *mut c_void) {
    ffi_boundary((), || {
        propspec_runtime::plog!(LOG_DEBUG, "prop-spec handle collected: {obj:p}");
    });
}

extern "C" fn event(obj: *mut c_void, event_id: i32) {
    ffi_boundary((), || {
        propspec_runtime::plog!(
            LOG_DEBUG,
            "prop-spec handle runtime event {event_id} fired: {obj:p}"
        );
    });
}

extern "C" fn owner_exit(obj: *mut c_void, owner: u64) {
    ffi_boundary((), || {
        propspec_runtime::plog!(LOG_DEBUG, "prop-spec handle owner {owner} exited: {obj:p}");
    });
}

/// Handed to the host runtime when the handle kind is registered.
pub static CALLBACKS: ResourceCallbacks = ResourceCallbacks {
    collected,
    event,
    owner_exit,
};
