use std::ffi::c_void;

/// Lifecycle callbacks handed to the host runtime when the handle kind is
/// registered. The host invokes these outside normal call paths. The bridge
/// never owns the wrapped metadata, so none of them performs cleanup.
#[repr(C)]
pub struct ResourceCallbacks {
    /// The handle term was garbage-collected.
    pub collected: extern "C" fn(obj: *mut c_void),

    /// A low-level runtime resource event fired for the handle.
    pub event: extern "C" fn(obj: *mut c_void, event_id: i32),

    /// The process owning the handle exited.
    pub owner_exit: extern "C" fn(obj: *mut c_void, owner: u64),
}
