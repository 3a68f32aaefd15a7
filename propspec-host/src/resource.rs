// Handle Bridge: wraps native prop-spec pointers in host-visible resource
// terms of the registered kind, and resolves such terms back to pointers.
//
// The resource payload is exactly one pointer. The metadata itself stays
// owned by the native type system; collecting the handle never frees it.

use std::ffi::c_void;
use std::sync::OnceLock;

use propspec_ffi::{EnvHandle, PropSpecHandle, ResourceKind, Term};
use propspec_runtime::{host, BridgeError, BridgeResult, PropSpecRef};

use crate::callbacks::CALLBACKS;

const KIND_NAME: &str = "prop_spec_handle";

/// Wrapper so the kind can live inside OnceLock. SAFETY: the kind is an
/// identifier the host runtime keeps valid for the life of the module.
struct KindRef(ResourceKind);
unsafe impl Send for KindRef {}
unsafe impl Sync for KindRef {}

static KIND: OnceLock<KindRef> = OnceLock::new();

/// Register the handle kind with the host runtime. Called once from init,
/// before any call handling begins. Panics on re-registration.
pub(crate) fn open_kind() {
    let kind = unsafe {
        ((*host().resource).open_kind)(
            KIND_NAME.as_ptr(),
            KIND_NAME.len() as u32,
            &CALLBACKS,
        )
    };
    if KIND.set(KindRef(kind)).is_err() {
        panic!("prop-spec handle kind registered more than once");
    }
}

#[inline]
fn kind() -> ResourceKind {
    KIND.get().expect("prop-spec handle kind not registered").0
}

/// Wrap a native prop-spec pointer in a fresh handle term.
///
/// The resource stores the pointer only: no copy, no ownership transfer.
pub fn wrap(env: EnvHandle, spec: PropSpecRef) -> Term {
    let res = unsafe {
        ((*host().resource).alloc)(kind(), std::mem::size_of::<PropSpecHandle>() as u32)
    };
    unsafe {
        *(res as *mut PropSpecHandle) = spec.raw();
    }
    let term = unsafe { ((*host().resource).wrap)(env, res) };
    // The term now holds the resource; drop the bridge's transient reference.
    unsafe {
        ((*host().resource).release)(res);
    }
    term
}

/// Resolve a handle term back to the native pointer it wraps.
///
/// Fails with `NotAHandle` when the term is not a resource of the registered
/// kind. The pointer itself is not re-validated; the native type system
/// guarantees metadata lifetime.
pub fn unwrap(env: EnvHandle, term: Term) -> BridgeResult<PropSpecRef> {
    let mut res: *mut c_void = std::ptr::null_mut();
    let ok = unsafe { ((*host().resource).get)(env, term, kind(), &mut res) };
    if !ok {
        return Err(BridgeError::NotAHandle);
    }
    let handle = unsafe { *(res as *const PropSpecHandle) };
    // SAFETY: wrap stored a pointer obtained from a live PropSpecRef, and the
    // native system keeps the record alive.
    Ok(unsafe { PropSpecRef::from_raw(handle) })
}
