// FFI boundary guard: wraps Rust entry points to catch panics before they
// cross the FFI boundary (which is undefined behavior).

use crate::api::is_api_initialized;

/// Execute `f` and catch any panic, returning `default` on failure.
///
/// All `extern "C"` functions invoked by the host runtime should wrap their
/// body in this guard. A panic that escapes across FFI is instant UB; this
/// prevents that.
///
/// If the API tables are initialized, the panic message is logged through the
/// host runtime.
pub fn ffi_boundary<F, R>(default: R, f: F) -> R
where
    F: FnOnce() -> R + std::panic::UnwindSafe,
{
    match std::panic::catch_unwind(f) {
        Ok(value) => value,
        Err(payload) => {
            // Best-effort logging. Before init there is no log sink, so the
            // panic is silently swallowed (still better than UB).
            if is_api_initialized() {
                let msg = panic_message(&payload);
                let bytes = msg.as_bytes();
                unsafe {
                    ((*crate::api::host().logging).log)(
                        crate::logging::LOG_ERROR,
                        bytes.as_ptr(),
                        bytes.len() as u32,
                    );
                }
            }
            default
        }
    }
}

/// Extract a human-readable message from a panic payload.
fn panic_message(payload: &Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("[propspec] Rust panic: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("[propspec] Rust panic: {s}")
    } else {
        "[propspec] Rust panic (unknown payload)".to_string()
    }
}
