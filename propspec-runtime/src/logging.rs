// Logging bridge to the host runtime's log sink.

/// Log level constants for the `plog!` macro.
pub const LOG_DEBUG: u8 = 0;
pub const LOG_WARNING: u8 = 1;
pub const LOG_ERROR: u8 = 2;

/// Log a message through the host runtime.
///
/// Usage:
/// ```ignore
/// plog!(LOG_DEBUG, "describing property {}", name);
/// plog!(LOG_WARNING, "something suspicious");
/// plog!(LOG_ERROR, "fatal: {err}");
/// ```
///
/// Level constants: `LOG_DEBUG` (0), `LOG_WARNING` (1), `LOG_ERROR` (2).
#[macro_export]
macro_rules! plog {
    ($level:expr, $($arg:tt)*) => {{
        let msg = format!($($arg)*);
        let bytes = msg.as_bytes();
        // SAFETY: the API tables are initialized before any call handling
        // begins, and the logging sub-table pointer is always valid after
        // init.
        unsafe {
            ((*$crate::host().logging).log)($level, bytes.as_ptr(), bytes.len() as u32);
        }
    }};
}
