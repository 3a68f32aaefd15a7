/// FFI error codes shared with the native type system.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecErrorCode {
    Ok = 0,
    BufferTooSmall = 1,
    UnknownType = 2,
    InternalError = 3,
}
