// Native prop-spec record layouts. The native type system hands out pointers
// to these; the bridge reads fields in place and never writes or frees them.
//
// Every kind-specific record embeds `RawPropSpec` as its first field, so a
// `PropSpecHandle` can be read as the base record unconditionally and as a
// kind record once the matching kind predicate holds.

use std::ffi::c_char;

use crate::handles::TypeTag;

/// Common header of every prop-spec record.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawPropSpec {
    /// The spec's own meta-kind tag.
    pub declared_type: TypeTag,
    /// The kind of value the property holds.
    pub value_type: TypeTag,
    /// Declared property name, NUL-terminated, owned by the native system.
    pub name: *const c_char,
}

/// One slot of an enum value table.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawEnumEntry {
    pub value: i32,
    /// Symbolic name, NUL-terminated, owned by the native system.
    pub name: *const c_char,
}

/// An enum class's value table. The final slot is a terminator entry and
/// carries no reportable value.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawEnumTable {
    pub n_entries: u32,
    pub entries: *const RawEnumEntry,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawEnumSpec {
    pub base: RawPropSpec,
    pub table: *const RawEnumTable,
    pub default_value: i32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawBoolSpec {
    pub base: RawPropSpec,
    pub default_value: bool,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawUInt64Spec {
    pub base: RawPropSpec,
    pub minimum: u64,
    pub maximum: u64,
    pub default_value: u64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawDoubleSpec {
    pub base: RawPropSpec,
    pub minimum: f64,
    pub maximum: f64,
    pub default_value: f64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawInt32Spec {
    pub base: RawPropSpec,
    pub minimum: i32,
    pub maximum: i32,
    pub default_value: i32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawUInt32Spec {
    pub base: RawPropSpec,
    pub minimum: u32,
    pub maximum: u32,
    pub default_value: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawInt64Spec {
    pub base: RawPropSpec,
    pub minimum: i64,
    pub maximum: i64,
    pub default_value: i64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawStringSpec {
    pub base: RawPropSpec,
    /// Default value, NUL-terminated. Null when the property has no default.
    pub default_value: *const c_char,
}

// Boxed and object specs carry no fields beyond the base record.
