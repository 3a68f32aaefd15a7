// Describe: the composite projection of a prop-spec record into a
// (declared-kind-name, value-kind-name, detail) descriptor.
//
// Kind classification is a fixed-priority predicate chain. The native system
// exposes no polymorphic dispatch, and a tag could in principle satisfy more
// than one predicate, so the order must not change: enumeration, boolean,
// unsigned-64, double, signed-32, unsigned-32, signed-64, string, boxed,
// object, unknown.

use std::ffi::CStr;

use propspec_ffi::{
    RawBoolSpec, RawDoubleSpec, RawEnumSpec, RawInt32Spec, RawInt64Spec, RawStringSpec,
    RawUInt32Spec, RawUInt64Spec,
};

use crate::api::native;
use crate::error::{BridgeError, BridgeResult};
use crate::logging::LOG_DEBUG;
use crate::spec_ref::PropSpecRef;

/// One reportable slot of an enum value table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumEntry {
    pub name: String,
    pub value: i32,
}

/// Kind-specific constraint/default payload of a descriptor. A closed set:
/// boxed, object, and unclassified kinds all collapse to `None`.
#[derive(Clone, Debug, PartialEq)]
pub enum Detail {
    Enumeration {
        entries: Vec<EnumEntry>,
        default_value: i32,
    },
    Boolean(bool),
    UInt64 { min: u64, max: u64, default: u64 },
    Double { min: f64, max: f64, default: f64 },
    Int32 { min: i32, max: i32, default: i32 },
    UInt32 { min: u32, max: u32, default: u32 },
    Int64 { min: i64, max: i64, default: i64 },
    Text(String),
    None,
}

/// The full projection of one prop-spec record. Computed on demand, never
/// cached.
#[derive(Clone, Debug, PartialEq)]
pub struct Descriptor {
    pub declared_kind_name: String,
    pub value_kind_name: String,
    pub detail: Detail,
}

/// Replace infinities with the bounds the native double type can report:
/// `+inf` becomes the largest finite double, `-inf` becomes the type's
/// defined minimum constant (the smallest positive normal value, NOT the
/// negated maximum). Downstream callers depend on this exact substitution.
pub fn clamp_double(value: f64) -> f64 {
    if value == f64::INFINITY {
        f64::MAX
    } else if value == f64::NEG_INFINITY {
        f64::MIN_POSITIVE
    } else {
        value
    }
}

/// Project a resolved prop-spec into its descriptor.
pub fn describe(spec: PropSpecRef) -> BridgeResult<Descriptor> {
    let declared_kind_name = spec.declared_kind_name()?;
    let value_kind_name = spec.value_kind_name()?;
    let detail = detail_of(spec)?;
    Ok(Descriptor {
        declared_kind_name,
        value_kind_name,
        detail,
    })
}

fn detail_of(spec: PropSpecRef) -> BridgeResult<Detail> {
    // SAFETY: the kinds pointer is written by the native system before load
    // and read-only after.
    let kinds = unsafe { &*native().kinds };
    let p = spec.raw().0;

    // SAFETY throughout: once the kind predicate holds, the record behind the
    // handle is laid out as the matching kind record.
    if spec.is(kinds.enumeration) {
        let rec = unsafe { &*(p as *const RawEnumSpec) };
        let table = unsafe { &*rec.table };
        let mut entries = Vec::new();
        // The final table slot is a terminator entry and is never reported.
        for i in 0..table.n_entries.saturating_sub(1) {
            let entry = unsafe { &*table.entries.add(i as usize) };
            let name = unsafe { CStr::from_ptr(entry.name) }
                .to_str()
                .map_err(|_| BridgeError::Internal("enum entry name is not valid UTF-8".into()))?
                .to_owned();
            entries.push(EnumEntry {
                name,
                value: entry.value,
            });
        }
        Ok(Detail::Enumeration {
            entries,
            default_value: rec.default_value,
        })
    } else if spec.is(kinds.boolean) {
        let rec = unsafe { &*(p as *const RawBoolSpec) };
        Ok(Detail::Boolean(rec.default_value))
    } else if spec.is(kinds.uint64) {
        let rec = unsafe { &*(p as *const RawUInt64Spec) };
        Ok(Detail::UInt64 {
            min: rec.minimum,
            max: rec.maximum,
            default: rec.default_value,
        })
    } else if spec.is(kinds.double) {
        let rec = unsafe { &*(p as *const RawDoubleSpec) };
        Ok(Detail::Double {
            min: clamp_double(rec.minimum),
            max: clamp_double(rec.maximum),
            default: clamp_double(rec.default_value),
        })
    } else if spec.is(kinds.int32) {
        let rec = unsafe { &*(p as *const RawInt32Spec) };
        Ok(Detail::Int32 {
            min: rec.minimum,
            max: rec.maximum,
            default: rec.default_value,
        })
    } else if spec.is(kinds.uint32) {
        let rec = unsafe { &*(p as *const RawUInt32Spec) };
        Ok(Detail::UInt32 {
            min: rec.minimum,
            max: rec.maximum,
            default: rec.default_value,
        })
    } else if spec.is(kinds.int64) {
        let rec = unsafe { &*(p as *const RawInt64Spec) };
        Ok(Detail::Int64 {
            min: rec.minimum,
            max: rec.maximum,
            default: rec.default_value,
        })
    } else if spec.is(kinds.string) {
        let rec = unsafe { &*(p as *const RawStringSpec) };
        if rec.default_value.is_null() {
            // An absent native default is reported as the empty string,
            // never as a none marker.
            Ok(Detail::Text(String::new()))
        } else {
            let s = unsafe { CStr::from_ptr(rec.default_value) }
                .to_str()
                .map_err(|_| BridgeError::Internal("string default is not valid UTF-8".into()))?
                .to_owned();
            Ok(Detail::Text(s))
        }
    } else if spec.is(kinds.boxed) {
        Ok(Detail::None)
    } else if spec.is(kinds.object) {
        Ok(Detail::None)
    } else {
        // Unclassified kinds degrade to the none marker; not an error.
        crate::plog!(
            LOG_DEBUG,
            "unclassified prop-spec kind {:?}",
            spec.declared_kind()
        );
        Ok(Detail::None)
    }
}
