// The exported call surface: five unary accessors over prop-spec handles,
// plus the describe marshaller used by export-style call sites that embed
// full property descriptions in larger results.
//
// Every exported operation shares one contract: exactly one argument (checked
// before resolution), which must resolve through the handle bridge. Failures
// are logged and surfaced as the host's bad-argument value; no partial result
// is ever built.

use propspec_ffi::{EnvHandle, Term};
use propspec_runtime::{
    describe, ffi_boundary, BridgeError, BridgeResult, Descriptor, Detail, OpExport, PropSpecRef,
    LOG_WARNING,
};

use crate::resource;
use crate::terms;

/// Resolve the single handle argument shared by every exported operation.
fn unary_arg(env: EnvHandle, argc: i32, argv: *const Term) -> BridgeResult<PropSpecRef> {
    if argc != 1 {
        return Err(BridgeError::BadArity {
            got: argc.max(0) as u32,
        });
    }
    // SAFETY: the host runtime passes an array of `argc` terms.
    let term = unsafe { *argv };
    resource::unwrap(env, term)
}

fn run_op(
    env: EnvHandle,
    argc: i32,
    argv: *const Term,
    name: &str,
    f: impl FnOnce(PropSpecRef) -> BridgeResult<Term>,
) -> Term {
    match unary_arg(env, argc, argv).and_then(f) {
        Ok(term) => term,
        Err(e) => {
            propspec_runtime::plog!(LOG_WARNING, "{name}: {e}");
            terms::badarg(env)
        }
    }
}

extern "C" fn declared_kind(env: EnvHandle, argc: i32, argv: *const Term) -> Term {
    let bad = terms::badarg(env);
    ffi_boundary(bad, || {
        run_op(env, argc, argv, "prop_spec_declared_kind", |spec| {
            Ok(terms::uint64(env, spec.declared_kind().0))
        })
    })
}

extern "C" fn value_kind(env: EnvHandle, argc: i32, argv: *const Term) -> Term {
    let bad = terms::badarg(env);
    ffi_boundary(bad, || {
        run_op(env, argc, argv, "prop_spec_value_kind", |spec| {
            Ok(terms::uint64(env, spec.value_kind().0))
        })
    })
}

extern "C" fn name(env: EnvHandle, argc: i32, argv: *const Term) -> Term {
    let bad = terms::badarg(env);
    ffi_boundary(bad, || {
        run_op(env, argc, argv, "prop_spec_name", |spec| {
            spec.name().map(|n| terms::string(env, &n))
        })
    })
}

extern "C" fn declared_kind_name(env: EnvHandle, argc: i32, argv: *const Term) -> Term {
    let bad = terms::badarg(env);
    ffi_boundary(bad, || {
        run_op(env, argc, argv, "prop_spec_declared_kind_name", |spec| {
            spec.declared_kind_name().map(|n| terms::string(env, &n))
        })
    })
}

extern "C" fn value_kind_name(env: EnvHandle, argc: i32, argv: *const Term) -> Term {
    let bad = terms::badarg(env);
    ffi_boundary(bad, || {
        run_op(env, argc, argv, "prop_spec_value_kind_name", |spec| {
            spec.value_kind_name().map(|n| terms::string(env, &n))
        })
    })
}

inventory::submit! {
    OpExport { name: "prop_spec_declared_kind", arity: 1, call: declared_kind }
}
inventory::submit! {
    OpExport { name: "prop_spec_value_kind", arity: 1, call: value_kind }
}
inventory::submit! {
    OpExport { name: "prop_spec_name", arity: 1, call: name }
}
inventory::submit! {
    OpExport { name: "prop_spec_declared_kind_name", arity: 1, call: declared_kind_name }
}
inventory::submit! {
    OpExport { name: "prop_spec_value_kind_name", arity: 1, call: value_kind_name }
}

/// Build the full `(declared-kind-name, value-kind-name, detail)` projection
/// of a resolved prop-spec as a host term.
///
/// Not exported on its own; export call sites that describe whole operations
/// call this once per property argument.
pub fn describe_term(env: EnvHandle, spec: PropSpecRef) -> BridgeResult<Term> {
    let Descriptor {
        declared_kind_name,
        value_kind_name,
        detail,
    } = describe(spec)?;
    let detail = detail_term(env, &detail);
    Ok(terms::tuple3(
        env,
        terms::string(env, &declared_kind_name),
        terms::string(env, &value_kind_name),
        detail,
    ))
}

fn detail_term(env: EnvHandle, detail: &Detail) -> Term {
    match detail {
        Detail::Enumeration {
            entries,
            default_value,
        } => {
            let pairs: Vec<Term> = entries
                .iter()
                .map(|e| terms::tuple2(env, terms::atom(env, &e.name), terms::int32(env, e.value)))
                .collect();
            terms::tuple2(
                env,
                terms::list(env, &pairs),
                terms::int32(env, *default_value),
            )
        }
        Detail::Boolean(v) => terms::atom(env, if *v { "true" } else { "false" }),
        Detail::UInt64 { min, max, default } => terms::tuple3(
            env,
            terms::uint64(env, *min),
            terms::uint64(env, *max),
            terms::uint64(env, *default),
        ),
        Detail::Double { min, max, default } => terms::tuple3(
            env,
            terms::double(env, *min),
            terms::double(env, *max),
            terms::double(env, *default),
        ),
        Detail::Int32 { min, max, default } => terms::tuple3(
            env,
            terms::int32(env, *min),
            terms::int32(env, *max),
            terms::int32(env, *default),
        ),
        Detail::UInt32 { min, max, default } => terms::tuple3(
            env,
            terms::uint32(env, *min),
            terms::uint32(env, *max),
            terms::uint32(env, *default),
        ),
        Detail::Int64 { min, max, default } => terms::tuple3(
            env,
            terms::int64(env, *min),
            terms::int64(env, *max),
            terms::int64(env, *default),
        ),
        Detail::Text(s) => terms::string(env, s),
        Detail::None => terms::atom(env, "nil"),
    }
}
