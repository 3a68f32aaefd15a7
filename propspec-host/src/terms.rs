// Safe term-construction helpers over the host runtime's term table.
// Every helper is a thin wrapper; terms are scoped to `env` and handed
// straight back to the host.

use propspec_ffi::{EnvHandle, Term};
use propspec_runtime::host;

pub fn atom(env: EnvHandle, name: &str) -> Term {
    unsafe { ((*host().term).make_atom)(env, name.as_ptr(), name.len() as u32) }
}

pub fn int32(env: EnvHandle, val: i32) -> Term {
    unsafe { ((*host().term).make_int32)(env, val) }
}

pub fn uint32(env: EnvHandle, val: u32) -> Term {
    unsafe { ((*host().term).make_uint32)(env, val) }
}

pub fn int64(env: EnvHandle, val: i64) -> Term {
    unsafe { ((*host().term).make_int64)(env, val) }
}

pub fn uint64(env: EnvHandle, val: u64) -> Term {
    unsafe { ((*host().term).make_uint64)(env, val) }
}

pub fn double(env: EnvHandle, val: f64) -> Term {
    unsafe { ((*host().term).make_double)(env, val) }
}

pub fn string(env: EnvHandle, s: &str) -> Term {
    unsafe { ((*host().term).make_string)(env, s.as_ptr(), s.len() as u32) }
}

pub fn tuple2(env: EnvHandle, a: Term, b: Term) -> Term {
    unsafe { ((*host().term).make_tuple2)(env, a, b) }
}

pub fn tuple3(env: EnvHandle, a: Term, b: Term, c: Term) -> Term {
    unsafe { ((*host().term).make_tuple3)(env, a, b, c) }
}

/// The host's bad-argument value; returning it fails the call on the host
/// side without raising here.
pub fn badarg(env: EnvHandle) -> Term {
    unsafe { ((*host().term).make_badarg)(env) }
}

/// Build a list term preserving slice order. The host API builds lists by
/// prepending, so the items are folded in reverse.
pub fn list(env: EnvHandle, items: &[Term]) -> Term {
    let mut tail = unsafe { ((*host().term).list_empty)(env) };
    for item in items.iter().rev() {
        tail = unsafe { ((*host().term).list_prepend)(env, *item, tail) };
    }
    tail
}
