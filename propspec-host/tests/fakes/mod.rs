// In-process test doubles for the bridge's two external collaborators: a
// native type system with one registered spec of every kind, and a host
// runtime with a term arena, kind-tagged resources, and captured log output.
//
// Both are wired up as the same #[repr(C)] function-pointer tables the real
// collaborators would pass at module load.

use std::collections::HashMap;
use std::ffi::c_void;
use std::sync::{Mutex, Once, OnceLock};

use propspec_ffi::{
    EnvHandle, HostApiTable, HostLogApi, HostResourceApi, HostTermApi, KindTags, NativeApiTable,
    NativeTypeApi, RawBoolSpec, RawDoubleSpec, RawEnumEntry, RawEnumSpec, RawEnumTable,
    RawInt32Spec, RawInt64Spec, RawPropSpec, RawStringSpec, RawUInt32Spec, RawUInt64Spec,
    ResourceCallbacks, ResourceKind, SpecErrorCode, Term, TypeTag,
};

// ---------------------------------------------------------------------------
// Registered type tags
// ---------------------------------------------------------------------------

pub const TAG_ENUM: u64 = 1;
pub const TAG_BOOL: u64 = 2;
pub const TAG_UINT64: u64 = 3;
pub const TAG_DOUBLE: u64 = 4;
pub const TAG_INT32: u64 = 5;
pub const TAG_UINT32: u64 = 6;
pub const TAG_INT64: u64 = 7;
pub const TAG_STRING: u64 = 8;
pub const TAG_BOXED: u64 = 9;
pub const TAG_OBJECT: u64 = 10;
/// Registered but unclassified by the bridge.
pub const TAG_MYSTERY: u64 = 77;
/// Claims ancestry of every fundamental kind (for dispatch-priority tests).
pub const TAG_AMBIGUOUS: u64 = 99;

pub const VAL_ENUM: u64 = 21;
pub const VAL_BOOL: u64 = 22;
pub const VAL_UINT64: u64 = 23;
pub const VAL_DOUBLE: u64 = 24;
pub const VAL_INT32: u64 = 25;
pub const VAL_UINT32: u64 = 26;
pub const VAL_INT64: u64 = 27;
pub const VAL_STRING: u64 = 28;
pub const VAL_BOXED: u64 = 29;
pub const VAL_OBJECT: u64 = 30;
pub const VAL_MYSTERY: u64 = 31;

fn tag_name(tag: u64) -> Option<&'static str> {
    match tag {
        TAG_ENUM => Some("ParamEnum"),
        TAG_BOOL => Some("ParamBoolean"),
        TAG_UINT64 => Some("ParamUInt64"),
        TAG_DOUBLE => Some("ParamDouble"),
        TAG_INT32 => Some("ParamInt32"),
        TAG_UINT32 => Some("ParamUInt32"),
        TAG_INT64 => Some("ParamInt64"),
        TAG_STRING => Some("ParamString"),
        TAG_BOXED => Some("ParamBoxed"),
        TAG_OBJECT => Some("ParamObject"),
        TAG_MYSTERY => Some("ParamMystery"),
        TAG_AMBIGUOUS => Some("ParamAmbiguous"),
        VAL_ENUM => Some("Compass"),
        VAL_BOOL => Some("Boolean"),
        VAL_UINT64 => Some("UInt64"),
        VAL_DOUBLE => Some("Double"),
        VAL_INT32 => Some("Int32"),
        VAL_UINT32 => Some("UInt32"),
        VAL_INT64 => Some("Int64"),
        VAL_STRING => Some("String"),
        VAL_BOXED => Some("Blob"),
        VAL_OBJECT => Some("Object"),
        VAL_MYSTERY => Some("Mystery"),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Shared fake state
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
enum TestTerm {
    Atom(String),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Double(f64),
    Str(String),
    Tuple(Vec<Term>),
    List(Vec<Term>),
    Resource(usize),
    Badarg,
}

/// A fully resolved term tree, for structural assertions.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Atom(String),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Double(f64),
    Str(String),
    Tuple(Vec<Value>),
    List(Vec<Value>),
    Resource(usize),
    Badarg,
}

struct ResourceCell {
    kind: usize,
    /// Keeps the payload allocation alive; the bridge reads and writes it
    /// through the raw pointer handed out by `alloc`.
    _buf: Box<[u8]>,
    refs: u32,
}

struct FakeState {
    terms: Vec<TestTerm>,
    resources: HashMap<usize, ResourceCell>,
    kinds: Vec<String>,
    logs: Vec<(u8, String)>,
}

static STATE: OnceLock<Mutex<FakeState>> = OnceLock::new();

fn state() -> &'static Mutex<FakeState> {
    STATE.get_or_init(|| {
        Mutex::new(FakeState {
            terms: Vec::new(),
            resources: HashMap::new(),
            kinds: Vec::new(),
            logs: Vec::new(),
        })
    })
}

fn push(t: TestTerm) -> Term {
    let mut s = state().lock().unwrap();
    s.terms.push(t);
    Term(s.terms.len() as u64)
}

// ---------------------------------------------------------------------------
// Fake host runtime
// ---------------------------------------------------------------------------

extern "C" fn make_atom(_env: EnvHandle, name: *const u8, len: u32) -> Term {
    let bytes = unsafe { std::slice::from_raw_parts(name, len as usize) };
    push(TestTerm::Atom(String::from_utf8_lossy(bytes).into_owned()))
}

extern "C" fn make_int32(_env: EnvHandle, val: i32) -> Term {
    push(TestTerm::Int32(val))
}

extern "C" fn make_uint32(_env: EnvHandle, val: u32) -> Term {
    push(TestTerm::UInt32(val))
}

extern "C" fn make_int64(_env: EnvHandle, val: i64) -> Term {
    push(TestTerm::Int64(val))
}

extern "C" fn make_uint64(_env: EnvHandle, val: u64) -> Term {
    push(TestTerm::UInt64(val))
}

extern "C" fn make_double(_env: EnvHandle, val: f64) -> Term {
    push(TestTerm::Double(val))
}

extern "C" fn make_string(_env: EnvHandle, s: *const u8, len: u32) -> Term {
    let bytes = unsafe { std::slice::from_raw_parts(s, len as usize) };
    push(TestTerm::Str(String::from_utf8_lossy(bytes).into_owned()))
}

extern "C" fn make_tuple2(_env: EnvHandle, a: Term, b: Term) -> Term {
    push(TestTerm::Tuple(vec![a, b]))
}

extern "C" fn make_tuple3(_env: EnvHandle, a: Term, b: Term, c: Term) -> Term {
    push(TestTerm::Tuple(vec![a, b, c]))
}

extern "C" fn list_empty(_env: EnvHandle) -> Term {
    push(TestTerm::List(Vec::new()))
}

extern "C" fn list_prepend(_env: EnvHandle, head: Term, tail: Term) -> Term {
    let mut s = state().lock().unwrap();
    let mut items = match s.terms.get((tail.0 as usize) - 1) {
        Some(TestTerm::List(items)) => items.clone(),
        other => panic!("list_prepend on non-list term: {other:?}"),
    };
    items.insert(0, head);
    s.terms.push(TestTerm::List(items));
    Term(s.terms.len() as u64)
}

extern "C" fn make_badarg(_env: EnvHandle) -> Term {
    push(TestTerm::Badarg)
}

extern "C" fn open_kind(
    name: *const u8,
    name_len: u32,
    _callbacks: *const ResourceCallbacks,
) -> ResourceKind {
    let bytes = unsafe { std::slice::from_raw_parts(name, name_len as usize) };
    let mut s = state().lock().unwrap();
    s.kinds.push(String::from_utf8_lossy(bytes).into_owned());
    ResourceKind(s.kinds.len() as *mut c_void)
}

extern "C" fn alloc(kind: ResourceKind, size: u32) -> *mut c_void {
    let buf = vec![0u8; size as usize].into_boxed_slice();
    let addr = buf.as_ptr() as usize;
    state().lock().unwrap().resources.insert(
        addr,
        ResourceCell {
            kind: kind.0 as usize,
            _buf: buf,
            refs: 1,
        },
    );
    addr as *mut c_void
}

extern "C" fn wrap_resource(_env: EnvHandle, obj: *mut c_void) -> Term {
    let addr = obj as usize;
    {
        let mut s = state().lock().unwrap();
        s.resources
            .get_mut(&addr)
            .expect("wrap of unknown resource")
            .refs += 1;
    }
    push(TestTerm::Resource(addr))
}

extern "C" fn release(obj: *mut c_void) {
    let addr = obj as usize;
    let mut s = state().lock().unwrap();
    let cell = s
        .resources
        .get_mut(&addr)
        .expect("release of unknown resource");
    assert!(cell.refs > 0, "release below zero");
    cell.refs -= 1;
}

extern "C" fn get(_env: EnvHandle, term: Term, kind: ResourceKind, out: *mut *mut c_void) -> bool {
    let s = state().lock().unwrap();
    let idx = match (term.0 as usize).checked_sub(1) {
        Some(i) => i,
        None => return false,
    };
    let addr = match s.terms.get(idx) {
        Some(TestTerm::Resource(addr)) => *addr,
        _ => return false,
    };
    match s.resources.get(&addr) {
        Some(cell) if cell.kind == kind.0 as usize => {
            unsafe { *out = addr as *mut c_void };
            true
        }
        _ => false,
    }
}

extern "C" fn log(level: u8, msg: *const u8, len: u32) {
    let bytes = unsafe { std::slice::from_raw_parts(msg, len as usize) };
    state()
        .lock()
        .unwrap()
        .logs
        .push((level, String::from_utf8_lossy(bytes).into_owned()));
}

static TERM_API: HostTermApi = HostTermApi {
    make_atom,
    make_int32,
    make_uint32,
    make_int64,
    make_uint64,
    make_double,
    make_string,
    make_tuple2,
    make_tuple3,
    list_empty,
    list_prepend,
    make_badarg,
};

pub static RESOURCE_API: HostResourceApi = HostResourceApi {
    open_kind,
    alloc,
    wrap: wrap_resource,
    release,
    get,
};

static LOG_API: HostLogApi = HostLogApi { log };

pub static HOST_TABLE: HostApiTable = HostApiTable {
    version: 1,
    term: &TERM_API,
    resource: &RESOURCE_API,
    logging: &LOG_API,
};

// ---------------------------------------------------------------------------
// Fake native type system
// ---------------------------------------------------------------------------

extern "C" fn type_name(tag: TypeTag, buf: *mut u8, buf_len: u32, out_len: *mut u32) -> SpecErrorCode {
    let Some(name) = tag_name(tag.0) else {
        return SpecErrorCode::UnknownType;
    };
    let bytes = name.as_bytes();
    if bytes.len() > buf_len as usize {
        return SpecErrorCode::BufferTooSmall;
    }
    unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf, bytes.len());
        *out_len = bytes.len() as u32;
    }
    SpecErrorCode::Ok
}

extern "C" fn is_a(tag: TypeTag, ancestor: TypeTag) -> bool {
    tag == ancestor || tag.0 == TAG_AMBIGUOUS
}

static TYPE_API: NativeTypeApi = NativeTypeApi { type_name, is_a };

static KIND_TAGS: KindTags = KindTags {
    enumeration: TypeTag(TAG_ENUM),
    boolean: TypeTag(TAG_BOOL),
    uint64: TypeTag(TAG_UINT64),
    double: TypeTag(TAG_DOUBLE),
    int32: TypeTag(TAG_INT32),
    uint32: TypeTag(TAG_UINT32),
    int64: TypeTag(TAG_INT64),
    string: TypeTag(TAG_STRING),
    boxed: TypeTag(TAG_BOXED),
    object: TypeTag(TAG_OBJECT),
};

pub static NATIVE_TABLE: NativeApiTable = NativeApiTable {
    version: 1,
    types: &TYPE_API,
    kinds: &KIND_TAGS,
};

// ---------------------------------------------------------------------------
// Registered spec records
// ---------------------------------------------------------------------------

/// Addresses of one leaked spec record per kind. `usize` so the struct can
/// live in a OnceLock; convert with `PropSpecHandle(addr as *mut c_void)`.
pub struct World {
    pub enum_spec: usize,
    pub ambiguous_spec: usize,
    pub bool_true_spec: usize,
    pub bool_false_spec: usize,
    pub u64_spec: usize,
    pub double_spec: usize,
    pub double_inf_spec: usize,
    pub i32_spec: usize,
    pub u32_spec: usize,
    pub i64_spec: usize,
    pub string_spec: usize,
    pub string_absent_spec: usize,
    pub boxed_spec: usize,
    pub object_spec: usize,
    pub mystery_spec: usize,
}

fn leak<T>(v: T) -> usize {
    Box::into_raw(Box::new(v)) as usize
}

fn base(declared: u64, value: u64, name: &'static std::ffi::CStr) -> RawPropSpec {
    RawPropSpec {
        declared_type: TypeTag(declared),
        value_type: TypeTag(value),
        name: name.as_ptr(),
    }
}

fn build_world() -> World {
    let entries: &'static [RawEnumEntry; 4] = Box::leak(Box::new([
        RawEnumEntry { value: 0, name: c"north".as_ptr() },
        RawEnumEntry { value: 1, name: c"south".as_ptr() },
        RawEnumEntry { value: 2, name: c"east".as_ptr() },
        // Terminator slot: never reported by describe.
        RawEnumEntry { value: 3, name: c"table_end".as_ptr() },
    ]));
    let table: &'static RawEnumTable = Box::leak(Box::new(RawEnumTable {
        n_entries: 4,
        entries: entries.as_ptr(),
    }));

    World {
        enum_spec: leak(RawEnumSpec {
            base: base(TAG_ENUM, VAL_ENUM, c"direction"),
            table,
            default_value: 1,
        }),
        ambiguous_spec: leak(RawEnumSpec {
            base: base(TAG_AMBIGUOUS, VAL_ENUM, c"anything"),
            table,
            default_value: 0,
        }),
        bool_true_spec: leak(RawBoolSpec {
            base: base(TAG_BOOL, VAL_BOOL, c"enabled"),
            default_value: true,
        }),
        bool_false_spec: leak(RawBoolSpec {
            base: base(TAG_BOOL, VAL_BOOL, c"hidden"),
            default_value: false,
        }),
        u64_spec: leak(RawUInt64Spec {
            base: base(TAG_UINT64, VAL_UINT64, c"capacity"),
            minimum: 1,
            maximum: 9_000_000_000_000_000_000,
            default_value: 42,
        }),
        double_spec: leak(RawDoubleSpec {
            base: base(TAG_DOUBLE, VAL_DOUBLE, c"scale"),
            minimum: -1.5,
            maximum: 2.5,
            default_value: 0.25,
        }),
        double_inf_spec: leak(RawDoubleSpec {
            base: base(TAG_DOUBLE, VAL_DOUBLE, c"gain"),
            minimum: f64::NEG_INFINITY,
            maximum: f64::INFINITY,
            default_value: f64::INFINITY,
        }),
        i32_spec: leak(RawInt32Spec {
            base: base(TAG_INT32, VAL_INT32, c"offset"),
            minimum: -100,
            maximum: 100,
            default_value: 7,
        }),
        u32_spec: leak(RawUInt32Spec {
            base: base(TAG_UINT32, VAL_UINT32, c"stride"),
            minimum: 0,
            maximum: 4096,
            default_value: 64,
        }),
        i64_spec: leak(RawInt64Spec {
            base: base(TAG_INT64, VAL_INT64, c"epoch"),
            minimum: -5_000_000_000,
            maximum: 5_000_000_000,
            default_value: 0,
        }),
        string_spec: leak(RawStringSpec {
            base: base(TAG_STRING, VAL_STRING, c"label"),
            default_value: c"fallback".as_ptr(),
        }),
        string_absent_spec: leak(RawStringSpec {
            base: base(TAG_STRING, VAL_STRING, c"title"),
            default_value: std::ptr::null(),
        }),
        boxed_spec: leak(base(TAG_BOXED, VAL_BOXED, c"payload")),
        object_spec: leak(base(TAG_OBJECT, VAL_OBJECT, c"target")),
        mystery_spec: leak(base(TAG_MYSTERY, VAL_MYSTERY, c"wildcard")),
    }
}

// ---------------------------------------------------------------------------
// Test harness entry points
// ---------------------------------------------------------------------------

static WORLD: OnceLock<World> = OnceLock::new();
static INIT: Once = Once::new();

/// Initialize the bridge against the fakes (once per process) and return the
/// registered spec records.
pub fn setup() -> &'static World {
    INIT.call_once(|| {
        assert!(propspec_host::init(&HOST_TABLE, &NATIVE_TABLE));
        WORLD.set(build_world()).ok().expect("world already built");
    });
    WORLD.get().unwrap()
}

/// A dummy call environment; the fakes keep all state globally.
pub fn env() -> EnvHandle {
    EnvHandle(0x1000 as *mut c_void)
}

/// Deep-resolve a term into a structural `Value` tree.
pub fn resolve(term: Term) -> Value {
    let s = state().lock().unwrap();
    resolve_locked(&s, term)
}

fn resolve_locked(s: &FakeState, term: Term) -> Value {
    match s
        .terms
        .get((term.0 as usize) - 1)
        .expect("unknown term")
    {
        TestTerm::Atom(a) => Value::Atom(a.clone()),
        TestTerm::Int32(v) => Value::Int32(*v),
        TestTerm::UInt32(v) => Value::UInt32(*v),
        TestTerm::Int64(v) => Value::Int64(*v),
        TestTerm::UInt64(v) => Value::UInt64(*v),
        TestTerm::Double(v) => Value::Double(*v),
        TestTerm::Str(v) => Value::Str(v.clone()),
        TestTerm::Tuple(items) => {
            Value::Tuple(items.iter().map(|t| resolve_locked(s, *t)).collect())
        }
        TestTerm::List(items) => {
            Value::List(items.iter().map(|t| resolve_locked(s, *t)).collect())
        }
        TestTerm::Resource(addr) => Value::Resource(*addr),
        TestTerm::Badarg => Value::Badarg,
    }
}

pub fn logs() -> Vec<(u8, String)> {
    state().lock().unwrap().logs.clone()
}

pub fn clear_logs() {
    state().lock().unwrap().logs.clear();
}

static LOG_GUARD: Mutex<()> = Mutex::new(());

/// Serializes tests that clear and then assert on the shared log buffer.
/// Survives poisoning so one failed test does not cascade.
pub fn log_guard() -> std::sync::MutexGuard<'static, ()> {
    LOG_GUARD.lock().unwrap_or_else(|e| e.into_inner())
}

/// Current host-side reference count of a wrapped resource term.
pub fn resource_refs(term: Term) -> u32 {
    let s = state().lock().unwrap();
    let Some(TestTerm::Resource(addr)) = s.terms.get((term.0 as usize) - 1) else {
        panic!("not a resource term");
    };
    s.resources[addr].refs
}

pub fn int_term(v: i32) -> Term {
    push(TestTerm::Int32(v))
}

pub fn atom_term(name: &str) -> Term {
    push(TestTerm::Atom(name.into()))
}

/// A resource term of a kind other than the bridge's registered one.
pub fn foreign_resource_term() -> Term {
    let name = b"other_kind";
    let kind = unsafe {
        (RESOURCE_API.open_kind)(
            name.as_ptr(),
            name.len() as u32,
            &propspec_host::callbacks::CALLBACKS,
        )
    };
    let obj = unsafe { (RESOURCE_API.alloc)(kind, 8) };
    let term = unsafe { (RESOURCE_API.wrap)(env(), obj) };
    unsafe { (RESOURCE_API.release)(obj) };
    term
}
