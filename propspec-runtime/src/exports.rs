// Export registry: link-time collected table of host-callable operations.
// Operation definitions live next to their implementations (propspec-host)
// and submit themselves here; the bootstrap layer reads the collected table
// when handing the module's call surface to the host runtime.

use propspec_ffi::{EnvHandle, Term};

/// Calling convention shared by every exported operation: the host runtime
/// passes the call environment, the argument count, and the argument array.
pub type OpFn = extern "C" fn(env: EnvHandle, argc: i32, argv: *const Term) -> Term;

/// Submitted once per exported operation via `inventory::submit!`.
pub struct OpExport {
    pub name: &'static str,
    pub arity: u32,
    pub call: OpFn,
}

inventory::collect!(OpExport);

/// Iterate every operation registered in this binary.
pub fn exported_ops() -> impl Iterator<Item = &'static OpExport> {
    inventory::iter::<OpExport>.into_iter()
}
