//! Default generator and entry point functions.

use std::sync;

use crate::generator::{with_rand08::Adapter, V1Generator};
use crate::{node, Error, Uuid};
use rand::rngs::OsRng;

type GlobalGen = V1Generator<Adapter<OsRng>>;

/// Runs `f` with the lock of process-wide global generator held, creating the generator if none
/// exists.
///
/// The generator is created on first use, which is when the node identifier is looked up. A
/// failed lookup leaves the slot empty so that the next call looks up again.
fn with_global_gen<T>(f: impl FnOnce(&mut GlobalGen) -> Result<T, Error>) -> Result<T, Error> {
    static G: sync::Mutex<Option<GlobalGen>> = sync::Mutex::new(None);

    // the generator holds no invariant across statements, so a poisoned lock is still usable
    let mut guard = G.lock().unwrap_or_else(sync::PoisonError::into_inner);
    let g = match &mut *guard {
        Some(g) => g,
        slot @ None => slot.insert(V1Generator::with_rand08(OsRng, node::lookup_node()?)),
    };
    f(g)
}

/// Returns the Nil UUID (00000000-0000-0000-0000-000000000000).
pub const fn nil() -> Uuid {
    Uuid::NIL
}

/// Generates a UUIDv1 object.
///
/// This function employs a global generator guarded by a mutex. The timestamp is the wall-clock
/// time in 100-nanosecond ticks since the Unix epoch and never decreases within the process. The
/// clock sequence is drawn from the operating system random source on every call, and the node is
/// the hardware address of the first non-loopback network interface.
///
/// # Errors
///
/// Returns [`Error::InterfaceLookupFailed`] if no usable network interface is found and
/// [`Error::EntropySourceUnavailable`] if the random source cannot be read.
///
/// # Examples
///
/// ```rust
/// match genuuid::uuid1() {
///     Ok(uuid) => println!("{}", uuid), // e.g., "0b9f0ea6-8d5c-11ef-a1f4-0242ac120002"
///     Err(e) => eprintln!("{}", e),
/// }
/// ```
pub fn uuid1() -> Result<Uuid, Error> {
    with_global_gen(|g| g.generate())
}
