//! UUIDv4-related functionality

use crate::generator::{with_rand08::Adapter, RandSource};
use crate::{Error, Uuid};
use rand::rngs::OsRng;

/// Generates a UUIDv4 object from the operating system random source.
///
/// # Errors
///
/// Returns [`Error::EntropySourceUnavailable`] if the random source cannot be read.
///
/// # Examples
///
/// ```rust
/// let uuid = genuuid::uuid4()?;
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// assert_eq!(uuid.version(), 4);
/// # Ok::<(), genuuid::Error>(())
/// ```
pub fn uuid4() -> Result<Uuid, Error> {
    uuid4_with(&mut Adapter(OsRng))
}

/// Generates a UUIDv4 object from the random source passed.
pub fn uuid4_with<R: RandSource + ?Sized>(rand_source: &mut R) -> Result<Uuid, Error> {
    let mut bytes = [0u8; 16];
    rand_source.try_fill_bytes(&mut bytes)?;
    Ok(Uuid::stamped(bytes, 4))
}
