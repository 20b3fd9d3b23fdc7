//! Name-based UUIDv3 and UUIDv5

use md5::{Digest, Md5};
use sha1::Sha1;

use crate::Uuid;

/// Generates a UUIDv3 object from the MD5 digest of `ns` followed by `name`.
///
/// The result depends only on the arguments, so the same pair always yields the same UUID.
///
/// # Examples
///
/// ```rust
/// use genuuid::{uuid3, DNS};
///
/// let uuid = uuid3(&DNS, "python.org");
/// assert_eq!(uuid.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
/// ```
pub fn uuid3(ns: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    digest_to_uuid::<Md5>(ns, name.as_ref(), 3)
}

/// Generates a UUIDv5 object from the SHA-1 digest of `ns` followed by `name`.
///
/// # Examples
///
/// ```rust
/// use genuuid::{uuid5, DNS};
///
/// let uuid = uuid5(&DNS, "python.org");
/// assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// ```
pub fn uuid5(ns: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    digest_to_uuid::<Sha1>(ns, name.as_ref(), 5)
}

fn digest_to_uuid<D: Digest>(ns: &Uuid, name: &[u8], version: u8) -> Uuid {
    let mut hasher = D::new();
    hasher.update(ns.as_bytes());
    hasher.update(name);
    let sum = hasher.finalize();

    // SHA-1 yields 20 bytes; keep the leading 16
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&sum[..16]);
    Uuid::stamped(bytes, version)
}
