//! RFC 4122 Universally Unique IDentifiers: time-based (version 1), name-based (versions 3 and
//! 5), and random (version 4)
//!
//! ```rust
//! use genuuid::{uuid4, uuid5, DNS};
//!
//! let uuid = uuid4()?;
//! println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuid5(&DNS, "python.org");
//! assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
//! # Ok::<(), genuuid::Error>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! Every UUID is a 16-byte big-endian value with the following layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |       time_high       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|  clock_seq_hi |  clock_seq_low  |         node (0-1)        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         node (2-5)                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 4-bit `ver` field holds the version number: `0001`, `0011`, `0100` or `0101`.
//! - The 2-bit `var` field is set at `10`.
//! - In a UUIDv1, `time_low`, `time_mid` and `time_high` carry a 60-bit count of
//!   100-nanosecond ticks, the 14-bit clock sequence is random, and `node` is the hardware
//!   address of a network interface.
//! - In a UUIDv3 or UUIDv5, the remaining 122 bits are the leading bits of the MD5 or SHA-1
//!   digest of the namespace UUID followed by the name.
//! - In a UUIDv4, the remaining 122 bits are filled with a cryptographically strong random
//!   number.
//!
//! Generators overwrite the version and variant bits after any hash or random fill, so every
//! generated UUID carries exactly one version and the `10` variant.
//!
//! # UUIDv1 timestamps
//!
//! [`uuid1`] counts ticks from the Unix epoch rather than from the Gregorian epoch (1582-10-15)
//! that RFC 4122 specifies. Build a [`V1Generator`] with [`Epoch::Gregorian`] for RFC-exact
//! timestamps.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `cli`: builds the `genuuid` command-line tool.
//!
//! Optional features:
//!
//! - `serde`: enables serialization/deserialization of [`Uuid`] via serde.
//! - `uuid`: enables conversion from/to the `Uuid` type of the uuid crate.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::Error;

mod id;
pub use id::{ParseError, Uuid, Variant};

pub mod namespace;
pub use namespace::{Namespace, DN, DNS, OID, URL};

mod name;
pub use name::{uuid3, uuid5};

mod v4;
pub use v4::{uuid4, uuid4_with};

pub mod generator;
pub use generator::{Epoch, V1Generator};

pub mod node;

mod global_gen;
pub use global_gen::{nil, uuid1};
