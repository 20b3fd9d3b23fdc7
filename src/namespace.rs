//! Well-known namespace UUIDs for name-based generation

use std::{fmt, str};

use crate::{Error, Uuid};

/// Name string is a fully-qualified domain name (6ba7b810-9dad-11d1-80b4-00c04fd430c8).
pub const DNS: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Name string is a URL (6ba7b811-9dad-11d1-80b4-00c04fd430c8).
pub const URL: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Name string is an ISO OID (6ba7b812-9dad-11d1-80b4-00c04fd430c8).
pub const OID: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Name string is an X.500 DN in DER or a text output format
/// (6ba7b814-9dad-11d1-80b4-00c04fd430c8).
pub const DN: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Selects one of the predefined namespaces by name.
///
/// # Examples
///
/// ```rust
/// use genuuid::Namespace;
///
/// let ns: Namespace = "URL".parse()?;
/// assert_eq!(ns.uuid(), genuuid::URL);
/// # Ok::<(), genuuid::Error>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Namespace {
    Dns,
    Url,
    Oid,
    Dn,
}

impl Namespace {
    /// Returns the namespace UUID.
    pub const fn uuid(self) -> Uuid {
        match self {
            Self::Dns => DNS,
            Self::Url => URL,
            Self::Oid => OID,
            Self::Dn => DN,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Dns => "dns",
            Self::Url => "url",
            Self::Oid => "oid",
            Self::Dn => "dn",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl str::FromStr for Namespace {
    type Err = Error;

    /// Matches `dns`, `url`, `oid` or `dn`, ignoring ASCII case.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        [Self::Dns, Self::Url, Self::Oid, Self::Dn]
            .into_iter()
            .find(|ns| ns.name().eq_ignore_ascii_case(src))
            .ok_or_else(|| Error::UnknownNamespace(src.to_owned()))
    }
}

impl From<Namespace> for Uuid {
    fn from(src: Namespace) -> Self {
        src.uuid()
    }
}

#[cfg(test)]
mod tests {
    use super::{Namespace, DN, DNS, OID, URL};
    use crate::Uuid;

    /// Matches the textual representations in RFC 4122 Appendix C
    #[test]
    fn matches_the_textual_representations_in_rfc_4122_appendix_c() {
        let cases = [
            (DNS, "6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
            (URL, "6ba7b811-9dad-11d1-80b4-00c04fd430c8"),
            (OID, "6ba7b812-9dad-11d1-80b4-00c04fd430c8"),
            (DN, "6ba7b814-9dad-11d1-80b4-00c04fd430c8"),
        ];

        for (ns, text) in cases {
            assert_eq!(ns.to_string(), text);
            assert_eq!(text.parse::<Uuid>(), Ok(ns));
            assert_eq!(ns.version(), 1);
        }
    }

    /// Parses namespace names ignoring case
    #[test]
    fn parses_namespace_names_ignoring_case() {
        let cases = [
            ("dns", DNS),
            ("DNS", DNS),
            ("Url", URL),
            ("oId", OID),
            ("dn", DN),
        ];

        for (name, ns) in cases {
            assert_eq!(name.parse::<Namespace>().unwrap().uuid(), ns);
        }

        for ns in [Namespace::Dns, Namespace::Url, Namespace::Oid, Namespace::Dn] {
            assert_eq!(ns.to_string().parse::<Namespace>().unwrap(), ns);
        }
    }

    /// Rejects unknown namespace names
    #[test]
    fn rejects_unknown_namespace_names() {
        for name in ["", "x500", "dns ", "urls", "d"] {
            assert!(matches!(
                name.parse::<Namespace>(),
                Err(crate::Error::UnknownNamespace(ref s)) if s == name
            ));
        }
    }
}
