use thiserror::Error;

/// Errors returned by the UUID constructors.
#[derive(Debug, Error)]
pub enum Error {
    /// The operating system random source could not be read.
    #[error("entropy source unavailable: {0}")]
    EntropySourceUnavailable(#[source] rand::Error),

    /// No usable non-loopback network interface was found, or the interfaces could not be
    /// enumerated.
    #[error("network interface lookup failed")]
    InterfaceLookupFailed(#[source] Option<mac_address::MacAddressError>),

    /// Fewer than 16 bytes were supplied to the raw constructor.
    #[error("truncated input: expected 16 bytes, got {0}")]
    TruncatedInput(usize),

    #[error("unknown namespace: {0:?}")]
    UnknownNamespace(String),
}
