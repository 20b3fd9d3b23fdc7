//! Integration with `rand` (v0.8) crate.

use super::{RandSource, V1Generator};
use crate::Error;
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0
            .try_fill_bytes(dest)
            .map_err(Error::EntropySourceUnavailable)
    }
}

impl<T: RngCore> V1Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    pub const fn with_rand08(rng: T, node: [u8; 6]) -> Self {
        Self::new(Adapter(rng), node)
    }
}

#[cfg(test)]
mod tests {
    use super::Adapter;
    use crate::generator::RandSource;

    /// Fills buffers from the wrapped generator
    #[test]
    fn fills_buffers_from_the_wrapped_generator() {
        let mut source = Adapter(rand::rngs::OsRng);
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        source.try_fill_bytes(&mut a).unwrap();
        source.try_fill_bytes(&mut b).unwrap();
        assert_ne!(a, b);
    }
}
