//! UUIDv1 generator and related types.

use crate::{Error, Uuid};

pub mod with_rand08;

/// Offset between the Gregorian epoch (1582-10-15) and the Unix epoch in 100-nanosecond ticks.
const GREGORIAN_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

const MAX_TIMESTAMP: u64 = (1 << 60) - 1;

/// Default amount of clock rollback, in 100-nanosecond ticks, that the generator absorbs by
/// reusing the previous timestamp (ten seconds).
pub const DEFAULT_ROLLBACK_ALLOWANCE: u64 = 100_000_000;

/// A trait that defines the random byte source interface for UUID generators.
pub trait RandSource {
    /// Fills `dest` with random data, or reports why the source could not be read.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

/// A trait that defines the system clock interface for [`V1Generator`].
pub trait TimeSource {
    /// Returns the current Unix time in 100-nanosecond ticks.
    fn unix_ts_100ns(&mut self) -> u64;
}

/// The default [`TimeSource`] that reads [`std::time::SystemTime`].
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn unix_ts_100ns(&mut self) -> u64 {
        use std::time;
        // a clock set before 1970 counts as the epoch itself
        let elapsed = time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .unwrap_or_default();
        (elapsed.as_nanos() / 100) as u64
    }
}

/// The origin the UUIDv1 timestamp field counts from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Epoch {
    /// 1970-01-01, i.e. wall-clock nanoseconds divided by 100.
    #[default]
    Unix,

    /// 1582-10-15, the origin RFC 4122 prescribes.
    Gregorian,
}

impl Epoch {
    const fn offset(self) -> u64 {
        match self {
            Self::Unix => 0,
            Self::Gregorian => GREGORIAN_OFFSET,
        }
    }
}

/// Represents a UUIDv1 generator that keeps the last timestamp issued and guarantees that
/// timestamps never decrease.
///
/// When the clock has not advanced since the previous call, or has moved back by less than the
/// rollback allowance, the generator bumps the previous timestamp by one tick. A larger rollback
/// resets the generator to the clock. Each call draws a fresh 14-bit clock sequence from the
/// random source.
///
/// A generator is not synchronized by itself. Wrap it in a [`Mutex`](std::sync::Mutex) to share
/// it across threads, as [`uuid1`](crate::uuid1) does.
///
/// # Examples
///
/// ```rust
/// use genuuid::V1Generator;
///
/// let mut g = V1Generator::with_rand08(rand::rngs::OsRng, [0x02, 0, 0, 0, 0, 0x01]);
/// let uuid = g.generate()?;
/// assert_eq!(uuid.version(), 1);
/// assert_eq!(uuid.node(), [0x02, 0, 0, 0, 0, 0x01]);
/// # Ok::<(), genuuid::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct V1Generator<R, T = StdSystemTime> {
    timestamp: u64,
    node: [u8; 6],
    epoch: Epoch,

    /// The random number generator used by the generator.
    rand_source: R,

    /// The system clock used by the generator.
    time_source: T,
}

impl<R: RandSource> V1Generator<R> {
    /// Creates a generator instance that stamps `node` into every UUID and reads the system
    /// clock.
    pub const fn new(rand_source: R, node: [u8; 6]) -> Self {
        Self::with_rand_and_time_sources(rand_source, StdSystemTime, node)
    }
}

impl<R: RandSource, T: TimeSource> V1Generator<R, T> {
    /// Creates a generator instance with specified random number and time sources.
    pub const fn with_rand_and_time_sources(
        rand_source: R,
        time_source: T,
        node: [u8; 6],
    ) -> Self {
        Self {
            timestamp: 0,
            node,
            epoch: Epoch::Unix,
            rand_source,
            time_source,
        }
    }

    /// Switches the timestamp origin. Defaults to [`Epoch::Unix`].
    pub fn with_epoch(mut self, epoch: Epoch) -> Self {
        self.epoch = epoch;
        self
    }

    /// Returns the node identifier stamped into generated UUIDs.
    pub const fn node(&self) -> [u8; 6] {
        self.node
    }

    /// Generates a new UUIDv1 object from the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropySourceUnavailable`] if the clock sequence cannot be drawn.
    pub fn generate(&mut self) -> Result<Uuid, Error> {
        let ticks = self.time_source.unix_ts_100ns();
        self.generate_core(ticks, DEFAULT_ROLLBACK_ALLOWANCE)
    }

    /// Generates a new UUIDv1 object from `unix_ts_100ns`, the Unix time in 100-nanosecond
    /// ticks.
    ///
    /// The `rollback_allowance` parameter specifies the amount of rollback, in the same unit,
    /// that is absorbed by reusing the previous timestamp. A suggested value is
    /// [`DEFAULT_ROLLBACK_ALLOWANCE`].
    ///
    /// The generator state is left untouched when an error is returned.
    pub fn generate_core(
        &mut self,
        unix_ts_100ns: u64,
        rollback_allowance: u64,
    ) -> Result<Uuid, Error> {
        let mut seq = [0u8; 2];
        self.rand_source.try_fill_bytes(&mut seq)?;

        let ts = unix_ts_100ns.saturating_add(self.epoch.offset()) & MAX_TIMESTAMP;
        if ts > self.timestamp {
            self.timestamp = ts;
        } else if ts.saturating_add(rollback_allowance) >= self.timestamp {
            // go on with previous timestamp if new one is not much smaller
            self.timestamp = (self.timestamp + 1) & MAX_TIMESTAMP;
            log::trace!("clock did not advance; bumped timestamp to {}", self.timestamp);
        } else {
            log::warn!(
                "clock moved back by {} ticks; resetting v1 generator",
                self.timestamp - ts
            );
            self.timestamp = ts;
        }

        Ok(Uuid::from_fields_v1(
            self.timestamp,
            u16::from_be_bytes(seq) & 0x3fff,
            self.node,
        ))
    }
}

/// Supports operations as an iterator that produces a new UUIDv1 object for each call of
/// `next()` until the random source fails.
///
/// # Examples
///
/// ```rust
/// use genuuid::V1Generator;
///
/// V1Generator::with_rand08(rand::thread_rng(), [0x02, 0, 0, 0, 0, 0x01])
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RandSource, T: TimeSource> Iterator for V1Generator<R, T> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        self.generate().ok()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{with_rand08, Epoch, RandSource, TimeSource, V1Generator, GREGORIAN_OFFSET};
    use crate::{Error, Variant};

    const NODE: [u8; 6] = [0x02, 0x00, 0x5e, 0x10, 0x20, 0x30];

    type ThreadGen = V1Generator<with_rand08::Adapter<rand::rngs::ThreadRng>>;

    fn thread_gen() -> ThreadGen {
        V1Generator::with_rand08(rand::thread_rng(), NODE)
    }

    /// A clock that stays at the same tick.
    struct FrozenClock(u64);

    impl TimeSource for FrozenClock {
        fn unix_ts_100ns(&mut self) -> u64 {
            self.0
        }
    }

    /// A random source that always fails.
    struct ExhaustedSource;

    impl RandSource for ExhaustedSource {
        fn try_fill_bytes(&mut self, _: &mut [u8]) -> Result<(), Error> {
            Err(Error::EntropySourceUnavailable(rand::Error::new("exhausted")))
        }
    }

    /// Lays out timestamp, clock sequence and node fields
    #[test]
    fn lays_out_timestamp_clock_sequence_and_node_fields() {
        let ts = 0x0123_4567_89ab_cdefu64;
        let mut g = thread_gen();
        let e = g.generate_core(ts, 0).unwrap();
        assert!(e.to_string().starts_with("89abcdef-4567-1123-"));
        assert_eq!(e.timestamp_v1(), Some(ts));
        assert_eq!(e.node(), NODE);
        assert_eq!(e.version(), 1);
        assert_eq!(e.variant(), Variant::Var10);
    }

    /// Generates increasing timestamps even with decreasing or constant clock
    #[test]
    fn generates_increasing_timestamps_even_with_decreasing_or_constant_clock() {
        let ts = 0x0123_4567_89abu64;
        let mut g = thread_gen();
        let mut prev = g.generate_core(ts, 10_000).unwrap().timestamp_v1().unwrap();
        assert_eq!(prev, ts);
        for i in 0..5_000u64 {
            let curr = g
                .generate_core(ts - i.min(4_000), 10_000)
                .unwrap()
                .timestamp_v1()
                .unwrap();
            assert!(prev < curr);
            prev = curr;
        }
    }

    /// Resets timestamp if clock goes backwards a lot
    #[test]
    fn resets_timestamp_if_clock_goes_backwards_a_lot() {
        let ts = 0x0123_4567_89abu64;
        let mut g = thread_gen();
        let prev = g.generate_core(ts, 10_000).unwrap();

        let curr = g.generate_core(ts - 10_000, 10_000).unwrap();
        assert_eq!(curr.timestamp_v1(), Some(ts + 1));

        let curr = g.generate_core(ts - 10_002, 10_000).unwrap();
        assert_eq!(curr.timestamp_v1(), Some(ts - 10_002));
        assert!(curr.timestamp_v1() < prev.timestamp_v1());
    }

    /// Generates distinct UUIDs from a frozen clock
    #[test]
    fn generates_distinct_uuids_from_a_frozen_clock() {
        let mut g = V1Generator::with_rand_and_time_sources(
            with_rand08::Adapter(rand::thread_rng()),
            FrozenClock(42),
            NODE,
        );
        let s: HashSet<_> = (0..10_000).map(|_| g.generate().unwrap()).collect();
        assert_eq!(s.len(), 10_000);
    }

    /// Offsets timestamps by the Gregorian epoch when requested
    #[test]
    fn offsets_timestamps_by_the_gregorian_epoch_when_requested() {
        let mut unix = thread_gen();
        let mut gregorian = thread_gen().with_epoch(Epoch::Gregorian);
        let ts = 0x01de_0000_0000_0000u64;
        assert_eq!(unix.generate_core(ts, 0).unwrap().timestamp_v1(), Some(ts));
        assert_eq!(
            gregorian.generate_core(ts, 0).unwrap().timestamp_v1(),
            Some(ts + GREGORIAN_OFFSET)
        );
    }

    /// Propagates random source failure without touching state
    #[test]
    fn propagates_random_source_failure_without_touching_state() {
        let mut g = V1Generator::new(ExhaustedSource, NODE);
        assert!(matches!(
            g.generate_core(1_000, 0),
            Err(Error::EntropySourceUnavailable(_))
        ));
        assert_eq!(g.timestamp, 0);
        assert!(g.next().is_none());
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        use std::time;
        let mut g = thread_gen();
        for _ in 0..10_000 {
            let ts_now = (time::SystemTime::now()
                .duration_since(time::UNIX_EPOCH)
                .expect("clock may have gone backwards")
                .as_nanos()
                / 100) as i64;
            let ts = g.generate().unwrap().timestamp_v1().unwrap() as i64;
            // one second of slack in 100ns ticks
            assert!((ts_now - ts).abs() < 10_000_000);
        }
    }
}
