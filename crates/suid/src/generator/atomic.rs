use portable_atomic::{AtomicU64, Ordering};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Decoded, Suid, TimeSource, coarse_timestamp, decode_with};

/// A lock-free [`Suid`] generator for one discriminator.
///
/// The generator owns a monotonically advancing counter in an [`AtomicU64`]
/// and a fixed 8-bit instance ID. Every call to [`Self::next_id`] advances the
/// counter by exactly one with a single atomic read-modify-write, so callers
/// sharing a generator across threads never observe the same counter value.
///
/// Unlike a Snowflake generator, the counter does not reset when the clock
/// ticks and the generator never waits for the clock: generation always
/// succeeds. The increment field wraps modulo 2^24, which allows 16,777,216
/// identifiers per 1024 ms window before a value can repeat.
///
/// ## Features
/// - ✅ Thread-safe (`Send + Sync` when the time source is)
/// - ✅ Infallible, constant time, never blocks
///
/// Generators are normally obtained from a [`SuidRegistry`] so that one
/// counter exists per discriminator.
///
/// [`SuidRegistry`]: crate::SuidRegistry
#[derive(Debug)]
pub struct SuidGenerator<T>
where
    T: TimeSource,
{
    #[cfg(feature = "cache-padded")]
    counter: crossbeam_utils::CachePadded<AtomicU64>,
    #[cfg(not(feature = "cache-padded"))]
    counter: AtomicU64,
    instance_id: u8,
    time: T,
}

impl<T> SuidGenerator<T>
where
    T: TimeSource,
{
    /// Creates a generator for `instance_id` with its counter at zero.
    ///
    /// The first identifier it produces carries increment `1`.
    ///
    /// # Example
    /// ```
    /// use suid::{SuidGenerator, SystemClock};
    ///
    /// let generator = SuidGenerator::new(13, SystemClock);
    /// let id = generator.next_id();
    /// assert_eq!(id.instance_id(), 13);
    /// assert_eq!(id.increment(), 1);
    /// ```
    pub fn new(instance_id: u8, time: T) -> Self {
        Self::from_components(instance_id, 0, time)
    }

    /// Creates a generator whose counter starts at `counter`.
    ///
    /// `counter` is the value most recently handed out; the next identifier
    /// carries `counter + 1` (masked to 24 bits).
    ///
    /// # ⚠️ Note
    /// In typical use cases, you should prefer [`Self::new`]. This exists to
    /// inspect counter wraparound.
    pub fn from_components(instance_id: u8, counter: u64, time: T) -> Self {
        Self {
            #[cfg(feature = "cache-padded")]
            counter: crossbeam_utils::CachePadded::new(AtomicU64::new(counter)),
            #[cfg(not(feature = "cache-padded"))]
            counter: AtomicU64::new(counter),
            instance_id,
            time,
        }
    }

    /// Generates the next identifier.
    ///
    /// Reads the time source, shifts it down to the coarse timestamp, advances
    /// the counter and packs both with this generator's instance ID.
    ///
    /// # Example
    /// ```
    /// use suid::{SuidGenerator, SystemClock};
    ///
    /// let generator = SuidGenerator::new(0, SystemClock);
    /// let a = generator.next_id();
    /// let b = generator.next_id();
    /// assert!(a < b);
    /// assert_eq!(b.increment(), a.increment() + 1);
    /// ```
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip(self), fields(instance_id = self.instance_id))
    )]
    pub fn next_id(&self) -> Suid {
        let timestamp = coarse_timestamp(self.time.current_millis());
        // fetch_add wraps on u64 overflow; only the low 24 bits are kept.
        let increment = self.counter.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        Suid::from_components(
            timestamp,
            (increment & u64::from(Suid::INCREMENT_MASK)) as u32,
            self.instance_id,
        )
    }

    /// Alias for [`Self::next_id`].
    #[inline]
    pub fn generate(&self) -> Suid {
        self.next_id()
    }

    /// The fixed instance ID this generator stamps into every identifier.
    pub const fn instance_id(&self) -> u8 {
        self.instance_id
    }

    /// The increment most recently handed out, masked to 24 bits.
    ///
    /// Under concurrent use this is a snapshot that may already be stale.
    pub fn current_increment(&self) -> u32 {
        (self.counter.load(Ordering::Relaxed) & u64::from(Suid::INCREMENT_MASK)) as u32
    }

    /// Decodes `id` against this generator's time source.
    ///
    /// See [`decode`](crate::decode) for the time reconstruction caveat.
    pub fn decode(&self, id: impl Into<Suid>) -> Decoded {
        decode_with(id, &self.time)
    }
}
