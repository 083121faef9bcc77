use crate::{Suid, TIME_SHIFT, TimeSource};

/// Width, in bits, of the millisecond span an identifier's timestamp can
/// represent (`32 + TIME_SHIFT`). The timestamp rolls over every `2^42` ms,
/// roughly 139 years.
pub const ROLLOVER_BITS: u32 = 32 + TIME_SHIFT;

/// The fields of a decoded [`Suid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decoded {
    /// Reconstructed generation time in milliseconds since the UNIX epoch,
    /// rounded down to the start of its 1024 ms window. See [`decode`] for why
    /// this is only approximate.
    pub approximate_millis: u64,
    /// The raw 32-bit coarse timestamp field.
    pub timestamp: u32,
    /// The 24-bit increment field.
    pub increment: u32,
    /// The 8-bit instance ID field.
    pub instance_id: u8,
}

/// Decodes `id` against an explicit reference time.
///
/// The identifier only stores the low 32 bits of `millis >> 10`. The missing
/// high-order bits are taken from `now_millis`: its low 42 bits are cleared
/// and the stored timestamp, shifted back by 10, is added.
///
/// The result is right when `now_millis` lies in the same 2^42 ms span as the
/// generation time. If a span boundary falls between the two, the result is
/// off by exactly 2^42 ms.
///
/// ```
/// use suid::{Suid, decode_at};
///
/// let generated_at = 1_700_000_000_123;
/// let id = Suid::from_components((generated_at >> 10) as u32, 1, 9);
///
/// let decoded = decode_at(id, generated_at + 5_000);
/// assert_eq!(decoded.approximate_millis, generated_at & !1023);
/// assert_eq!(decoded.increment, 1);
/// assert_eq!(decoded.instance_id, 9);
/// ```
pub const fn decode_at(id: Suid, now_millis: u64) -> Decoded {
    let span_start = now_millis & !((1 << ROLLOVER_BITS) - 1);
    let timestamp = id.timestamp();
    Decoded {
        approximate_millis: span_start + ((timestamp as u64) << TIME_SHIFT),
        timestamp,
        increment: id.increment(),
        instance_id: id.instance_id(),
    }
}

/// Decodes `id` using `time` as the reference clock. See [`decode_at`].
pub fn decode_with<T: TimeSource + ?Sized>(id: impl Into<Suid>, time: &T) -> Decoded {
    decode_at(id.into(), time.current_millis())
}

/// Decodes any 64-bit integer into its fields, for diagnostics and logging.
///
/// Decoding never fails and does not check that the value came from a
/// generator. `increment` and `instance_id` are exact.
///
/// # Caveat
///
/// `approximate_millis` is **not** a pure function of `id`: it is rebuilt from
/// the decoder's own current wall-clock time, because the identifier only
/// carries the low 32 bits of the coarse timestamp. Decoding an identifier
/// near the time it was generated is accurate to its 1024 ms window. An
/// identifier generated in a previous 2^42 ms span (about 139 years) decodes
/// to a time one span too late, and the same identifier decoded on two
/// machines with skewed clocks may disagree around a span boundary.
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub fn decode(id: impl Into<Suid>) -> Decoded {
    decode_with(id, &crate::SystemClock)
}
