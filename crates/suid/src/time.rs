/// Number of bits dropped from wall-clock milliseconds to form the coarse
/// timestamp (`1 << 10` ms, roughly 1.024 seconds per tick).
pub const TIME_SHIFT: u32 = 10;

/// A trait for time sources that return a wall-clock timestamp.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests.
///
/// The unit is **milliseconds since the UNIX epoch**. Generators reduce it to a
/// coarse timestamp with [`coarse_timestamp`]; decoders use it as the reference
/// point to reattach the high-order time bits an identifier does not carry.
///
/// # Example
///
/// ```
/// use suid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the UNIX epoch.
    fn current_millis(&self) -> u64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_millis(&self) -> u64 {
        (**self).current_millis()
    }
}

/// Reduces wall-clock milliseconds to the 32-bit coarse timestamp stored in
/// bits 63..32 of an identifier.
///
/// Only the low 32 bits of `millis >> 10` survive. The discarded high bits are
/// what [`decode`] has to recover from its own clock.
///
/// [`decode`]: crate::decode
pub const fn coarse_timestamp(millis: u64) -> u32 {
    // Truncation to 32 bits is the rollover.
    (millis >> TIME_SHIFT) as u32
}

/// The system wall clock.
///
/// Reads `SystemTime::now()` on every call, so it follows NTP adjustments and
/// manual clock changes. A clock stepped backwards produces identifiers that
/// sort before earlier ones; uniqueness is unaffected because the counter
/// keeps advancing.
///
/// On `wasm32-unknown-unknown` the time is read through `web-time`.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn current_millis(&self) -> u64 {
        #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
        use std::time::{SystemTime, UNIX_EPOCH};
        #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
        use web_time::{SystemTime, UNIX_EPOCH};

        // A clock before 1970 reads as the epoch itself.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as u64)
    }
}
