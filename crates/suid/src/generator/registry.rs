use core::{fmt, ops::Index};

use crate::{Decoded, Error, Result, Suid, SuidGenerator, TimeSource};

/// The largest valid discriminator.
pub const MAX_INSTANCE_ID: u8 = u8::MAX;

/// Number of generators held by a [`SuidRegistry`], one per discriminator.
pub const GENERATOR_COUNT: usize = MAX_INSTANCE_ID as usize + 1;

/// The set of all 256 generators, one per discriminator, built once.
///
/// Construct a registry at startup and hand out references to it (or wrap it
/// in an `Arc`). Every lookup for the same discriminator returns the same
/// [`SuidGenerator`], so its counter keeps advancing across lookups and
/// threads; generators are never recreated.
///
/// Discriminators must be assigned disjointly across cooperating processes by
/// whoever deploys them. Nothing here detects two processes using the same
/// discriminator.
///
/// # Example
/// ```
/// use suid::{Error, SuidRegistry};
///
/// let registry = SuidRegistry::new();
///
/// let id = registry.generate(13).unwrap();
/// assert_eq!(id.instance_id(), 13);
///
/// assert_eq!(
///     registry.for_discriminator(256).unwrap_err(),
///     Error::DiscriminatorOutOfRange { requested: 256 }
/// );
/// ```
pub struct SuidRegistry<T>
where
    T: TimeSource,
{
    generators: [SuidGenerator<T>; GENERATOR_COUNT],
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl SuidRegistry<crate::SystemClock> {
    /// Builds a registry reading the system wall clock.
    pub fn new() -> Self {
        Self::with_clock(crate::SystemClock)
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl Default for SuidRegistry<crate::SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SuidRegistry<T>
where
    T: TimeSource + Clone,
{
    /// Builds a registry whose generators all share clones of `time`.
    pub fn with_clock(time: T) -> Self {
        let generators =
            core::array::from_fn(|instance_id| SuidGenerator::new(instance_id as u8, time.clone()));
        #[cfg(feature = "tracing")]
        tracing::debug!(generators = GENERATOR_COUNT, "built suid registry");
        Self { generators }
    }
}

impl<T> SuidRegistry<T>
where
    T: TimeSource,
{
    /// Returns the generator for `discriminator`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DiscriminatorOutOfRange`] when `discriminator` is not
    /// in `0..=255`. The value is never clamped or wrapped.
    pub fn for_discriminator(&self, discriminator: i64) -> Result<&SuidGenerator<T>> {
        match u8::try_from(discriminator) {
            Ok(instance_id) => Ok(self.get(instance_id)),
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(discriminator, "rejected out of range discriminator");
                Err(Error::DiscriminatorOutOfRange {
                    requested: discriminator,
                })
            }
        }
    }

    /// Returns the generator for `instance_id`. Every `u8` is in range.
    pub fn get(&self, instance_id: u8) -> &SuidGenerator<T> {
        &self.generators[usize::from(instance_id)]
    }

    /// Returns the generator for discriminator 0.
    pub fn default_generator(&self) -> &SuidGenerator<T> {
        self.get(0)
    }

    /// Generates an identifier with the generator for `discriminator`.
    ///
    /// # Errors
    ///
    /// Fails only when the lookup does; see [`Self::for_discriminator`].
    pub fn generate(&self, discriminator: i64) -> Result<Suid> {
        self.for_discriminator(discriminator)
            .map(SuidGenerator::next_id)
    }

    /// Iterates over all generators in discriminator order.
    pub fn iter(&self) -> impl Iterator<Item = &SuidGenerator<T>> {
        self.generators.iter()
    }

    /// Decodes `id` against the registry's time source.
    ///
    /// See [`decode`](crate::decode) for the time reconstruction caveat.
    pub fn decode(&self, id: impl Into<Suid>) -> Decoded {
        self.default_generator().decode(id)
    }
}

impl<T> Index<u8> for SuidRegistry<T>
where
    T: TimeSource,
{
    type Output = SuidGenerator<T>;

    fn index(&self, instance_id: u8) -> &Self::Output {
        self.get(instance_id)
    }
}

impl<T> fmt::Debug for SuidRegistry<T>
where
    T: TimeSource + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuidRegistry")
            .field("generators", &GENERATOR_COUNT)
            .field("default_generator", &self.generators[0])
            .finish_non_exhaustive()
    }
}
