use thiserror::Error;

/// A result type defaulting to [`enum@Error`].
///
/// Generation and decoding never fail, so only discriminator lookups surface
/// this type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `suid` can emit.
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// A generator was requested for a discriminator outside `0..=255`.
    ///
    /// The requested value is reported as given. It is never clamped or
    /// wrapped into range.
    #[error("discriminator {requested} is out of range (expected 0..={max})", max = crate::MAX_INSTANCE_ID)]
    DiscriminatorOutOfRange {
        /// The discriminator the caller asked for.
        requested: i64,
    },
}
