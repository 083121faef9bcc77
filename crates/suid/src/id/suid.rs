use core::fmt;

/// A 64-bit simple unique identifier.
///
/// - 32 bits coarse timestamp (`unix_millis >> 10`, truncated to 32 bits)
/// - 24 bits increment (per-discriminator counter, wraps modulo 2^24)
/// - 8 bits instance ID (the discriminator, 0-255)
///
/// ```text
///  Bit Index:  63             32 31             8 7                0
///              +----------------+----------------+------------------+
///  Field:      | timestamp (32) | increment (24) | instance ID (8)  |
///              +----------------+----------------+------------------+
///              |<----- MSB ---------- 64 bits --------- LSB ------->|
/// ```
///
/// The value is carried as an [`i64`] and orders numerically. Identifiers from
/// the same discriminator sort by time first and by increment within a time
/// window. Once the coarse timestamp reaches `2^31` (early 2039) the top bit
/// is set and new identifiers become negative as `i64`; the fields still
/// decode correctly because extraction works on the unsigned bit pattern.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Suid {
    id: i64,
}

impl Suid {
    /// Number of bits to shift the timestamp to its position (bit 32).
    pub const TIMESTAMP_SHIFT: u32 = 32;

    /// Bitmask for the 24-bit increment field. Occupies bits 8 through 31.
    pub const INCREMENT_MASK: u32 = (1 << 24) - 1;

    /// Number of bits to shift the increment to its position (bit 8).
    pub const INCREMENT_SHIFT: u32 = 8;

    /// Number of bits to shift the instance ID (bit 0).
    pub const INSTANCE_ID_SHIFT: u32 = 0;

    /// Packs the three fields into an identifier.
    ///
    /// `increment` is masked to its low 24 bits; this is where counter
    /// wraparound happens.
    ///
    /// ```
    /// use suid::Suid;
    ///
    /// let id = Suid::from_components(1_660_156_250, 7, 13);
    /// assert_eq!(id.timestamp(), 1_660_156_250);
    /// assert_eq!(id.increment(), 7);
    /// assert_eq!(id.instance_id(), 13);
    /// assert_eq!(id.to_raw(), (1_660_156_250_i64 << 32) | (7 << 8) | 13);
    /// ```
    pub const fn from_components(timestamp: u32, increment: u32, instance_id: u8) -> Self {
        let timestamp = (timestamp as u64) << Self::TIMESTAMP_SHIFT;
        let increment = ((increment & Self::INCREMENT_MASK) as u64) << Self::INCREMENT_SHIFT;
        let instance_id = (instance_id as u64) << Self::INSTANCE_ID_SHIFT;
        Self {
            id: (timestamp | increment | instance_id) as i64,
        }
    }

    /// Wraps a raw identifier. Any `i64` is accepted.
    pub const fn from_raw(id: i64) -> Self {
        Self { id }
    }

    /// Returns the raw identifier.
    pub const fn to_raw(&self) -> i64 {
        self.id
    }

    /// Extracts the 32-bit coarse timestamp.
    pub const fn timestamp(&self) -> u32 {
        ((self.id as u64) >> Self::TIMESTAMP_SHIFT) as u32
    }

    /// Extracts the 24-bit increment.
    pub const fn increment(&self) -> u32 {
        ((self.id as u64) >> Self::INCREMENT_SHIFT) as u32 & Self::INCREMENT_MASK
    }

    /// Extracts the 8-bit instance ID.
    pub const fn instance_id(&self) -> u8 {
        ((self.id as u64) >> Self::INSTANCE_ID_SHIFT) as u8
    }

    /// Returns the identifier as a zero-padded decimal string: 19 digits, with
    /// a leading `-` for negative values.
    #[cfg(feature = "std")]
    pub fn to_padded_string(&self) -> String {
        if self.id < 0 {
            format!("-{:019}", self.id.unsigned_abs())
        } else {
            format!("{:019}", self.id)
        }
    }
}

impl From<i64> for Suid {
    fn from(id: i64) -> Self {
        Self::from_raw(id)
    }
}

impl From<Suid> for i64 {
    fn from(id: Suid) -> Self {
        id.to_raw()
    }
}

impl fmt::Display for Suid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for Suid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suid")
            .field("id", &self.id)
            .field("timestamp", &self.timestamp())
            .field("increment", &self.increment())
            .field("instance_id", &self.instance_id())
            .finish()
    }
}
