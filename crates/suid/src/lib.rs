//! Simple unique identifiers.
//!
//! A [`Suid`] is a 64-bit integer packed from a coarse wall-clock timestamp, a
//! 24-bit per-discriminator counter and an 8-bit instance discriminator:
//!
//! ```text
//!  Bit Index:  63             32 31             8 7                0
//!              +----------------+----------------+------------------+
//!  Field:      | timestamp (32) | increment (24) | instance ID (8)  |
//!              +----------------+----------------+------------------+
//! ```
//!
//! Up to 256 cooperating processes can generate identifiers without talking
//! to each other, as long as each one uses its own discriminator. Assigning
//! disjoint discriminators is the deployer's job; nothing checks it.
//!
//! ```
//! use suid::{SuidRegistry, decode};
//!
//! let registry = SuidRegistry::new();
//!
//! let id = registry.default_generator().next_id();
//! let other = registry.generate(13).unwrap();
//! assert_ne!(id, other);
//!
//! let fields = decode(other.to_raw());
//! assert_eq!(fields.instance_id, 13);
//! assert_eq!(fields.increment, 1);
//! ```
//!
//! Counters live in memory only and restart at zero with the process. A
//! process restarted within the same ~1 s window as its predecessor can repeat
//! identifiers.
//!
//! ## Features
//!
//! - `std` (default): [`SystemClock`], [`SuidRegistry::new`] and [`decode`].
//! - `tracing`: trace spans on generation, events on registry construction and
//!   rejected lookups.
//! - `serde`: (de)serialize [`Suid`] as its native `i64`.
//! - `cache-padded`: pad each counter to its own cache line.
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod generator;
mod id;
mod time;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::time::*;
