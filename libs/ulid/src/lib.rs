//! # chron-ulid
//!
//! Lexicographically sortable 128-bit identifiers for the chron platform.
//!
//! ## Design Principles
//!
//! - 48-bit millisecond timestamp + 80 bits of randomness, big-endian, so
//!   raw bytes, text form, and `Ord` all sort by creation time
//! - Canonical 26-character base-32 text form with strict parsing
//!   (roundtrip: parse → format → parse)
//! - No allocation and no `unsafe` on the encode/decode paths
//! - Randomness is drawn from a per-thread xorshift generator seeded once
//!   from OS entropy; only the timestamp carries the ordering guarantee
//!
//! ## Identifier Format
//!
//! ```text
//!  01ARZ3NDEK      TSV4RRFFQ69G5FAV
//! |----------|    |----------------|
//!  Timestamp          Randomness
//!    48 bits            80 bits
//! ```
//!
//! Example: `01ARZ3NDEKTSV4RRFFQ69G5FAV`
//!
//! Interoperability with GUID-shaped storage goes through explicit, named
//! conversions ([`Ulid::to_guid_bytes`], [`Ulid::to_uuid`]); they do not
//! preserve creation-time ordering on the GUID side.

mod base32;
mod error;
mod rng;
mod ulid;

pub use base32::{ALPHABET, ENCODED_LEN};
pub use error::UlidError;
pub use ulid::Ulid;

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;
