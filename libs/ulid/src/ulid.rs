//! The 128-bit lexicographically sortable identifier value type.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::base32;
use crate::error::UlidError;
use crate::rng;

/// A 128-bit identifier: 48-bit millisecond timestamp followed by 80 bits of
/// randomness, big-endian, so the raw bytes sort by creation time.
///
/// Byte 0 is the most-significant timestamp byte; bytes 6-15 are the
/// randomness. The value is immutable once constructed.
///
/// Identifiers created by the same thread in strictly increasing wall-clock
/// milliseconds compare as increasing. Within one millisecond, or across
/// threads, ordering falls back to the randomness bytes and carries no
/// guarantee.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ulid([u8; 16]);

impl Ulid {
    /// The smallest identifier: epoch timestamp, all-zero randomness.
    ///
    /// Lower bound for range queries over identifier-keyed data.
    pub const MIN: Ulid = Ulid([0x00; 16]);

    /// The largest identifier: maximum 48-bit timestamp, all-`0xFF`
    /// randomness. Upper bound for range queries.
    pub const MAX: Ulid = Ulid([0xFF; 16]);

    /// The all-zero identifier. Equal to [`Ulid::MIN`]; kept as a separate
    /// name for "absent value" semantics.
    pub const NIL: Ulid = Ulid([0x00; 16]);

    /// Creates an identifier from the current UTC time and the calling
    /// thread's random generator. Never fails.
    #[must_use]
    pub fn new() -> Self {
        Self::from_timestamp_ms(Utc::now().timestamp_millis() as u64)
    }

    /// Creates an identifier with an explicit timestamp (milliseconds since
    /// the Unix epoch) and freshly drawn randomness.
    ///
    /// Only the low 48 bits of the timestamp are representable; higher bits
    /// are dropped.
    #[must_use]
    pub fn from_timestamp_ms(timestamp_ms: u64) -> Self {
        let mut randomness = [0u8; 10];
        rng::fill_randomness(&mut randomness);
        Self::from_ms_and_randomness(timestamp_ms, &randomness)
    }

    /// Creates an identifier from a chrono timestamp with freshly drawn
    /// randomness.
    #[must_use]
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self::from_timestamp_ms(datetime.timestamp_millis() as u64)
    }

    /// Creates an identifier from an explicit timestamp and an externally
    /// supplied randomness buffer.
    ///
    /// Fails unless `randomness` is exactly 10 bytes.
    pub fn from_parts(timestamp_ms: u64, randomness: &[u8]) -> Result<Self, UlidError> {
        if randomness.len() != 10 {
            return Err(UlidError::InvalidLength {
                expected: 10,
                actual: randomness.len(),
            });
        }
        Ok(Self::from_ms_and_randomness(timestamp_ms, randomness))
    }

    fn from_ms_and_randomness(timestamp_ms: u64, randomness: &[u8]) -> Self {
        let ts = timestamp_ms.to_be_bytes();
        let mut bytes = [0u8; 16];
        bytes[..6].copy_from_slice(&ts[2..]);
        bytes[6..].copy_from_slice(randomness);
        Self(bytes)
    }

    /// Creates an identifier from its 16-byte binary form.
    ///
    /// Fails unless `bytes` is exactly 16 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, UlidError> {
        let bytes: [u8; 16] = bytes
            .try_into()
            .map_err(|_| UlidError::InvalidLength {
                expected: 16,
                actual: bytes.len(),
            })?;
        Ok(Self(bytes))
    }

    /// Infallible sibling of [`Ulid::from_bytes`] for fixed-size buffers.
    #[must_use]
    pub const fn from_byte_array(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Parses the canonical 26-character text form.
    ///
    /// Letters are accepted in either case. Fails with the specific violated
    /// invariant: wrong length, character outside the alphabet, or a value
    /// wider than 128 bits.
    pub fn parse(text: &str) -> Result<Self, UlidError> {
        base32::decode(text.as_bytes()).map(Self)
    }

    /// Like [`Ulid::parse`], but folds any failure into `None`.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// Returns a copy of the 16-byte binary form.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; 16] {
        self.0
    }

    /// Borrows the 16-byte binary form.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the timestamp in milliseconds since the Unix epoch.
    #[must_use]
    pub fn timestamp_ms(&self) -> u64 {
        let mut ts = [0u8; 8];
        ts[2..].copy_from_slice(&self.0[..6]);
        u64::from_be_bytes(ts)
    }

    /// Returns the timestamp as a chrono instant.
    #[must_use]
    pub fn datetime(&self) -> DateTime<Utc> {
        // A 48-bit millisecond count stays within chrono's range.
        DateTime::from_timestamp_millis(self.timestamp_ms() as i64)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Returns a copy of the 10 randomness bytes.
    #[must_use]
    pub fn randomness(&self) -> [u8; 10] {
        let mut randomness = [0u8; 10];
        randomness.copy_from_slice(&self.0[6..]);
        randomness
    }

    /// Returns true for the all-zero identifier.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        *self == Self::NIL
    }

    /// Returns the 16 bytes rearranged into the memory layout of a
    /// mixed-endian GUID: bytes 0-7 pairwise swapped (0<->3, 1<->2, 4<->5,
    /// 6<->7) for the little-endian first three GUID fields, bytes 8-15
    /// unchanged.
    ///
    /// Systems that compare GUIDs field-wise will NOT order these values by
    /// creation time; sort by [`Ulid`] itself when ordering matters.
    #[must_use]
    pub fn to_guid_bytes(&self) -> [u8; 16] {
        let b = &self.0;
        [
            b[3], b[2], b[1], b[0], b[5], b[4], b[7], b[6], b[8], b[9], b[10], b[11], b[12], b[13],
            b[14], b[15],
        ]
    }

    /// Inverse of [`Ulid::to_guid_bytes`]. Total; round-trips exactly.
    #[must_use]
    pub fn from_guid_bytes(guid_bytes: [u8; 16]) -> Self {
        let g = &guid_bytes;
        Self([
            g[3], g[2], g[1], g[0], g[5], g[4], g[7], g[6], g[8], g[9], g[10], g[11], g[12], g[13],
            g[14], g[15],
        ])
    }

    /// Converts to a [`Uuid`] carrying the identifier's bytes in RFC-4122
    /// field order. [`Ulid::to_guid_bytes`] is that UUID's little-endian
    /// memory form.
    #[must_use]
    pub const fn to_uuid(&self) -> Uuid {
        Uuid::from_bytes(self.0)
    }

    /// Converts a [`Uuid`] produced by [`Ulid::to_uuid`] back.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.into_bytes())
    }

    /// Renders the binary form as standard base64 (24 characters with
    /// padding), for callers that key on compact binary-safe strings.
    #[must_use]
    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(self.0)
    }
}

/// The all-zero identifier, matching [`Ulid::NIL`].
impl Default for Ulid {
    fn default() -> Self {
        Self::NIL
    }
}

impl fmt::Display for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = base32::encode(&self.0);
        // The alphabet is pure ASCII.
        match std::str::from_utf8(&text) {
            Ok(s) => f.write_str(s),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl fmt::Debug for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ulid({self})")
    }
}

impl FromStr for Ulid {
    type Err = UlidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Unsigned big-endian comparison of all 16 bytes: timestamp first,
/// randomness as tie-breaker. Total and consistent with `Eq`.
impl Ord for Ulid {
    fn cmp(&self, other: &Self) -> Ordering {
        u128::from_be_bytes(self.0).cmp(&u128::from_be_bytes(other.0))
    }
}

impl PartialOrd for Ulid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl serde::Serialize for Ulid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Ulid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
