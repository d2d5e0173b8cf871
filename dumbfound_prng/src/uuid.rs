// Deterministic UUID v4 values drawn from a `Random`.
//
// Four full-width 32-bit draws are laid out little-endian into the 16 bytes,
// then the version nibble and variant bits are forced per RFC 4122. The
// result has the shape of a v4 UUID but none of its unpredictability: the
// same seed yields the same UUIDs, which is the point for reproducible tests.

use crate::Random;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A UUID v4 produced from a seeded random source.
///
/// Layout follows RFC 4122: version nibble (bits 48–51) set to `0100` and
/// variant bits (bits 64–65) set to `10`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RandomUuid([u8; 16]);

impl RandomUuid {
    /// Draw a UUID v4. Consumes four draws.
    pub fn new_v4(random: &mut Random) -> Self {
        let mut bytes = [0u8; 16];
        for chunk in bytes.chunks_exact_mut(4) {
            chunk.copy_from_slice(&random.next_u32().to_le_bytes());
        }
        // Version nibble (byte 6, upper nibble) to 0100.
        bytes[6] = (bytes[6] & 0x0F) | 0x40;
        // Variant bits (byte 8, upper 2 bits) to 10.
        bytes[8] = (bytes[8] & 0x3F) | 0x80;
        Self(bytes)
    }

    /// Parse the 8-4-4-4-12 hex form. Hyphens must be in the standard
    /// positions; hex digits may be either case.
    pub fn parse(s: &str) -> Option<Self> {
        let raw = s.as_bytes();
        if raw.len() != 36 {
            return None;
        }
        let mut hex = Vec::with_capacity(32);
        for (i, &b) in raw.iter().enumerate() {
            if matches!(i, 8 | 13 | 18 | 23) {
                if b != b'-' {
                    return None;
                }
            } else if b.is_ascii_hexdigit() {
                hex.push(b);
            } else {
                return None;
            }
        }

        let mut bytes = [0u8; 16];
        for (byte, pair) in bytes.iter_mut().zip(hex.chunks_exact(2)) {
            let pair = std::str::from_utf8(pair).ok()?;
            *byte = u8::from_str_radix(pair, 16).ok()?;
        }
        Some(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

/// Draw a UUID v4 and return its canonical lowercase string.
pub fn random_uuid(random: &mut Random) -> String {
    RandomUuid::new_v4(random).to_string()
}

impl FromStr for RandomUuid {
    type Err = InvalidUuid;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(InvalidUuid)
    }
}

/// Returned when a string is not in 8-4-4-4-12 hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid UUID format")]
pub struct InvalidUuid;

impl Serialize for RandomUuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RandomUuid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        RandomUuid::parse(&s).ok_or_else(|| serde::de::Error::custom(InvalidUuid))
    }
}

impl fmt::Debug for RandomUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RandomUuid({self})")
    }
}

impl fmt::Display for RandomUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            b[0], b[1], b[2], b[3],
            b[4], b[5],
            b[6], b[7],
            b[8], b[9],
            b[10], b[11], b[12], b[13], b[14], b[15],
        )
    }
}
