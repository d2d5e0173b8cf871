// Seeds and their canonical hexadecimal form.
//
// A `Seed` is the only state that survives between runs: a failing
// randomized test prints its seed as hex, and feeding that hex back in
// reproduces the exact draw sequence. Parsing is strict base-16 (an optional
// `0x` prefix is tolerated) so that a typo fails immediately instead of
// silently producing a different sequence.
//
// `Seed::generate()` is the fallback when nobody supplied a seed. It mixes the
// wall clock with OS entropy through SplitMix64 and lands in the Lehmer
// generator's useful range `[1, 2^31 - 2]`, so the printed hex is exactly the
// value the generator runs on.
//
// See also: `lib.rs` for how `Random` reduces a seed to its starting state,
// and the `dumbfound` crate's `config.rs` for where seeds are resolved from
// the environment.

use crate::{MODULUS, RandomError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// An immutable seed for a [`Random`](crate::Random) source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seed(u64);

impl Seed {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// Parse a base-16 seed such as `"1f3a"` or `"0x1F3A"`.
    ///
    /// Surrounding whitespace is ignored. Anything else that is not a hex
    /// digit, an empty string, or a value wider than 64 bits is rejected.
    pub fn from_hex(input: &str) -> Result<Self, RandomError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        // `from_str_radix` accepts a leading sign; seeds never carry one.
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(RandomError::InvalidSeed {
                input: input.to_string(),
            });
        }
        u64::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| RandomError::InvalidSeed {
                input: input.to_string(),
            })
    }

    /// The canonical form: lowercase hex, no prefix.
    pub fn to_hex(self) -> String {
        format!("{:x}", self.0)
    }

    /// Derive a fresh seed from the clock and OS entropy.
    ///
    /// Never fails: if the OS entropy source is unavailable the clock alone
    /// is used and a warning is logged.
    pub fn generate() -> Self {
        let clock = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        let mut bytes = [0u8; 8];
        let entropy = match getrandom::getrandom(&mut bytes) {
            Ok(()) => u64::from_le_bytes(bytes),
            Err(err) => {
                tracing::warn!(%err, "OS entropy unavailable, seeding from the clock alone");
                0
            }
        };

        let mut sm = clock ^ entropy;
        let mixed = splitmix64(&mut sm);
        let seed = Self(mixed % (MODULUS - 1) + 1);
        tracing::debug!(seed = %seed, "generated seed");
        seed
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl FromStr for Seed {
    type Err = RandomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// Seeds travel as their hex string, the same form printed in test names.
impl Serialize for Seed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Seed::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// SplitMix64 step, used only to spread clock and entropy bits over the
/// whole word before reduction.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_prefixed_hex() {
        assert_eq!(Seed::from_hex("ff").unwrap(), Seed::new(255));
        assert_eq!(Seed::from_hex("0xFF").unwrap(), Seed::new(255));
        assert_eq!(Seed::from_hex("  1a2b \n").unwrap(), Seed::new(0x1a2b));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "0x", "xyz", "12g", "-1", "+1", "1.5"] {
            assert!(
                matches!(Seed::from_hex(bad), Err(RandomError::InvalidSeed { .. })),
                "expected {bad:?} to be rejected"
            );
        }
        // One hex digit too wide for u64.
        assert!(Seed::from_hex(&"f".repeat(17)).is_err());
    }

    #[test]
    fn hex_roundtrip() {
        for value in [0, 1, 0xdead_beef, MODULUS - 2, u64::MAX] {
            let seed = Seed::new(value);
            assert_eq!(seed.to_hex().parse::<Seed>().unwrap(), seed);
            assert_eq!(seed.to_string(), seed.to_hex());
        }
    }

    #[test]
    fn generated_seed_is_in_lehmer_range() {
        for _ in 0..100 {
            let seed = Seed::generate();
            assert!((1..MODULUS).contains(&seed.value()), "seed {seed} out of range");
        }
    }

    #[test]
    fn serializes_as_hex_string() {
        let seed = Seed::new(0xabc);
        let json = serde_json::to_string(&seed).unwrap();
        assert_eq!(json, "\"abc\"");
        let back: Seed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seed);
        assert!(serde_json::from_str::<Seed>("\"nope\"").is_err());
    }
}
