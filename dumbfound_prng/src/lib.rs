// Seeded, reproducible random source for randomized tests.
//
// Implements the Lehmer (Park-Miller "minimal standard") generator:
// `state = state * 16807 mod (2^31 - 1)`. This is hand-rolled with no RNG
// crate underneath so that a seed printed by a failing test reproduces the
// exact same draws on every platform and compiler version.
//
// Everything else in this crate derives from `Random`:
// - `float.rs`: `next_after`, the IEEE-754 adjacent-float primitive.
// - `weighted.rs`: index selection proportional to integer weights.
// - `evil.rs`: numbers biased towards bounds, zero and off-by-one-ulp values.
// - `uuid.rs`: RFC 4122 shaped v4 UUIDs from four 32-bit draws.
// - `seed.rs`: the `Seed` type and its canonical hex form.
//
// The `dumbfound_chars` crate builds character and string generation on top
// of this, and the `dumbfound` crate wraps it all in the `Randomizer` facade.
//
// **Critical constraint: determinism.** Every method on `Random` must produce
// identical output given the same prior state. Draw order is part of the
// contract: changing how many draws an operation consumes changes every
// subsequent value for existing seeds.

pub mod evil;
pub mod float;
pub mod seed;
pub mod uuid;
pub mod weighted;

mod error;

pub use error::RandomError;
pub use evil::random_evil_number;
pub use float::next_after;
pub use seed::Seed;
pub use uuid::{RandomUuid, random_uuid};
pub use weighted::{Weights, pick_weighted};

use serde::{Deserialize, Serialize};

/// The Lehmer modulus, the Mersenne prime `2^31 - 1`.
pub const MODULUS: u64 = 2_147_483_647;

/// The Park-Miller multiplier, `7^5`.
pub const MULTIPLIER: u64 = 16_807;

/// Seeded Lehmer random source.
///
/// Owns one 31-bit register and a cached second Box-Muller deviate. Not
/// synchronized: one `Random` per logical test run, passed by `&mut`.
/// Constructing a new `Random` with the same seed replays the same sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Random {
    state: u32,
    pending_gaussian: Option<f64>,
}

impl Random {
    /// Create a source from a raw seed. The seed is reduced modulo
    /// [`MODULUS`]; a zero remainder would lock the generator at zero, so it
    /// is mapped to `1`.
    pub fn new(seed: u64) -> Self {
        let state = (seed % MODULUS) as u32;
        Self {
            state: if state == 0 { 1 } else { state },
            pending_gaussian: None,
        }
    }

    pub fn from_seed(seed: Seed) -> Self {
        Self::new(seed.value())
    }

    /// Advance the generator and return the new state, in `[1, 2^31 - 2]`.
    pub fn int32(&mut self) -> u32 {
        self.state = ((u64::from(self.state) * MULTIPLIER) % MODULUS) as u32;
        self.state
    }

    /// Uniform `f64` in `[0, 1)`.
    pub fn number(&mut self) -> f64 {
        f64::from(self.int32() - 1) / (MODULUS - 1) as f64
    }

    /// Uniform `f64` in the closed interval `[min, max]`.
    ///
    /// `number()` never returns 1, so `max` is nudged one representable value
    /// upwards before interpolating; that makes `max` itself reachable. The
    /// result is clamped to `max` to absorb rounding on very narrow ranges.
    ///
    /// Ranges wider than `f64::MAX` (or with `max == f64::MAX`) interpolate
    /// between the two ends separately so the width never overflows.
    ///
    /// Panics unless `min <= max` (NaN bounds included).
    pub fn number_between(&mut self, min: f64, max: f64) -> f64 {
        assert!(
            min <= max,
            "number_between: min must be <= max (got {min}, {max})"
        );
        let t = self.number();
        let upper = float::next_up(max);
        let width = upper - min;
        let value = if width.is_finite() {
            min + t * width
        } else {
            let upper = upper.min(f64::MAX);
            min * (1.0 - t) + upper * t
        };
        value.clamp(min, max)
    }

    /// Uniform integer in the closed interval `[min, max]`.
    ///
    /// Always consumes exactly one draw, including when `min == max`.
    /// Panics if `min > max`.
    pub fn int_between(&mut self, min: i64, max: i64) -> i64 {
        assert!(
            min <= max,
            "int_between: min must be <= max (got {min}, {max})"
        );
        let span = max as f64 + 1.0 - min as f64;
        let value = (min as f64 + self.number() * span).floor() as i64;
        value.clamp(min, max)
    }

    /// Uniform index in `[0, len)`. Panics if `len == 0`.
    pub fn index(&mut self, len: usize) -> usize {
        assert!(len > 0, "index: cannot pick from an empty range");
        self.int_between(0, len as i64 - 1) as usize
    }

    /// One draw spread over the full 32-bit range.
    ///
    /// `int32()` alone never sets the top bit, so this scales `number()` to
    /// `[0, u32::MAX)` instead.
    pub fn next_u32(&mut self) -> u32 {
        (self.number() * f64::from(u32::MAX)) as u32
    }

    /// Return `true` with probability `true_probability`.
    ///
    /// `p <= 0.0` always returns false, `p >= 1.0` always returns true.
    pub fn boolean(&mut self, true_probability: f64) -> bool {
        self.number() < true_probability
    }

    /// Standard normal deviate (mean 0, standard deviation 1).
    ///
    /// Polar Box-Muller: each accepted pair of uniforms yields two
    /// independent deviates. The first is returned, the second is cached and
    /// returned by the next call without consuming any draws.
    pub fn gaussian(&mut self) -> f64 {
        if let Some(pending) = self.pending_gaussian.take() {
            return pending;
        }

        let (x1, x2, w) = loop {
            let x1 = 2.0 * self.number() - 1.0;
            let x2 = 2.0 * self.number() - 1.0;
            let w = x1 * x1 + x2 * x2;
            if w > 0.0 && w < 1.0 {
                break (x1, x2, w);
            }
        };

        let scale = ((-2.0 * w.ln()) / w).sqrt();
        self.pending_gaussian = Some(x2 * scale);
        x1 * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinism_same_seed_same_output() {
        let mut a = Random::new(42);
        let mut b = Random::new(42);
        for _ in 0..1000 {
            assert_eq!(a.int32(), b.int32());
            assert_eq!(a.gaussian().to_bits(), b.gaussian().to_bits());
            assert_eq!(a.int_between(-9, 9), b.int_between(-9, 9));
        }
    }

    #[test]
    fn different_seeds_different_output() {
        let mut a = Random::new(42);
        let mut b = Random::new(43);
        assert_ne!(a.int32(), b.int32());
    }

    /// Park & Miller's published check values for the minimal standard
    /// generator seeded with 1.
    #[test]
    fn minimal_standard_reference_values() {
        let mut rng = Random::new(1);
        let first: Vec<u32> = (0..5).map(|_| rng.int32()).collect();
        assert_eq!(
            first,
            vec![16_807, 282_475_249, 1_622_650_073, 984_943_658, 1_144_108_930]
        );

        let mut rng = Random::new(1);
        let mut last = 0;
        for _ in 0..10_000 {
            last = rng.int32();
        }
        assert_eq!(last, 1_043_618_065);
    }

    #[test]
    fn seed_is_reduced_and_zero_is_remapped() {
        let mut a = Random::new(MODULUS + 5);
        let mut b = Random::new(5);
        assert_eq!(a.int32(), b.int32());

        let mut zero = Random::new(0);
        let mut one = Random::new(1);
        let mut multiple = Random::new(MODULUS * 3);
        for _ in 0..10 {
            let expected = one.int32();
            assert_eq!(zero.int32(), expected);
            assert_eq!(multiple.int32(), expected);
        }
    }

    #[test]
    fn int32_in_range() {
        let mut rng = Random::new(0x5eed);
        for _ in 0..100_000 {
            let v = rng.int32();
            assert!((1..=2_147_483_646).contains(&v), "int32 out of range: {v}");
        }
    }

    #[test]
    fn number_in_unit_range() {
        let mut rng = Random::new(12345);
        for _ in 0..100_000 {
            let v = rng.number();
            assert!((0.0..1.0).contains(&v), "number out of range: {v}");
        }
    }

    #[test]
    fn number_matches_the_lehmer_formula() {
        let mut rng = Random::new(1);
        assert_eq!(
            rng.number().to_bits(),
            ((16_807.0 - 1.0) / 2_147_483_646.0_f64).to_bits()
        );
    }

    #[test]
    fn number_stays_below_one_at_the_top_state() {
        // 739_806_647 * 16807 mod (2^31 - 1) is 2^31 - 2, the largest state.
        let mut rng = Random::new(739_806_647);
        let mut peek = rng.clone();
        assert_eq!(peek.int32(), 2_147_483_646);
        let v = rng.number();
        assert!(v < 1.0, "number() reached {v}");

        let mut rng = Random::new(739_806_647);
        assert!(rng.boolean(1.0));
    }

    #[test]
    fn number_between_spans_the_whole_float_range() {
        let mut rng = Random::new(2718);
        let mut distinct = std::collections::HashSet::new();
        let mut negatives = 0;
        for _ in 0..1000 {
            let v = rng.number_between(-f64::MAX, f64::MAX);
            assert!(v.is_finite(), "escaped the float range: {v}");
            negatives += usize::from(v < 0.0);
            distinct.insert(v.to_bits());
        }
        assert!(distinct.len() > 900, "only {} distinct values", distinct.len());
        assert!((300..700).contains(&negatives), "{negatives} negatives");
    }

    #[test]
    fn number_between_up_to_float_max() {
        let mut rng = Random::new(31);
        let min = f64::MAX / 2.0;
        let mut distinct = std::collections::HashSet::new();
        for _ in 0..100 {
            let v = rng.number_between(min, f64::MAX);
            assert!((min..=f64::MAX).contains(&v), "out of range: {v}");
            distinct.insert(v.to_bits());
        }
        assert!(distinct.len() > 90);
    }

    #[test]
    fn number_between_is_closed() {
        let mut rng = Random::new(777);
        for _ in 0..100_000 {
            let v = rng.number_between(-5.0, 5.0);
            assert!((-5.0..=5.0).contains(&v), "number_between out of range: {v}");
        }
    }

    #[test]
    fn number_between_reaches_max_on_narrow_range() {
        // A one-ulp-wide range: both ends must show up.
        let min = 1.0;
        let max = float::next_up(min);
        let mut rng = Random::new(99);
        let mut saw_min = false;
        let mut saw_max = false;
        for _ in 0..1000 {
            let v = rng.number_between(min, max);
            assert!(v == min || v == max, "escaped narrow range: {v}");
            saw_min |= v == min;
            saw_max |= v == max;
        }
        assert!(saw_min && saw_max);
    }

    #[test]
    fn number_between_degenerate() {
        let mut rng = Random::new(3);
        for _ in 0..100 {
            assert_eq!(rng.number_between(2.5, 2.5), 2.5);
        }
    }

    #[test]
    fn int_between_closed_and_bounds_reached() {
        let mut rng = Random::new(555);
        let mut saw_min = false;
        let mut saw_max = false;
        for _ in 0..100_000 {
            let v = rng.int_between(-5, 5);
            assert!((-5..=5).contains(&v), "int_between out of range: {v}");
            saw_min |= v == -5;
            saw_max |= v == 5;
        }
        assert!(saw_min, "int_between never produced the minimum");
        assert!(saw_max, "int_between never produced the maximum");
    }

    #[test]
    fn int_between_degenerate_consumes_a_draw() {
        let mut rng = Random::new(8);
        let mut reference = Random::new(8);
        assert_eq!(rng.int_between(4, 4), 4);
        reference.int32();
        assert_eq!(rng.int32(), reference.int32());
    }

    #[test]
    #[should_panic(expected = "min must be <= max")]
    fn int_between_rejects_inverted_range() {
        Random::new(1).int_between(3, 2);
    }

    #[test]
    #[should_panic(expected = "min must be <= max")]
    fn number_between_rejects_nan() {
        Random::new(1).number_between(f64::NAN, 1.0);
    }

    #[test]
    fn index_covers_every_slot() {
        let mut rng = Random::new(31);
        let mut seen = [false; 7];
        for _ in 0..10_000 {
            seen[rng.index(7)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn next_u32_uses_the_top_bit() {
        let mut rng = Random::new(2024);
        assert!((0..1000).any(|_| rng.next_u32() >= 0x8000_0000));
    }

    #[test]
    fn boolean_distribution_and_extremes() {
        let mut rng = Random::new(42);
        let n = 10_000;
        let trues = (0..n).filter(|_| rng.boolean(0.5)).count();
        let pct = trues as f64 / n as f64;
        assert!((0.45..0.55).contains(&pct), "boolean(0.5) gave {pct}");

        assert!((0..100).all(|_| !rng.boolean(0.0)));
        assert!((0..100).all(|_| rng.boolean(1.0)));
    }

    #[test]
    fn gaussian_distribution() {
        let mut rng = Random::new(12345);
        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| rng.gaussian()).collect();
        assert!(samples.iter().all(|v| v.is_finite()));

        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "gaussian mean = {mean}");
        assert!((variance - 1.0).abs() < 0.1, "gaussian variance = {variance}");
    }

    #[test]
    fn gaussian_second_value_is_cached() {
        let mut rng = Random::new(77);
        rng.gaussian();
        let after_first = rng.clone();
        rng.gaussian();
        // The cached deviate is served without touching the register.
        assert_eq!(rng.state, after_first.state);
        assert!(rng.pending_gaussian.is_none());
    }

    #[test]
    fn serialization_roundtrip() {
        let mut rng = Random::new(42);
        for _ in 0..100 {
            rng.int32();
        }
        rng.gaussian();
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: Random = serde_json::from_str(&json).unwrap();
        assert_eq!(rng.gaussian().to_bits(), restored.gaussian().to_bits());
        for _ in 0..100 {
            assert_eq!(rng.int32(), restored.int32());
        }
    }
}
