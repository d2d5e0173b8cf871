// The `Randomizer` facade: one seeded source plus the helpers test code
// actually calls.
//
// A `Randomizer` owns its `Seed` and the `Random` built from it. Every draw
// goes through that one source, so a test body that makes the same calls in
// the same order against the same seed sees the same values. The seed's hex
// form is what a failing randomized test prints (see `harness.rs`).
//
// Argument validation happens here, before anything reaches `Random`:
// facade callers get `RandomizerError::InvalidArgument` where the core would
// panic. The checks are shared with the deferred constructors in `draw.rs`
// through the `check_*` helpers at the bottom of this file.
//
// Default ranges:
// - `number()` and `evil_number()` span the safe-integer range scaled down
//   by one million, `[-(2^53 - 1) / 1e6, (2^53 - 1) / 1e6]`.
// - `int()` spans the whole safe-integer range, `[-(2^53 - 1), 2^53 - 1]`.
//   Integer bounds outside that range are rejected, since the core maps
//   integers through `f64`.

use crate::config::SeedConfig;
use crate::error::RandomizerError;
use crate::source::Source;
use dumbfound_chars::ascii::{
    ASCII, ASCII_DIGITS, ASCII_LOWERCASE, ASCII_UPPERCASE, ascii_alpha_numeric,
    ascii_alpha_numeric_with_spaces,
};
use dumbfound_chars::{CharGenerator, UnicodeChars, random_string};
use dumbfound_prng::{Random, Seed, Weights, random_evil_number, random_uuid};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// Largest integer that `f64` represents exactly, together with every
/// smaller one.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

/// Bound of the default `number()` range.
pub const NUMBER_RANGE: f64 = MAX_SAFE_INTEGER as f64 / 1_000_000.0;

/// Longest string `string_any_length` will produce.
pub const MAX_ANY_LENGTH: usize = 20;

/// `unique_array` and `set` give up after `length * UNIQUE_ATTEMPT_FACTOR`
/// draws.
pub const UNIQUE_ATTEMPT_FACTOR: usize = 100;

/// Probability that `frequently()` returns true.
const FREQUENTLY: f64 = 0.9;

/// Null, NaN, undefined, number, boolean, string.
const PRIMITIVE_WEIGHTS: Weights<'static> = Weights::from_static(&[2, 1, 2, 5, 4, 5]);

/// A loosely typed value, for exercising code that accepts anything.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Primitive {
    Null,
    /// Absent, as opposed to explicitly null.
    Undefined,
    #[serde(rename = "nan")]
    NaN,
    Number(f64),
    Boolean(bool),
    String(String),
}

/// Seeded generator of test values.
#[derive(Clone, Debug)]
pub struct Randomizer {
    seed: Seed,
    random: Random,
}

impl Randomizer {
    pub fn new(seed: Seed) -> Self {
        Self {
            seed,
            random: Random::from_seed(seed),
        }
    }

    /// Build from a hex seed such as the one printed by a failing test.
    pub fn from_hex(seed: &str) -> Result<Self, RandomizerError> {
        Ok(Self::new(Seed::from_hex(seed)?))
    }

    /// Build from the config's pinned seed, or a generated one.
    pub fn from_config(config: &SeedConfig) -> Self {
        Self::new(config.resolve())
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// The underlying source, for draws the facade does not cover.
    pub fn random(&mut self) -> &mut Random {
        &mut self.random
    }

    // -----------------------------------------------------------------------
    // Numbers
    // -----------------------------------------------------------------------

    /// Uniform over the default number range.
    pub fn number(&mut self) -> f64 {
        self.random.number_between(-NUMBER_RANGE, NUMBER_RANGE)
    }

    /// Uniform over `[0, max]`.
    pub fn number_up_to(&mut self, max: f64) -> Result<f64, RandomizerError> {
        self.number_between(0.0, max)
    }

    /// Uniform over `[min, max]`. Both bounds must be finite.
    pub fn number_between(&mut self, min: f64, max: f64) -> Result<f64, RandomizerError> {
        check_number_range(min, max)?;
        Ok(self.random.number_between(min, max))
    }

    /// Uniform over the safe-integer range.
    pub fn int(&mut self) -> i64 {
        self.random.int_between(MIN_SAFE_INTEGER, MAX_SAFE_INTEGER)
    }

    /// Uniform over `[0, max]`.
    pub fn int_up_to(&mut self, max: i64) -> Result<i64, RandomizerError> {
        self.int_between(0, max)
    }

    /// Uniform over `[min, max]`, both inclusive.
    pub fn int_between(&mut self, min: i64, max: i64) -> Result<i64, RandomizerError> {
        check_int_range(min, max)?;
        Ok(self.random.int_between(min, max))
    }

    /// An evil number over the default number range.
    pub fn evil_number(&mut self) -> f64 {
        random_evil_number(&mut self.random, -NUMBER_RANGE, NUMBER_RANGE)
    }

    pub fn evil_number_up_to(&mut self, max: f64) -> Result<f64, RandomizerError> {
        self.evil_number_between(0.0, max)
    }

    /// A number in `[min, max]` biased towards the bounds, their neighbours
    /// and zero.
    pub fn evil_number_between(&mut self, min: f64, max: f64) -> Result<f64, RandomizerError> {
        check_number_range(min, max)?;
        Ok(random_evil_number(&mut self.random, min, max))
    }

    /// Standard normal deviate.
    pub fn gaussian(&mut self) -> f64 {
        self.random.gaussian()
    }

    // -----------------------------------------------------------------------
    // Booleans
    // -----------------------------------------------------------------------

    pub fn boolean(&mut self) -> bool {
        self.random.boolean(0.5)
    }

    /// `true` with probability `p`, which must lie in `[0, 1]`.
    pub fn boolean_with(&mut self, p: f64) -> Result<bool, RandomizerError> {
        check_probability(p)?;
        Ok(self.random.boolean(p))
    }

    /// `true` nine times out of ten.
    pub fn frequently(&mut self) -> bool {
        self.random.boolean(FREQUENTLY)
    }

    /// `false` nine times out of ten.
    pub fn rarely(&mut self) -> bool {
        !self.frequently()
    }

    // -----------------------------------------------------------------------
    // Strings
    // -----------------------------------------------------------------------

    /// `length` characters drawn from `generator`.
    pub fn string<G: CharGenerator + ?Sized>(&mut self, generator: &G, length: usize) -> String {
        random_string(&mut self.random, generator, length)
    }

    /// A string of 0 to [`MAX_ANY_LENGTH`] characters from `generator`.
    pub fn string_any_length<G: CharGenerator + ?Sized>(&mut self, generator: &G) -> String {
        let length = self.random.index(MAX_ANY_LENGTH + 1);
        self.string(generator, length)
    }

    /// Printable ASCII.
    pub fn ascii(&mut self, length: usize) -> String {
        self.string(&ASCII, length)
    }

    pub fn ascii_digits(&mut self, length: usize) -> String {
        self.string(&ASCII_DIGITS, length)
    }

    pub fn ascii_lowercase(&mut self, length: usize) -> String {
        self.string(&ASCII_LOWERCASE, length)
    }

    pub fn ascii_uppercase(&mut self, length: usize) -> String {
        self.string(&ASCII_UPPERCASE, length)
    }

    pub fn ascii_alpha_numeric(&mut self, length: usize) -> String {
        self.string(ascii_alpha_numeric(), length)
    }

    pub fn ascii_alpha_numeric_with_spaces(&mut self, length: usize) -> String {
        self.string(ascii_alpha_numeric_with_spaces(), length)
    }

    /// Any Unicode scalar values. `length` counts characters.
    pub fn unicode(&mut self, length: usize) -> String {
        self.string(&UnicodeChars, length)
    }

    // -----------------------------------------------------------------------
    // Mixed values and choice
    // -----------------------------------------------------------------------

    /// A value of a random primitive kind.
    pub fn primitive_value(&mut self) -> Primitive {
        match PRIMITIVE_WEIGHTS.pick(&mut self.random) {
            0 => Primitive::Null,
            1 => Primitive::NaN,
            2 => Primitive::Undefined,
            3 => Primitive::Number(self.number()),
            4 => Primitive::Boolean(self.boolean()),
            _ => Primitive::String(self.string_any_length(&ASCII)),
        }
    }

    /// One of `items`, each equally likely.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, RandomizerError> {
        if items.is_empty() {
            return Err(RandomizerError::InvalidArgument(
                "cannot pick from an empty slice".into(),
            ));
        }
        Ok(&items[self.random.index(items.len())])
    }

    /// One of `items`, chosen with probability proportional to the weight at
    /// the same position.
    pub fn pick_weighted<'a, T>(
        &mut self,
        items: &'a [T],
        weights: &[u32],
    ) -> Result<&'a T, RandomizerError> {
        if items.len() != weights.len() {
            return Err(RandomizerError::InvalidArgument(format!(
                "{} items but {} weights",
                items.len(),
                weights.len()
            )));
        }
        let index = Weights::new(weights)?.pick(&mut self.random);
        Ok(&items[index])
    }

    // -----------------------------------------------------------------------
    // Collections
    // -----------------------------------------------------------------------

    /// `length` values from `draw`. The length may itself be a draw.
    pub fn array<T>(
        &mut self,
        length: impl Into<Source<usize>>,
        draw: impl Fn(&mut Randomizer) -> T,
    ) -> Vec<T> {
        let length = length.into().resolve(self);
        (0..length).map(|_| draw(self)).collect()
    }

    /// `length` pairwise distinct values from `draw`, in the order they were
    /// first produced.
    ///
    /// Fails with `InsufficientUniqueness` if `length * 100` draws do not
    /// produce enough distinct values.
    pub fn unique_array<T: PartialEq>(
        &mut self,
        length: impl Into<Source<usize>>,
        draw: impl Fn(&mut Randomizer) -> T,
    ) -> Result<Vec<T>, RandomizerError> {
        let length = length.into().resolve(self);
        let mut values = Vec::with_capacity(length);
        self.fill_unique(length, draw, |value| {
            if values.contains(&value) {
                false
            } else {
                values.push(value);
                true
            }
        })?;
        Ok(values)
    }

    /// A set of `length` distinct values from `draw`. Same attempt budget as
    /// [`Randomizer::unique_array`].
    pub fn set<T: Hash + Eq>(
        &mut self,
        length: impl Into<Source<usize>>,
        draw: impl Fn(&mut Randomizer) -> T,
    ) -> Result<HashSet<T>, RandomizerError> {
        let length = length.into().resolve(self);
        let mut values = HashSet::with_capacity(length);
        self.fill_unique(length, draw, |value| values.insert(value))?;
        Ok(values)
    }

    /// Feed draws to `accept` until it has accepted `length` of them.
    fn fill_unique<T>(
        &mut self,
        length: usize,
        draw: impl Fn(&mut Randomizer) -> T,
        mut accept: impl FnMut(T) -> bool,
    ) -> Result<(), RandomizerError> {
        let attempts = length.saturating_mul(UNIQUE_ATTEMPT_FACTOR);
        let mut found = 0;
        for _ in 0..attempts {
            if found == length {
                break;
            }
            if accept(draw(self)) {
                found += 1;
            }
        }
        if found < length {
            tracing::warn!(
                seed = %self.seed,
                requested = length,
                found,
                attempts,
                "draw exhausted before producing enough unique values"
            );
            return Err(RandomizerError::InsufficientUniqueness {
                requested: length,
                found,
                attempts,
            });
        }
        Ok(())
    }

    /// A version 4 UUID in canonical lowercase form.
    pub fn uuid(&mut self) -> String {
        random_uuid(&mut self.random)
    }
}

// ---------------------------------------------------------------------------
// Argument checks
// ---------------------------------------------------------------------------

pub(crate) fn check_number_range(min: f64, max: f64) -> Result<(), RandomizerError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(RandomizerError::InvalidArgument(format!(
            "bounds must be finite (got {min}, {max})"
        )));
    }
    if min > max {
        return Err(RandomizerError::InvalidArgument(format!(
            "min must be <= max (got {min}, {max})"
        )));
    }
    Ok(())
}

pub(crate) fn check_int_range(min: i64, max: i64) -> Result<(), RandomizerError> {
    let safe = MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER;
    if !safe.contains(&min) || !safe.contains(&max) {
        return Err(RandomizerError::InvalidArgument(format!(
            "bounds must be safe integers (got {min}, {max})"
        )));
    }
    if min > max {
        return Err(RandomizerError::InvalidArgument(format!(
            "min must be <= max (got {min}, {max})"
        )));
    }
    Ok(())
}

pub(crate) fn check_probability(p: f64) -> Result<(), RandomizerError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(RandomizerError::InvalidArgument(format!(
            "probability must be between 0 and 1 (got {p})"
        )));
    }
    Ok(())
}
