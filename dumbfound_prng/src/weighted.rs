// Weighted choice: pick an index with probability proportional to its weight.
//
// One draw per pick: `int_between(0, total - 1)`, then a linear walk over the
// running total until it exceeds the draw. Index `i` therefore wins with
// probability `weights[i] / total`, and a zero weight can never win because
// it never moves the running total past the draw.
//
// `Weights` is the validated form. Static strategy tables (see `evil.rs`) are
// checked at compile time through `Weights::from_static`; caller-supplied
// tables go through `Weights::new` or `pick_weighted` and get a `RandomError`.

use crate::{Random, RandomError};

/// A non-empty weight table with a positive total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weights<'a> {
    weights: &'a [u32],
    total: u64,
}

impl<'a> Weights<'a> {
    /// Validate a weight table.
    pub fn new(weights: &'a [u32]) -> Result<Self, RandomError> {
        if weights.is_empty() {
            return Err(RandomError::EmptyWeights);
        }
        let total = weights
            .iter()
            .try_fold(0u64, |acc, &w| acc.checked_add(u64::from(w)))
            .ok_or(RandomError::WeightOverflow)?;
        if total == 0 {
            return Err(RandomError::ZeroTotalWeight);
        }
        Ok(Self { weights, total })
    }

    /// Sum of all weights.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn as_slice(&self) -> &'a [u32] {
        self.weights
    }

    /// Pick an index. Consumes exactly one draw.
    pub fn pick(&self, random: &mut Random) -> usize {
        let picked = random.int_between(0, self.total as i64 - 1) as u64;

        let mut current = 0u64;
        for (i, &w) in self.weights.iter().enumerate() {
            current += u64::from(w);
            if current > picked {
                return i;
            }
        }

        // `picked < total`, so the walk above always returns; fall back to the
        // last selectable index rather than a zero weight.
        self.weights.iter().rposition(|&w| w > 0).unwrap_or(0)
    }
}

impl Weights<'static> {
    /// Build a table from static data, for use in `const` items.
    ///
    /// Panics (at compile time when used in a `const`) if the table is empty
    /// or sums to zero.
    pub const fn from_static(weights: &'static [u32]) -> Self {
        assert!(!weights.is_empty(), "weight table must not be empty");
        let mut total = 0u64;
        let mut i = 0;
        while i < weights.len() {
            total += weights[i] as u64;
            i += 1;
        }
        assert!(total > 0, "weight table must sum to at least 1");
        Self { weights, total }
    }
}

/// Pick an index from `weights` proportionally to each weight.
///
/// Fails on an empty table or one whose weights sum to zero.
pub fn pick_weighted(random: &mut Random, weights: &[u32]) -> Result<usize, RandomError> {
    Ok(Weights::new(weights)?.pick(random))
}
