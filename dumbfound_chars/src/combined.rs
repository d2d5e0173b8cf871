// Weighted unions of character generators.
//
// A `CombinedChars` concatenates the enumerations of its components: `get`
// walks the component lengths until the index falls inside one, then
// delegates. Sampling has two modes:
//
// - Size-weighted (the default). Every component's weight is its own
//   `len()`, so every character of the union is equally likely. `pick` draws
//   one uniform index over the combined length and calls `get`.
// - Custom probability. Set as soon as any component is added with an
//   explicit weight, or a bare component itself uses custom probability.
//   Weights are normalised into cumulative thresholds in `[0, 1]` at build
//   time; `pick` draws `number()`, delegates to the first component whose
//   threshold exceeds it, and falls back to the last positively weighted
//   component to absorb rounding at the top edge.
//
// The builder accepts the three ways of describing a component: a bare
// generator (`with`), a `(generator, weight)` pair (`with_weight`) and a
// `Weighted { generator, probability }` value (`with_component`).

use crate::{CharGenerator, CharsError};
use dumbfound_prng::Random;
use std::sync::Arc;

/// A component with an explicit weight.
#[derive(Clone, Debug)]
pub struct Weighted {
    pub generator: Arc<dyn CharGenerator>,
    pub probability: f64,
}

impl Weighted {
    pub fn new<G: CharGenerator + 'static>(generator: G, probability: f64) -> Self {
        Self {
            generator: Arc::new(generator),
            probability,
        }
    }
}

/// Collects components for a [`CombinedChars`].
#[derive(Debug, Default)]
pub struct CombinedBuilder {
    entries: Vec<Weighted>,
    custom_probability: bool,
}

impl CombinedBuilder {
    /// Add a generator weighted by its size.
    pub fn with<G: CharGenerator + 'static>(self, generator: G) -> Self {
        self.with_shared(Arc::new(generator))
    }

    /// Add an already shared generator weighted by its size.
    pub fn with_shared(mut self, generator: Arc<dyn CharGenerator>) -> Self {
        if generator.custom_probability() {
            self.custom_probability = true;
        }
        let probability = generator.len() as f64;
        self.entries.push(Weighted {
            generator,
            probability,
        });
        self
    }

    /// Add a generator with an explicit weight.
    pub fn with_weight<G: CharGenerator + 'static>(self, generator: G, weight: f64) -> Self {
        self.with_component(Weighted::new(generator, weight))
    }

    /// Add a pre-built weighted component.
    pub fn with_component(mut self, component: Weighted) -> Self {
        self.custom_probability = true;
        self.entries.push(component);
        self
    }

    /// Validate the components and compute the sampling thresholds.
    pub fn build(self) -> Result<CombinedChars, CharsError> {
        if self.entries.is_empty() {
            return Err(CharsError::NoComponents);
        }
        for (index, entry) in self.entries.iter().enumerate() {
            if !entry.probability.is_finite() || entry.probability < 0.0 {
                return Err(CharsError::InvalidWeight {
                    index,
                    weight: entry.probability,
                });
            }
            if entry.generator.is_empty() {
                return Err(CharsError::EmptyGenerator { index });
            }
        }
        let total: f64 = self.entries.iter().map(|e| e.probability).sum();
        if total <= 0.0 || !total.is_finite() {
            return Err(CharsError::ZeroTotalWeight);
        }
        Ok(CombinedChars::assemble(self.entries, self.custom_probability))
    }
}

#[derive(Clone, Debug)]
struct Part {
    generator: Arc<dyn CharGenerator>,
    len: usize,
    weight: f64,
    /// Cumulative share of the total weight up to and including this part.
    threshold: f64,
}

/// A weighted union of character generators.
#[derive(Clone, Debug)]
pub struct CombinedChars {
    parts: Vec<Part>,
    len: usize,
    custom_probability: bool,
}

impl CombinedChars {
    pub fn builder() -> CombinedBuilder {
        CombinedBuilder::default()
    }

    /// Compute lengths and thresholds for components that are already known
    /// to be valid.
    pub(crate) fn assemble(entries: Vec<Weighted>, custom_probability: bool) -> Self {
        let total: f64 = entries.iter().map(|e| e.probability).sum();
        let mut len = 0;
        let mut current = 0.0;
        let parts = entries
            .into_iter()
            .map(|entry| {
                let part_len = entry.generator.len();
                len += part_len;
                current += entry.probability / total;
                Part {
                    generator: entry.generator,
                    len: part_len,
                    weight: entry.probability,
                    threshold: current,
                }
            })
            .collect();
        Self {
            parts,
            len,
            custom_probability,
        }
    }

    /// Number of components.
    pub fn component_count(&self) -> usize {
        self.parts.len()
    }

    fn pick_by_threshold(&self, random: &mut Random) -> char {
        let p = random.number();
        let part = self
            .parts
            .iter()
            .find(|part| p < part.threshold)
            .or_else(|| self.parts.iter().rev().find(|part| part.weight > 0.0));
        match part {
            Some(part) => part.generator.pick(random),
            None => char::REPLACEMENT_CHARACTER,
        }
    }
}

impl CharGenerator for CombinedChars {
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Option<char> {
        let mut offset = index;
        for part in &self.parts {
            if offset < part.len {
                return part.generator.get(offset);
            }
            offset -= part.len;
        }
        None
    }

    fn custom_probability(&self) -> bool {
        self.custom_probability
    }

    fn pick(&self, random: &mut Random) -> char {
        if self.custom_probability {
            self.pick_by_threshold(random)
        } else {
            let index = random.index(self.len);
            self.get(index).unwrap_or(char::REPLACEMENT_CHARACTER)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CodepointRange, LiteralChars};
    use std::collections::HashSet;

    fn letters_and_digits() -> CombinedChars {
        CombinedChars::builder()
            .with(CodepointRange::from_chars('a', 'z').unwrap())
            .with(CodepointRange::from_chars('0', '9').unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn length_is_sum_of_components() {
        let combined = letters_and_digits();
        assert_eq!(combined.len(), 36);
        assert!(!combined.custom_probability());
        assert_eq!(combined.component_count(), 2);
    }

    #[test]
    fn get_walks_components_in_order() {
        let combined = letters_and_digits();
        assert_eq!(combined.get(0), Some('a'));
        assert_eq!(combined.get(25), Some('z'));
        assert_eq!(combined.get(26), Some('0'));
        assert_eq!(combined.get(35), Some('9'));
        assert_eq!(combined.get(36), None);

        let all: HashSet<char> = (0..combined.len()).filter_map(|i| combined.get(i)).collect();
        assert_eq!(all.len(), 36);
    }

    #[test]
    fn size_weighted_pick_is_uniform_over_characters() {
        let combined = letters_and_digits();
        let mut rng = Random::new(101);
        let n = 36_000;
        let digits = (0..n)
            .filter(|_| combined.pick(&mut rng).is_ascii_digit())
            .count();
        let share = digits as f64 / n as f64;
        assert!((share - 10.0 / 36.0).abs() < 0.02, "digit share {share}");
    }

    #[test]
    fn explicit_weights_switch_to_custom_probability() {
        let combined = CombinedChars::builder()
            .with_weight(CodepointRange::from_chars('a', 'z').unwrap(), 1.0)
            .with_weight(LiteralChars::new(" ").unwrap(), 1.0)
            .build()
            .unwrap();
        assert!(combined.custom_probability());
        assert_eq!(combined.len(), 27);

        let mut rng = Random::new(55);
        let n = 20_000;
        let spaces = (0..n).filter(|_| combined.pick(&mut rng) == ' ').count();
        let share = spaces as f64 / n as f64;
        assert!((share - 0.5).abs() < 0.02, "space share {share}");
    }

    #[test]
    fn object_form_matches_pair_form() {
        let pair = CombinedChars::builder()
            .with_weight(LiteralChars::new("ab").unwrap(), 3.0)
            .with_weight(LiteralChars::new("c").unwrap(), 1.0)
            .build()
            .unwrap();
        let object = CombinedChars::builder()
            .with_component(Weighted::new(LiteralChars::new("ab").unwrap(), 3.0))
            .with_component(Weighted {
                generator: Arc::new(LiteralChars::new("c").unwrap()),
                probability: 1.0,
            })
            .build()
            .unwrap();

        let mut a = Random::new(9);
        let mut b = Random::new(9);
        for _ in 0..500 {
            assert_eq!(pair.pick(&mut a), object.pick(&mut b));
        }
    }

    #[test]
    fn zero_weight_component_is_never_picked() {
        let combined = CombinedChars::builder()
            .with_weight(LiteralChars::new("x").unwrap(), 0.0)
            .with_weight(LiteralChars::new("y").unwrap(), 2.0)
            .with_weight(LiteralChars::new("z").unwrap(), 0.0)
            .build()
            .unwrap();
        let mut rng = Random::new(12);
        for _ in 0..5_000 {
            assert_eq!(combined.pick(&mut rng), 'y');
        }
        // Still enumerable through `get`.
        assert_eq!(combined.get(0), Some('x'));
    }

    #[test]
    fn nested_custom_generator_propagates() {
        let inner = CombinedChars::builder()
            .with_weight(LiteralChars::new("a").unwrap(), 1.0)
            .build()
            .unwrap();
        let outer = CombinedChars::builder()
            .with(inner)
            .with(LiteralChars::new("b").unwrap())
            .build()
            .unwrap();
        assert!(outer.custom_probability());
    }

    #[test]
    fn shared_components() {
        let digits: Arc<dyn CharGenerator> = Arc::new(CodepointRange::from_chars('0', '9').unwrap());
        let combined = CombinedChars::builder()
            .with_shared(digits.clone())
            .with_shared(digits)
            .build();
        // Sharing is allowed; the duplicate enumeration is the caller's choice.
        assert_eq!(combined.unwrap().len(), 20);
    }

    #[test]
    fn invalid_builds_are_rejected() {
        assert!(matches!(
            CombinedChars::builder().build(),
            Err(CharsError::NoComponents)
        ));
        assert!(matches!(
            CombinedChars::builder()
                .with_weight(LiteralChars::new("a").unwrap(), -1.0)
                .build(),
            Err(CharsError::InvalidWeight { index: 0, .. })
        ));
        assert!(matches!(
            CombinedChars::builder()
                .with(LiteralChars::new("a").unwrap())
                .with_weight(LiteralChars::new("b").unwrap(), f64::NAN)
                .build(),
            Err(CharsError::InvalidWeight { index: 1, .. })
        ));
        assert!(matches!(
            CombinedChars::builder()
                .with_weight(LiteralChars::new("a").unwrap(), 0.0)
                .build(),
            Err(CharsError::ZeroTotalWeight)
        ));
    }
}
