// Composable character generators and random strings.
//
// A `CharGenerator` describes an alphabet: how many distinct characters it
// has (`len`), a fixed enumeration of them (`get`), and how to sample one
// from a `Random` (`pick`). Generators are immutable once built and can be
// shared across threads and across any number of `Random` sources.
//
// Variants:
// - `CodepointRange` (`range.rs`): a closed codepoint interval.
// - `LiteralChars` (`literal.rs`): an explicit list of characters.
// - `CombinedChars` (`combined.rs`): a weighted union of other generators.
// - `UnicodeChars` (`unicode.rs`): every scalar value, surrogates excluded.
//
// Named sets live in `ascii.rs` (printable ASCII, letters, digits) and
// `blocks.rs` (one range per named Unicode block). `string.rs` turns any
// generator into random strings.
//
// **Invariant:** for every generator, `get(i)` for `i < len()` is injective
// and returns `Some`, and the set of those characters is exactly what `pick`
// can return.

pub mod ascii;
pub mod blocks;
pub mod combined;
pub mod literal;
pub mod range;
pub mod string;
pub mod unicode;

mod error;

pub use blocks::{UNICODE_BLOCKS, UnicodeBlock, unicode_block};
pub use combined::{CombinedBuilder, CombinedChars, Weighted};
pub use error::CharsError;
pub use literal::LiteralChars;
pub use range::CodepointRange;
pub use string::random_string;
pub use unicode::UnicodeChars;

use dumbfound_prng::Random;
use std::fmt;
use std::sync::Arc;

/// A sampleable alphabet of characters.
pub trait CharGenerator: fmt::Debug + Send + Sync {
    /// Number of distinct characters this generator can produce.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The character at `index` in this generator's fixed enumeration, or
    /// `None` if `index >= len()`.
    fn get(&self, index: usize) -> Option<char>;

    /// Whether `pick` follows caller-supplied weights rather than sampling
    /// uniformly over `0..len()`.
    fn custom_probability(&self) -> bool {
        false
    }

    /// Draw one character.
    fn pick(&self, random: &mut Random) -> char;
}

impl<G: CharGenerator + ?Sized> CharGenerator for Arc<G> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<char> {
        (**self).get(index)
    }

    fn custom_probability(&self) -> bool {
        (**self).custom_probability()
    }

    fn pick(&self, random: &mut Random) -> char {
        (**self).pick(random)
    }
}

impl<G: CharGenerator + ?Sized> CharGenerator for &G {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<char> {
        (**self).get(index)
    }

    fn custom_probability(&self) -> bool {
        (**self).custom_probability()
    }

    fn pick(&self, random: &mut Random) -> char {
        (**self).pick(random)
    }
}

/// Map a codepoint that a validated generator produced to its `char`.
///
/// Generators only ever hand this scalar values, so the replacement
/// character is never observed.
pub(crate) fn scalar(codepoint: u32) -> char {
    char::from_u32(codepoint).unwrap_or(char::REPLACEMENT_CHARACTER)
}
