// Closed codepoint intervals.
//
// `CodepointRange { start, end }` covers `start..=end`: `len` is
// `end - start + 1`, `get(i)` is `start + i`, and `pick` draws
// `int_between(start, end)`, so enumeration and sampling cover the same set
// including `end`. Ranges may not touch the surrogate band, which keeps every
// index mapped to a real `char`.

use crate::unicode::{MAX_CODEPOINT, SURROGATE_END, SURROGATE_START};
use crate::{CharGenerator, CharsError, scalar};
use dumbfound_prng::Random;

/// Every character from `start` to `end`, inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CodepointRange {
    start: u32,
    end: u32,
}

impl CodepointRange {
    /// Validate and build a range.
    pub fn new(start: u32, end: u32) -> Result<Self, CharsError> {
        if start > end {
            return Err(CharsError::EmptyRange { start, end });
        }
        if end > MAX_CODEPOINT {
            return Err(CharsError::CodepointOutOfRange(end));
        }
        if start <= SURROGATE_END && end >= SURROGATE_START {
            return Err(CharsError::SurrogateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a range from static bounds, for `const` tables.
    ///
    /// Panics (at compile time inside a `const`) under the same conditions
    /// where [`CodepointRange::new`] returns an error.
    pub const fn inclusive(start: u32, end: u32) -> Self {
        assert!(start <= end, "codepoint range is empty");
        assert!(end <= MAX_CODEPOINT, "codepoint beyond U+10FFFF");
        assert!(
            start > SURROGATE_END || end < SURROGATE_START,
            "codepoint range overlaps the surrogate band"
        );
        Self { start, end }
    }

    /// The range between two characters, inclusive.
    pub fn from_chars(start: char, end: char) -> Result<Self, CharsError> {
        Self::new(u32::from(start), u32::from(end))
    }

    pub const fn start(&self) -> u32 {
        self.start
    }

    pub const fn end(&self) -> u32 {
        self.end
    }

    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end).contains(&u32::from(c))
    }
}

impl CharGenerator for CodepointRange {
    fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    fn get(&self, index: usize) -> Option<char> {
        if index >= self.len() {
            return None;
        }
        char::from_u32(self.start + index as u32)
    }

    fn pick(&self, random: &mut Random) -> char {
        let codepoint = random.int_between(i64::from(self.start), i64::from(self.end));
        scalar(codepoint as u32)
    }
}
