// Generators over an explicit list of characters.

use crate::{CharGenerator, CharsError};
use dumbfound_prng::Random;
use std::collections::HashSet;

/// The characters of a string, in order. Each character must be distinct so
/// that `get` stays injective.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralChars {
    chars: Vec<char>,
}

impl LiteralChars {
    pub fn new(characters: &str) -> Result<Self, CharsError> {
        if characters.is_empty() {
            return Err(CharsError::EmptyLiteral);
        }
        let mut seen = HashSet::new();
        for c in characters.chars() {
            if !seen.insert(c) {
                return Err(CharsError::DuplicateCharacter(c));
            }
        }
        Ok(Self {
            chars: characters.chars().collect(),
        })
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

impl CharGenerator for LiteralChars {
    fn len(&self) -> usize {
        self.chars.len()
    }

    fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    fn pick(&self, random: &mut Random) -> char {
        self.chars[random.index(self.chars.len())]
    }
}
