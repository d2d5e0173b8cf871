// Construction errors for character generators. Generators are validated once
// when built; sampling from a built generator cannot fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CharsError {
    /// `start` is greater than `end`.
    #[error("empty codepoint range {start:#X}..={end:#X}")]
    EmptyRange { start: u32, end: u32 },

    /// A bound lies beyond U+10FFFF.
    #[error("codepoint {0:#X} is beyond U+10FFFF")]
    CodepointOutOfRange(u32),

    /// The range overlaps U+D800..=U+DFFF, which has no `char` values.
    #[error("codepoint range {start:#X}..={end:#X} overlaps the surrogate band")]
    SurrogateRange { start: u32, end: u32 },

    #[error("literal generator needs at least one character")]
    EmptyLiteral,

    /// Each character of a literal generator must be distinct.
    #[error("literal generator repeats {0:?}")]
    DuplicateCharacter(char),

    #[error("combined generator needs at least one component")]
    NoComponents,

    /// A component weight is negative, NaN or infinite.
    #[error("component {index} has invalid weight {weight}")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("component weights must sum to more than zero")]
    ZeroTotalWeight,

    /// A component cannot produce any character.
    #[error("component {index} is an empty generator")]
    EmptyGenerator { index: usize },
}
