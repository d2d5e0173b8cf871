// Errors returned by the `Randomizer` facade.
//
// Facade methods validate every argument before it reaches the core source,
// which asserts on contract violations instead. Errors from the lower crates
// are wrapped unchanged.

use dumbfound_chars::CharsError;
use dumbfound_prng::RandomError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RandomizerError {
    #[error(transparent)]
    Random(#[from] RandomError),

    #[error(transparent)]
    Chars(#[from] CharsError),

    /// An argument is out of its documented domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A unique collection could not be filled before the attempt budget ran
    /// out.
    #[error(
        "only {found} of {requested} unique values after {attempts} attempts; \
         the draw produces too few distinct values"
    )]
    InsufficientUniqueness {
        requested: usize,
        found: usize,
        attempts: usize,
    },
}
