// Error type for the random source and the draws built directly on it.

use thiserror::Error;

/// Errors produced by seed parsing and weighted choice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// The seed string is empty, is not base-16, or does not fit in 64 bits.
    #[error("invalid seed {input:?}: expected a hexadecimal integer")]
    InvalidSeed { input: String },

    /// A weighted choice was requested over no weights at all.
    #[error("cannot pick from an empty weight list")]
    EmptyWeights,

    /// Every weight is zero, so no index can be chosen.
    #[error("weights must sum to at least 1")]
    ZeroTotalWeight,

    /// The weights do not fit in a 64-bit sum.
    #[error("sum of weights overflows")]
    WeightOverflow,
}
