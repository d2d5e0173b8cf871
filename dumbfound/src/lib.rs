// Seeded random test data.
//
// The entry point is `Randomizer` (`randomizer.rs`): a seeded source with
// helpers for numbers, evil numbers, booleans, strings, mixed primitive
// values, choices, collections and UUIDs. Everything it draws is determined
// by its `Seed`, so a failing test can be replayed exactly from the seed it
// printed.
//
// Supporting modules:
// - `config.rs`: `SeedConfig`, where a pinned seed comes from (the `SEED`
//   environment variable by default).
// - `draw.rs` and `source.rs`: deferred draws, for passing "a value to be
//   drawn later" to collection helpers.
// - `harness.rs`: `randomized_test` and `randomized_runs` for `#[test]`
//   functions.
//
// The lower layers are re-exported: `dumbfound_prng` (the Lehmer source,
// seeds, weighted choice, evil numbers, UUIDs) and `dumbfound_chars`
// (character generators and the Unicode block table).
//
// **Critical constraint:** the sequence of values for a given seed is part of
// the contract. Changing the order or number of underlying draws any helper
// makes changes every recorded seed's meaning.

pub mod config;
pub mod draw;
pub mod harness;
pub mod randomizer;
pub mod source;

mod error;

pub use config::{SeedConfig, process_config};
pub use draw::Draw;
pub use error::RandomizerError;
pub use harness::{randomized_runs, randomized_test, test_name};
pub use randomizer::{Primitive, Randomizer};
pub use source::Source;

pub use dumbfound_chars as chars;
pub use dumbfound_prng as prng;
pub use dumbfound_prng::{Random, Seed};
