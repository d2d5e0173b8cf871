// Randomized tests for the built-in test runner.
//
// `randomized_test` runs a test body against a `Randomizer` built from the
// resolved seed. If the body panics, the test name with its seed appended
// (`name [seed=1f3a]`) is logged and written to stderr before the panic
// continues, so the failing run can be replayed with `SEED=1f3a cargo test`.
//
// `randomized_runs` repeats a body a random number of times. With a pinned
// seed there is exactly one run, since every run would be identical anyway.
//
//     #[test]
//     fn parses_any_ascii() {
//         let config = process_config().unwrap();
//         randomized_test("parses_any_ascii", config, |r| {
//             let input = r.ascii(32);
//             assert!(parse(&input).is_ok());
//         });
//     }

use crate::Randomizer;
use crate::config::SeedConfig;
use crate::error::RandomizerError;
use dumbfound_prng::{Random, Seed};
use std::panic::{self, AssertUnwindSafe};

/// `name` with the seed that reproduces it.
pub fn test_name(name: &str, seed: &Seed) -> String {
    format!("{name} [seed={seed}]")
}

/// Run `body` against a randomizer seeded from `config`, reporting the seed
/// if it panics.
pub fn randomized_test<R>(
    name: &str,
    config: &SeedConfig,
    body: impl FnOnce(&mut Randomizer) -> R,
) -> R {
    let mut randomizer = Randomizer::from_config(config);
    let seed = randomizer.seed();
    tracing::debug!(test = %test_name(name, &seed), "starting randomized test");

    match panic::catch_unwind(AssertUnwindSafe(|| body(&mut randomizer))) {
        Ok(value) => value,
        Err(payload) => {
            let full = test_name(name, &seed);
            tracing::error!(test = %full, "randomized test failed");
            eprintln!("failed: {full}");
            panic::resume_unwind(payload)
        }
    }
}

/// Call `runner` with run numbers `1..=n`.
///
/// `n` is 1 when `config` pins a seed. Otherwise `n` is drawn uniformly from
/// `[min, max]` using a freshly generated seed. Returns `n`.
pub fn randomized_runs(
    name: &str,
    min: usize,
    max: usize,
    config: &SeedConfig,
    mut runner: impl FnMut(usize),
) -> Result<usize, RandomizerError> {
    if min > max {
        return Err(RandomizerError::InvalidArgument(format!(
            "min runs must be <= max runs (got {min}, {max})"
        )));
    }

    let runs = if config.has_seed() {
        1
    } else {
        let mut random = Random::from_seed(Seed::generate());
        random.int_between(min as i64, max as i64) as usize
    };
    tracing::debug!(test = name, runs, "randomized runs");

    for run in 1..=runs {
        runner(run);
    }
    Ok(runs)
}
