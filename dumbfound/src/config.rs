// Seed resolution.
//
// A randomized test is reproducible when its seed can be pinned from the
// outside. `SeedConfig` carries that pin: the name of the environment
// variable to consult and the seed read from it, if any. `resolve` returns
// the pinned seed or generates a fresh one.
//
// The environment is only ever read by `from_env` (and `process_config`,
// which caches one `from_env` result for the life of the process). Tests
// build configs with `from_lookup` or `with_seed` and never touch the real
// environment; `dumbfound_prng` never reads it at all.

use dumbfound_prng::{RandomError, Seed};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Environment variable consulted by [`SeedConfig::from_env`].
pub const DEFAULT_ENV_VAR: &str = "SEED";

/// Where a test's seed comes from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Name of the environment variable holding a hex seed.
    pub env_var: String,
    /// The pinned seed, if one was configured.
    pub seed: Option<Seed>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            env_var: DEFAULT_ENV_VAR.to_string(),
            seed: None,
        }
    }
}

impl SeedConfig {
    /// A config pinned to `seed`.
    pub fn with_seed(seed: Seed) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Read `SEED` from the process environment.
    pub fn from_env() -> Result<Self, RandomError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the seed through `lookup`, which maps a variable name to its
    /// value. An unset or blank variable leaves the seed unpinned; a value
    /// that is not a hex integer is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RandomError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let env_var = DEFAULT_ENV_VAR.to_string();
        let seed = match lookup(&env_var) {
            Some(value) if !value.trim().is_empty() => {
                let seed = Seed::from_hex(&value)?;
                tracing::debug!(%env_var, %seed, "seed pinned from environment");
                Some(seed)
            }
            _ => None,
        };
        Ok(Self { env_var, seed })
    }

    pub fn has_seed(&self) -> bool {
        self.seed.is_some()
    }

    /// The pinned seed, or a freshly generated one.
    pub fn resolve(&self) -> Seed {
        match self.seed {
            Some(seed) => seed,
            None => {
                let seed = Seed::generate();
                tracing::debug!(%seed, "no seed pinned, generated one");
                seed
            }
        }
    }
}

/// The process-wide config, read from the environment on first use.
///
/// A malformed `SEED` is reported on every call rather than silently
/// replaced by a generated seed.
pub fn process_config() -> Result<&'static SeedConfig, RandomError> {
    static CONFIG: OnceLock<Result<SeedConfig, RandomError>> = OnceLock::new();
    CONFIG
        .get_or_init(SeedConfig::from_env)
        .as_ref()
        .map_err(Clone::clone)
}
