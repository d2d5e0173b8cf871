// CLI for drawing values from a seeded randomizer.
//
// Prints the seed first, then one value per line. Passing the printed seed
// back with `--seed` (or through `SEED`) reproduces the same output.
//
// Usage:
//   dumbfound [OPTIONS]
//     --seed <HEX>       Seed to use (default: $SEED, else generated)
//     --kind <KIND>      uuid, number, int, evil, gaussian, ascii, unicode,
//                        alnum (default: uuid)
//     --count <N>        Values to print (default: 1)
//     --length <N>       String length (default: random, 0-20)
//     --min <X>          Lower bound for number, int and evil
//     --max <X>          Upper bound for number, int and evil
//
// Log output goes to stderr and is filtered by `RUST_LOG` (default: warn).

use dumbfound::randomizer::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER, NUMBER_RANGE};
use dumbfound::{Randomizer, RandomizerError, Seed, SeedConfig};
use dumbfound_chars::ascii::{ASCII, ascii_alpha_numeric};
use dumbfound_chars::{CharGenerator, UnicodeChars};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Uuid,
    Number,
    Int,
    Evil,
    Gaussian,
    Ascii,
    Unicode,
    Alnum,
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "uuid" => Kind::Uuid,
            "number" => Kind::Number,
            "int" => Kind::Int,
            "evil" => Kind::Evil,
            "gaussian" => Kind::Gaussian,
            "ascii" => Kind::Ascii,
            "unicode" => Kind::Unicode,
            "alnum" => Kind::Alnum,
            other => return Err(format!("unknown kind: {other}")),
        })
    }
}

#[derive(Debug)]
struct CliConfig {
    seed: Option<Seed>,
    kind: Kind,
    count: usize,
    length: Option<usize>,
    min: Option<f64>,
    max: Option<f64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            kind: Kind::Uuid,
            count: 1,
            length: None,
            min: None,
            max: None,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = parse_args();

    if let Err(e) = run(&config) {
        eprintln!("dumbfound: {e}");
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> Result<(), RandomizerError> {
    let seed_config = match config.seed {
        Some(seed) => SeedConfig::with_seed(seed),
        None => SeedConfig::from_env()?,
    };
    let mut randomizer = Randomizer::from_config(&seed_config);
    tracing::info!(seed = %randomizer.seed(), kind = ?config.kind, count = config.count, "drawing");

    println!("seed={}", randomizer.seed());
    for _ in 0..config.count {
        println!("{}", draw_one(&mut randomizer, config)?);
    }
    Ok(())
}

fn draw_one(r: &mut Randomizer, config: &CliConfig) -> Result<String, RandomizerError> {
    Ok(match config.kind {
        Kind::Uuid => r.uuid(),
        Kind::Number => {
            let (min, max) = number_bounds(config);
            r.number_between(min, max)?.to_string()
        }
        Kind::Int => {
            let min = match (config.min, config.max) {
                (None, Some(_)) => 0,
                (min, _) => min.map(integral).transpose()?.unwrap_or(MIN_SAFE_INTEGER),
            };
            let max = config.max.map(integral).transpose()?.unwrap_or(MAX_SAFE_INTEGER);
            r.int_between(min, max)?.to_string()
        }
        Kind::Evil => {
            let (min, max) = number_bounds(config);
            r.evil_number_between(min, max)?.to_string()
        }
        Kind::Gaussian => r.gaussian().to_string(),
        Kind::Ascii => string(r, &ASCII, config.length),
        Kind::Unicode => string(r, &UnicodeChars, config.length),
        Kind::Alnum => string(r, ascii_alpha_numeric(), config.length),
    })
}

/// `--max` alone bounds from zero, as `number_up_to` does.
fn number_bounds(config: &CliConfig) -> (f64, f64) {
    match (config.min, config.max) {
        (None, None) => (-NUMBER_RANGE, NUMBER_RANGE),
        (None, Some(max)) => (0.0, max),
        (Some(min), None) => (min, NUMBER_RANGE),
        (Some(min), Some(max)) => (min, max),
    }
}

fn integral(x: f64) -> Result<i64, RandomizerError> {
    if x.fract() != 0.0 || !x.is_finite() {
        return Err(RandomizerError::InvalidArgument(format!(
            "{x} is not an integer"
        )));
    }
    Ok(x as i64)
}

fn string<G: CharGenerator + ?Sized>(
    r: &mut Randomizer,
    generator: &G,
    length: Option<usize>,
) -> String {
    match length {
        Some(length) => r.string(generator, length),
        None => r.string_any_length(generator),
    }
}

/// Parse command-line arguments into a `CliConfig`.
fn parse_args() -> CliConfig {
    let mut config = CliConfig::default();
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                config.seed = args.get(i).and_then(|s| Seed::from_hex(s).ok()).or_else(|| {
                    eprintln!("--seed requires a hexadecimal seed");
                    std::process::exit(1);
                });
            }
            "--kind" => {
                i += 1;
                config.kind = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!(
                        "--kind requires one of: uuid, number, int, evil, gaussian, ascii, unicode, alnum"
                    );
                    std::process::exit(1);
                });
            }
            "--count" => {
                i += 1;
                config.count = args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--count requires a valid number");
                    std::process::exit(1);
                });
            }
            "--length" => {
                i += 1;
                config.length = args.get(i).and_then(|s| s.parse().ok()).or_else(|| {
                    eprintln!("--length requires a valid number");
                    std::process::exit(1);
                });
            }
            "--min" => {
                i += 1;
                config.min = args.get(i).and_then(|s| s.parse().ok()).or_else(|| {
                    eprintln!("--min requires a number");
                    std::process::exit(1);
                });
            }
            "--max" => {
                i += 1;
                config.max = args.get(i).and_then(|s| s.parse().ok()).or_else(|| {
                    eprintln!("--max requires a number");
                    std::process::exit(1);
                });
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}

fn print_usage() {
    println!("Usage: dumbfound [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --seed <HEX>       Seed to use (default: $SEED, else generated)");
    println!("  --kind <KIND>      uuid, number, int, evil, gaussian, ascii, unicode, alnum");
    println!("                     (default: uuid)");
    println!("  --count <N>        Values to print (default: 1)");
    println!("  --length <N>       String length (default: random, 0-20)");
    println!("  --min <X>          Lower bound for number, int and evil");
    println!("  --max <X>          Upper bound for number, int and evil");
    println!("  --help, -h         Show this help");
}
