// End-to-end tests through the public API only.
//
// Covers the reproduction loop a failing randomized test relies on: resolve a
// seed from configuration, draw a mixed sequence of values, print the seed,
// and replay the same sequence from the printed hex. Also exercises custom
// character generators and block tables through the facade, and the failure
// modes a caller sees as `Err` values.

use dumbfound::chars::ascii::ASCII_DIGITS;
use dumbfound::chars::{CharGenerator, CombinedChars, LiteralChars, unicode_block};
use dumbfound::{
    Primitive, Randomizer, RandomizerError, Seed, SeedConfig, Source, draw, randomized_test,
    test_name,
};
use std::sync::Arc;

/// Helper: a fixed mixed call sequence, rendered to strings for comparison.
fn transcript(r: &mut Randomizer) -> Vec<String> {
    let mut out = Vec::new();
    out.push(r.int().to_string());
    out.push(r.number_between(-1.0, 1.0).unwrap().to_string());
    out.push(r.evil_number_between(0.0, 1.0).unwrap().to_string());
    out.push(r.gaussian().to_string());
    out.push(r.boolean().to_string());
    out.push(r.ascii_alpha_numeric_with_spaces(12));
    out.push(r.unicode(4));
    out.push(format!("{:?}", r.primitive_value()));
    out.push(r.pick(&["x", "y", "z"]).unwrap().to_string());
    out.push(r.uuid());
    out.push(format!("{:?}", r.array(3usize, draw::int_up_to(9).unwrap())));
    out
}

#[test]
fn printed_seed_replays_the_run() {
    let config = SeedConfig::from_lookup(|_| Some("0x00C0FFEE".into())).unwrap();
    let (printed, first) = randomized_test("replay", &config, |r| {
        (test_name("replay", &r.seed()), transcript(r))
    });
    assert_eq!(printed, "replay [seed=c0ffee]");

    let hex = printed
        .trim_end_matches(']')
        .rsplit("seed=")
        .next()
        .unwrap();
    let mut replay = Randomizer::from_hex(hex).unwrap();
    assert_eq!(transcript(&mut replay), first);
}

#[test]
fn generated_seeds_replay_too() {
    let config = SeedConfig::default();
    let mut original = Randomizer::from_config(&config);
    let seed = original.seed();
    let first = transcript(&mut original);

    let mut replay = Randomizer::new(seed.to_hex().parse::<Seed>().unwrap());
    assert_eq!(transcript(&mut replay), first);
}

#[test]
fn custom_generators_through_the_facade() {
    let hex = CombinedChars::builder()
        .with(ASCII_DIGITS)
        .with(LiteralChars::new("abcdef").unwrap())
        .build()
        .unwrap();
    assert_eq!(hex.len(), 16);

    let mut r = Randomizer::new(Seed::new(0xf00d));
    let ids = r.unique_array(20usize, |r| r.string(&hex, 8)).unwrap();
    assert_eq!(ids.len(), 20);
    assert!(
        ids.iter()
            .all(|id| id.len() == 8 && id.chars().all(|c| c.is_ascii_hexdigit()))
    );

    let hiragana = unicode_block("Hiragana").unwrap();
    let word = r.string(&hiragana.chars, 5);
    assert!(word.chars().all(|c| hiragana.chars.contains(c)));
}

#[test]
fn weighted_components_with_shared_generators() {
    let vowels: Arc<dyn CharGenerator> = Arc::new(LiteralChars::new("aeiou").unwrap());
    let consonants: Arc<dyn CharGenerator> = Arc::new(LiteralChars::new("bcdfg").unwrap());
    let syllables = CombinedChars::builder()
        .with_component(dumbfound::chars::Weighted {
            generator: vowels,
            probability: 3.0,
        })
        .with_component(dumbfound::chars::Weighted {
            generator: consonants,
            probability: 1.0,
        })
        .build()
        .unwrap();

    let mut r = Randomizer::new(Seed::new(77));
    let text = r.string(&syllables, 20_000);
    let vowel_share = text.chars().filter(|c| "aeiou".contains(*c)).count() as f64 / 20_000.0;
    assert!((vowel_share - 0.75).abs() < 0.02, "vowel share {vowel_share}");
}

#[test]
fn random_lengths_from_sources() {
    let mut r = Randomizer::new(Seed::new(5));
    let length = draw::int_between(1, 3).unwrap();
    let nested = r.array(
        Source::draw(move |r| length(r) as usize),
        draw::ascii_lowercase(2),
    );
    assert!((1..=3).contains(&nested.len()));
}

#[test]
fn caller_errors_are_values() {
    let mut r = Randomizer::new(Seed::new(6));

    assert!(matches!(
        r.pick_weighted(&[1, 2, 3], &[1, 1]),
        Err(RandomizerError::InvalidArgument(_))
    ));
    assert!(matches!(
        r.unique_array(3usize, |r| r.boolean()),
        Err(RandomizerError::InsufficientUniqueness {
            requested: 3,
            found: 2,
            ..
        })
    ));
    assert!(matches!(
        SeedConfig::from_lookup(|_| Some("seed me".into())),
        Err(dumbfound::prng::RandomError::InvalidSeed { .. })
    ));
}

#[test]
fn primitive_values_serialize() {
    let mut r = Randomizer::new(Seed::new(8));
    for _ in 0..100 {
        let value = r.primitive_value();
        let json = serde_json::to_string(&value).unwrap();
        let back: Primitive = serde_json::from_str(&json).unwrap();
        match (&value, &back) {
            (Primitive::Number(a), Primitive::Number(b)) => {
                assert!((a - b).abs() <= a.abs() * 1e-12, "{a} vs {b}");
            }
            (Primitive::NaN, Primitive::NaN) => {}
            _ => assert_eq!(value, back),
        }
    }
}
