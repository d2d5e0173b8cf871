// Random strings from any character generator.

use crate::CharGenerator;
use dumbfound_prng::Random;

/// Draw `length` characters from `generator`, in order.
///
/// `length` counts characters, not bytes.
pub fn random_string<G: CharGenerator + ?Sized>(
    random: &mut Random,
    generator: &G,
    length: usize,
) -> String {
    (0..length).map(|_| generator.pick(random)).collect()
}
