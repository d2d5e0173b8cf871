// All of Unicode: every scalar value from U+0000 to U+10FFFF.
//
// The surrogate band U+D800..=U+DFFF holds no characters, so it is cut out of
// the index space: indices below 0xD800 map to themselves and indices from
// 0xD800 up are shifted past the band by its width (0x800). The enumeration
// stays contiguous and strictly increasing, and `len` counts only real
// characters.

use crate::CharGenerator;
use dumbfound_prng::Random;

/// Highest Unicode codepoint.
pub const MAX_CODEPOINT: u32 = 0x10_FFFF;

/// First codepoint of the surrogate band.
pub const SURROGATE_START: u32 = 0xD800;

/// Last codepoint of the surrogate band.
pub const SURROGATE_END: u32 = 0xDFFF;

const SURROGATE_WIDTH: u32 = SURROGATE_END - SURROGATE_START + 1;

/// Every Unicode scalar value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnicodeChars;

impl UnicodeChars {
    /// Number of scalar values: all codepoints minus the surrogate band.
    pub const LEN: usize = (MAX_CODEPOINT + 1 - SURROGATE_WIDTH) as usize;
}

impl CharGenerator for UnicodeChars {
    fn len(&self) -> usize {
        Self::LEN
    }

    fn get(&self, index: usize) -> Option<char> {
        if index >= Self::LEN {
            return None;
        }
        let index = index as u32;
        let codepoint = if index >= SURROGATE_START {
            index + SURROGATE_WIDTH
        } else {
            index
        };
        char::from_u32(codepoint)
    }

    fn pick(&self, random: &mut Random) -> char {
        let index = random.index(Self::LEN);
        // Indices below `LEN` always map to a scalar value.
        self.get(index).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_excludes_surrogates() {
        assert_eq!(UnicodeChars.len(), 0x11_0000 - 0x800);
        assert_eq!(UnicodeChars.len(), 1_112_064);
    }

    #[test]
    fn skips_over_surrogate_band() {
        let u = UnicodeChars;
        assert_eq!(u.get(0), Some('\0'));
        assert_eq!(u.get(0xD7FF), Some('\u{D7FF}'));
        assert_eq!(u.get(0xD800), Some('\u{E000}'));
        assert_eq!(u.get(UnicodeChars::LEN - 1), Some('\u{10FFFF}'));
        assert_eq!(u.get(UnicodeChars::LEN), None);
    }

    #[test]
    fn enumeration_is_strictly_increasing_across_the_band() {
        let u = UnicodeChars;
        let mut prev = u.get(0xD700).unwrap();
        for i in 0xD701..0xD900 {
            let c = u.get(i).unwrap();
            assert!(c > prev, "{c:?} after {prev:?}");
            prev = c;
        }
    }

    #[test]
    fn picks_are_scalar_values() {
        let mut rng = Random::new(0x1234);
        for _ in 0..10_000 {
            let c = UnicodeChars.pick(&mut rng);
            assert!(!(SURROGATE_START..=SURROGATE_END).contains(&u32::from(c)));
        }
    }
}
