// Named ASCII character sets.
//
// `ASCII` is the printable range, space (0x20) through tilde (0x7E). The
// alphanumeric sets are built once on first use and shared afterwards.

use crate::combined::{CombinedChars, Weighted};
use crate::{CharGenerator, CodepointRange};
use std::sync::{Arc, OnceLock};

/// Printable ASCII: `' '` through `'~'`.
pub const ASCII: CodepointRange = CodepointRange::inclusive(0x20, 0x7E);

/// `'a'` through `'z'`.
pub const ASCII_LOWERCASE: CodepointRange = CodepointRange::inclusive(0x61, 0x7A);

/// `'A'` through `'Z'`.
pub const ASCII_UPPERCASE: CodepointRange = CodepointRange::inclusive(0x41, 0x5A);

/// `'0'` through `'9'`.
pub const ASCII_DIGITS: CodepointRange = CodepointRange::inclusive(0x30, 0x39);

/// Relative weight of letters and digits against the single space in
/// [`ascii_alpha_numeric_with_spaces`].
const ALNUM_WEIGHT: f64 = 6.0;
const SPACE_WEIGHT: f64 = 1.0;

fn sized(generator: CodepointRange) -> Weighted {
    Weighted {
        probability: generator.len() as f64,
        generator: Arc::new(generator),
    }
}

/// Upper and lower case letters plus digits, uniform over all 62.
pub fn ascii_alpha_numeric() -> &'static CombinedChars {
    static ALNUM: OnceLock<CombinedChars> = OnceLock::new();
    ALNUM.get_or_init(|| {
        CombinedChars::assemble(
            vec![
                sized(ASCII_UPPERCASE),
                sized(ASCII_LOWERCASE),
                sized(ASCII_DIGITS),
            ],
            false,
        )
    })
}

/// Letters and digits with an occasional space: one draw in seven is a space.
pub fn ascii_alpha_numeric_with_spaces() -> &'static CombinedChars {
    static ALNUM_SPACES: OnceLock<CombinedChars> = OnceLock::new();
    ALNUM_SPACES.get_or_init(|| {
        let alnum: Arc<dyn CharGenerator> = Arc::new(ascii_alpha_numeric().clone());
        let space: Arc<dyn CharGenerator> = Arc::new(CodepointRange::inclusive(0x20, 0x20));
        CombinedChars::assemble(
            vec![
                Weighted {
                    generator: alnum,
                    probability: ALNUM_WEIGHT,
                },
                Weighted {
                    generator: space,
                    probability: SPACE_WEIGHT,
                },
            ],
            true,
        )
    })
}
