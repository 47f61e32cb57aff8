//! Numeric generator variant rewriting zero digits.

use rand::Rng;

use super::numeric::NumericGenerator;
use super::rng::secure_rng;
use super::traits::CodeGenerator;

/// Numeric codes with every `'0'` digit replaced by a fresh draw in `1..=9`
///
/// The replacement is a textual substitution on the finished numeric draw,
/// not rejection sampling: two distinct raw draws can collapse to the same
/// zero-free code. Codes issued by earlier deployments were produced this
/// way, so the behavior is kept unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumericNo0Generator;

/// Replaces each `'0'` with the next digit drawn from `replacement`
///
/// Every zero gets its own draw.
fn replace_zeros(code: String, mut replacement: impl FnMut() -> char) -> String {
    code.chars()
        .map(|digit| if digit == '0' { replacement() } else { digit })
        .collect()
}

impl CodeGenerator for NumericNo0Generator {
    fn generate(&self, length: usize) -> String {
        let mut rng = secure_rng();

        replace_zeros(NumericGenerator.generate(length), || {
            char::from(b'0' + rng.gen_range(1..=9u8))
        })
    }
}
