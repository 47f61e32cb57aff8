//! Uniform numeric code generator.

use rand::Rng;

use super::rng::secure_rng;
use super::traits::CodeGenerator;

/// Longest numeric code whose decimal range still fits in a `u64` draw
pub const MAX_NUMERIC_LENGTH: usize = 19;

/// Random integers rendered with exactly `length` decimal digits
///
/// The draw is uniform over the inclusive range
/// `[10^(length - 1), 10^length - 1]`, so the leading digit is never zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumericGenerator;

impl NumericGenerator {
    /// Inclusive decimal range for codes of the given length
    ///
    /// Lengths are clamped to `1..=MAX_NUMERIC_LENGTH`.
    fn range_for_length(length: usize) -> (u64, u64) {
        let length = length.clamp(1, MAX_NUMERIC_LENGTH) as u32;

        let min = 10u64.pow(length - 1);
        let max = min
            .checked_mul(10)
            .map(|upper| upper - 1)
            .unwrap_or(u64::MAX);

        (min, max)
    }
}

impl CodeGenerator for NumericGenerator {
    fn generate(&self, length: usize) -> String {
        let (min, max) = Self::range_for_length(length);
        let mut rng = secure_rng();

        rng.gen_range(min..=max).to_string()
    }
}
