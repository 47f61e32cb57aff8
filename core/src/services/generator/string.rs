//! Random alphanumeric code generator.

use rand::distributions::Alphanumeric;
use rand::Rng;

use super::rng::secure_rng;
use super::traits::CodeGenerator;

/// Fixed-length random alphanumeric codes
#[derive(Debug, Default, Clone, Copy)]
pub struct StringGenerator;

impl CodeGenerator for StringGenerator {
    fn generate(&self, length: usize) -> String {
        secure_rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}
