use std::sync::Arc;

use crate::error::GenerationError;
use crate::generators::traits::PasswordGenerator;
use crate::randomness::RandomSource;

const DIGITS: &[u8] = b"0123456789";

/// Fixed-length digit string; leading zeros allowed.
pub struct NumericCodeGenerator {
    length: usize,
    rng: Arc<dyn RandomSource>,
}

pub type PinCodeGenerator = NumericCodeGenerator;

impl NumericCodeGenerator {
    pub fn new(length: usize, rng: Arc<dyn RandomSource>) -> Self {
        Self { length, rng }
    }
}

impl PasswordGenerator for NumericCodeGenerator {
    fn generate(&self) -> Result<String, GenerationError> {
        Ok((0..self.length)
            .map(|_| char::from(DIGITS[self.rng.index(DIGITS.len())]))
            .collect())
    }
}
