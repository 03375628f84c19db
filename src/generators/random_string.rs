use std::sync::Arc;

use crate::error::GenerationError;
use crate::generators::traits::PasswordGenerator;
use crate::randomness::RandomSource;

pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// ASCII punctuation, 32 characters.
pub const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

pub struct RandomStringGenerator {
    length: usize,
    alphabet: Vec<char>,
    rng: Arc<dyn RandomSource>,
}

impl RandomStringGenerator {
    pub fn new(
        length: usize,
        include_digits: bool,
        include_symbols: bool,
        rng: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            length,
            alphabet: alphabet(include_digits, include_symbols),
            rng,
        }
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

/// Letters, then digits and symbols when enabled. The three sets are disjoint.
pub fn alphabet(include_digits: bool, include_symbols: bool) -> Vec<char> {
    let mut chars: Vec<char> = LETTERS.chars().collect();
    if include_digits {
        chars.extend(DIGITS.chars());
    }
    if include_symbols {
        chars.extend(SYMBOLS.chars());
    }
    chars
}

impl PasswordGenerator for RandomStringGenerator {
    fn generate(&self) -> Result<String, GenerationError> {
        Ok((0..self.length)
            .map(|_| self.alphabet[self.rng.index(self.alphabet.len())])
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::randomness::{MockRandomSource, ThreadRandom};
    use quickcheck_macros::quickcheck;
    use std::collections::HashSet;

    fn generator(length: usize, digits: bool, symbols: bool) -> RandomStringGenerator {
        RandomStringGenerator::new(length, digits, symbols, Arc::new(ThreadRandom))
    }

    #[quickcheck]
    fn generates_correct_length(len: u16, digits: bool, symbols: bool) -> bool {
        let len = len as usize % 512;
        generator(len, digits, symbols).generate().unwrap().chars().count() == len
    }

    #[quickcheck]
    fn letters_only_by_default(len: u8) -> bool {
        generator(len as usize, false, false)
            .generate()
            .unwrap()
            .chars()
            .all(|c| c.is_ascii_alphabetic())
    }

    #[quickcheck]
    fn output_stays_in_alphabet(len: u8, digits: bool, symbols: bool) -> bool {
        let generator = generator(len as usize, digits, symbols);
        let password = generator.generate().unwrap();
        password.chars().all(|c| generator.alphabet().contains(&c))
    }

    #[test]
    fn alphabet_sizes() {
        assert_eq!(alphabet(false, false).len(), 52);
        assert_eq!(alphabet(true, false).len(), 62);
        assert_eq!(alphabet(false, true).len(), 84);
        assert_eq!(alphabet(true, true).len(), 94);
    }

    #[test]
    fn alphabet_has_no_duplicates() {
        let chars = alphabet(true, true);
        let unique: HashSet<char> = chars.iter().copied().collect();
        assert_eq!(unique.len(), chars.len());
    }

    #[test]
    fn flags_strictly_widen_alphabet() {
        let base: HashSet<char> = alphabet(false, false).into_iter().collect();
        let digits: HashSet<char> = alphabet(true, false).into_iter().collect();
        let symbols: HashSet<char> = alphabet(false, true).into_iter().collect();
        assert!(base.is_subset(&digits) && base.len() < digits.len());
        assert!(base.is_subset(&symbols) && base.len() < symbols.len());
    }

    #[test]
    fn symbols_are_ascii_punctuation() {
        assert!(SYMBOLS.chars().all(|c| c.is_ascii_punctuation()));
        assert_eq!(SYMBOLS.len(), 32);
    }

    #[test]
    fn zero_length_is_empty() {
        assert_eq!(generator(0, true, true).generate().unwrap(), "");
    }

    #[test]
    fn picks_by_source_index() {
        let mut rng = MockRandomSource::new();
        rng.expect_index().returning(|upper| upper - 1);

        let generator = RandomStringGenerator::new(3, true, false, Arc::new(rng));
        assert_eq!(generator.generate().unwrap(), "999");
    }

    #[test]
    fn handles_long_passwords() {
        assert_eq!(generator(800, true, true).generate().unwrap().len(), 800);
    }
}
