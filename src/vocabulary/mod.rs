pub mod corpus;

use std::sync::Arc;

use crate::error::GenerationError;
use crate::randomness::RandomSource;

pub use corpus::{Corpus, DEFAULT_WORDLIST_PATH, init_default_corpus};

/// Splits a single-line word list on spaces, dropping the empty tokens that runs of
/// spaces leave behind.
pub fn split_words(text: &str) -> Vec<String> {
    text.split(' ')
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

/// Ordered, immutable list of candidate words. Never empty and never holds a blank word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Arc<[String]>,
}

impl Vocabulary {
    /// Builds a vocabulary from caller-supplied words, dropping blank entries.
    pub fn new<I, S>(words: I) -> Result<Self, GenerationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !w.trim().is_empty())
            .collect();

        if words.is_empty() {
            return Err(GenerationError::EmptyVocabulary);
        }
        Ok(Self {
            words: words.into(),
        })
    }

    /// Parses word-list text: one word per line, `#` comments and blank lines skipped.
    /// Diceware-style lines (`11111\tabacus`) contribute their last field.
    pub fn parse(text: &str) -> Result<Self, GenerationError> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .filter_map(|l| l.split_whitespace().last()),
        )
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a constructed vocabulary.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Uniformly picks one word.
    pub fn choose(&self, rng: &dyn RandomSource) -> &str {
        &self.words[rng.index(self.words.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::randomness::{MockRandomSource, ThreadRandom};
    use mockall::predicate::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn rejects_empty_input() {
        let result = Vocabulary::new(Vec::<String>::new());
        assert!(matches!(result, Err(GenerationError::EmptyVocabulary)));
    }

    #[test]
    fn rejects_only_blank_words() {
        let result = Vocabulary::new(["", "  ", "\t"]);
        assert!(matches!(result, Err(GenerationError::EmptyVocabulary)));
    }

    #[test]
    fn drops_blank_words_and_keeps_order() {
        let vocabulary = Vocabulary::new(split_words("Amin  jj Erma ")).unwrap();
        assert_eq!(vocabulary.words(), ["Amin", "jj", "Erma"]);
    }

    #[test]
    fn split_words_drops_runs_of_spaces() {
        assert_eq!(split_words("  red green   blue "), ["red", "green", "blue"]);
        assert!(split_words("   ").is_empty());
    }

    #[test]
    fn parse_skips_comments_and_takes_last_field() {
        let text = "# eff short list\n11111\tacid\n\n11112\tacorn\nplain\n";
        let vocabulary = Vocabulary::parse(text).unwrap();
        assert_eq!(vocabulary.words(), ["acid", "acorn", "plain"]);
    }

    #[test]
    fn parse_of_comments_only_is_empty() {
        let result = Vocabulary::parse("# nothing here\n\n");
        assert!(matches!(result, Err(GenerationError::EmptyVocabulary)));
    }

    #[test]
    fn choose_uses_source_index() {
        let mut rng = MockRandomSource::new();
        rng.expect_index().with(eq(3)).times(1).return_const(2usize);

        let vocabulary = Vocabulary::new(["a", "b", "c"]).unwrap();
        assert_eq!(vocabulary.choose(&rng), "c");
    }

    #[quickcheck]
    fn choose_returns_member(words: Vec<String>) -> bool {
        match Vocabulary::new(words) {
            Ok(vocabulary) => vocabulary.contains(vocabulary.choose(&ThreadRandom)),
            Err(_) => true,
        }
    }
}
