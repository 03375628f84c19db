use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::generators::traits::PasswordGenerator;
use crate::randomness::RandomSource;
use crate::vocabulary::{Corpus, Vocabulary};

/// How each chosen word is cased.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capitalization {
    /// Leave the vocabulary's own casing.
    #[default]
    None,
    AllUpper,
    /// Each word is upper-cased or lower-cased on a fair coin.
    RandomPerWord,
}

impl Capitalization {
    /// Resolves the two independent checkbox flags. When both are set,
    /// random capitalization wins.
    pub fn from_flags(capitalize_all: bool, capitalize_randomly: bool) -> Self {
        match (capitalize_all, capitalize_randomly) {
            (_, true) => Self::RandomPerWord,
            (true, false) => Self::AllUpper,
            (false, false) => Self::None,
        }
    }

    fn apply(self, word: &str, rng: &dyn RandomSource) -> String {
        match self {
            Self::None => word.to_string(),
            Self::AllUpper => word.to_uppercase(),
            Self::RandomPerWord => {
                if rng.coin() {
                    word.to_uppercase()
                } else {
                    word.to_lowercase()
                }
            }
        }
    }
}

/// Words drawn with replacement from a vocabulary, cased, then joined.
pub struct MemorablePassphraseGenerator {
    word_count: usize,
    separator: String,
    capitalization: Capitalization,
    vocabulary: Vocabulary,
    rng: Arc<dyn RandomSource>,
}

impl MemorablePassphraseGenerator {
    pub fn new(
        word_count: usize,
        separator: impl Into<String>,
        capitalization: Capitalization,
        vocabulary: Vocabulary,
        rng: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            word_count,
            separator: separator.into(),
            capitalization,
            vocabulary,
            rng,
        }
    }

    /// Uses the corpus word list, loading it if this is the first use.
    pub fn with_corpus(
        word_count: usize,
        separator: impl Into<String>,
        capitalization: Capitalization,
        corpus: &Corpus,
        rng: Arc<dyn RandomSource>,
    ) -> Result<Self, GenerationError> {
        let vocabulary = corpus.vocabulary()?;
        Ok(Self::new(word_count, separator, capitalization, vocabulary, rng))
    }
}

impl PasswordGenerator for MemorablePassphraseGenerator {
    fn generate(&self) -> Result<String, GenerationError> {
        let rng = self.rng.as_ref();
        let words: Vec<String> = (0..self.word_count)
            .map(|_| {
                let word = self.vocabulary.choose(rng);
                self.capitalization.apply(word, rng)
            })
            .collect();
        Ok(words.join(&self.separator))
    }
}
