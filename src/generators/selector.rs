use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::generators::memorable::{Capitalization, MemorablePassphraseGenerator};
use crate::generators::numeric::NumericCodeGenerator;
use crate::generators::random_string::RandomStringGenerator;
use crate::generators::traits::PasswordGenerator;
use crate::randomness::RandomSource;
use crate::vocabulary::{Corpus, Vocabulary};

fn default_random_length() -> i64 {
    10
}

fn default_word_count() -> i64 {
    5
}

fn default_separator() -> String {
    "-".to_string()
}

fn default_pin_length() -> i64 {
    4
}

/// Generator choice with tagged serialisation.
/// Serialises to: {"type": "random", "length": 16, "include_digits": true, ...}
///
/// Lengths are signed so configuration input can be checked rather than wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GeneratorKind {
    Random {
        #[serde(default = "default_random_length")]
        length: i64,
        #[serde(default)]
        include_digits: bool,
        #[serde(default)]
        include_symbols: bool,
    },
    Memorable {
        #[serde(default = "default_word_count")]
        word_count: i64,
        #[serde(default = "default_separator")]
        separator: String,
        #[serde(default)]
        capitalization: Capitalization,
        /// `None` selects the default corpus.
        #[serde(default)]
        vocabulary: Option<Vec<String>>,
    },
    Pin {
        #[serde(default = "default_pin_length")]
        length: i64,
    },
}

impl Default for GeneratorKind {
    fn default() -> Self {
        Self::Memorable {
            word_count: default_word_count(),
            separator: default_separator(),
            capitalization: Capitalization::None,
            vocabulary: None,
        }
    }
}

fn checked_length(field: &'static str, value: i64) -> Result<usize, GenerationError> {
    usize::try_from(value).map_err(|_| GenerationError::InvalidLength { field, value })
}

pub fn create_generator(
    kind: &GeneratorKind,
    corpus: &Corpus,
    rng: Arc<dyn RandomSource>,
) -> Result<Box<dyn PasswordGenerator>, GenerationError> {
    debug!("Creating generator {:?}", kind);
    let generator: Box<dyn PasswordGenerator> = match kind {
        GeneratorKind::Random {
            length,
            include_digits,
            include_symbols,
        } => Box::new(RandomStringGenerator::new(
            checked_length("length", *length)?,
            *include_digits,
            *include_symbols,
            rng,
        )),
        GeneratorKind::Memorable {
            word_count,
            separator,
            capitalization,
            vocabulary,
        } => {
            let word_count = checked_length("word_count", *word_count)?;
            match vocabulary {
                Some(words) => Box::new(MemorablePassphraseGenerator::new(
                    word_count,
                    separator.as_str(),
                    *capitalization,
                    Vocabulary::new(words.iter().map(String::as_str))?,
                    rng,
                )),
                None => Box::new(MemorablePassphraseGenerator::with_corpus(
                    word_count,
                    separator.as_str(),
                    *capitalization,
                    corpus,
                    rng,
                )?),
            }
        }
        GeneratorKind::Pin { length } => Box::new(NumericCodeGenerator::new(
            checked_length("length", *length)?,
            rng,
        )),
    };
    Ok(generator)
}
