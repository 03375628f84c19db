use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use once_cell::sync::OnceCell;

use crate::error::GenerationError;
use crate::vocabulary::Vocabulary;

pub const DEFAULT_WORDLIST_PATH: &str = "/usr/share/dict/words";

static DEFAULT_CORPUS: OnceCell<Corpus> = OnceCell::new();

/// A word-list file loaded on first use and cached for the lifetime of the value.
#[derive(Debug)]
pub struct Corpus {
    path: PathBuf,
    words: OnceCell<Vocabulary>,
}

impl Corpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            words: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.words.get().is_some()
    }

    /// Returns the cached vocabulary, reading the file the first time.
    /// A failed load is not cached; the next call tries again.
    pub fn vocabulary(&self) -> Result<Vocabulary, GenerationError> {
        self.words.get_or_try_init(|| self.load()).cloned()
    }

    fn load(&self) -> Result<Vocabulary, GenerationError> {
        debug!("Loading word list from {}", self.path.display());
        let text = fs::read_to_string(&self.path).map_err(|source| {
            GenerationError::VocabularyUnavailable {
                path: self.path.clone(),
                source,
            }
        })?;
        let vocabulary = Vocabulary::parse(&text)?;
        info!(
            "Loaded {} words from {}",
            vocabulary.len(),
            self.path.display()
        );
        Ok(vocabulary)
    }
}

/// Sets the process-wide corpus and returns it. Only the first call takes effect;
/// later calls with another path get the first corpus back.
pub fn init_default_corpus(path: impl Into<PathBuf>) -> &'static Corpus {
    let path = path.into();
    let corpus = DEFAULT_CORPUS.get_or_init(|| Corpus::new(path.clone()));
    if corpus.path() != path {
        warn!(
            "Default corpus already set to {}; ignoring {}",
            corpus.path().display(),
            path.display()
        );
    }
    corpus
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn wordlist(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_lazily() {
        let file = wordlist("alpha\nbeta\n");
        let corpus = Corpus::new(file.path());
        assert!(!corpus.is_loaded());

        let vocabulary = corpus.vocabulary().unwrap();
        assert!(corpus.is_loaded());
        assert_eq!(vocabulary.words(), ["alpha", "beta"]);
    }

    #[test]
    fn caches_after_first_load() {
        let file = wordlist("alpha\n");
        let corpus = Corpus::new(file.path());
        let first = corpus.vocabulary().unwrap();

        fs::write(file.path(), "changed\n").unwrap();
        let second = corpus.vocabulary().unwrap();
        assert_eq!(first, second);
        assert_eq!(second.words(), ["alpha"]);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let corpus = Corpus::new("/nonexistent/passgen/words");
        let err = corpus.vocabulary().unwrap_err();
        assert!(matches!(err, GenerationError::VocabularyUnavailable { .. }));
        assert!(err.to_string().contains("/nonexistent/passgen/words"));
        assert!(!corpus.is_loaded());
    }

    #[test]
    fn failed_load_can_be_retried() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words");
        let corpus = Corpus::new(&path);
        assert!(corpus.vocabulary().is_err());

        fs::write(&path, "late\n").unwrap();
        assert_eq!(corpus.vocabulary().unwrap().words(), ["late"]);
    }

    #[test]
    fn empty_file_is_empty_vocabulary() {
        let file = wordlist("\n\n");
        let corpus = Corpus::new(file.path());
        assert!(matches!(
            corpus.vocabulary(),
            Err(GenerationError::EmptyVocabulary)
        ));
    }
}
