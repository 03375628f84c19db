use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Invalid {field}: {value} (must not be negative)")]
    InvalidLength { field: &'static str, value: i64 },

    #[error("Vocabulary is empty")]
    EmptyVocabulary,

    #[error("Word list unavailable at {}: {source}", .path.display())]
    VocabularyUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum PassgenError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(String),
}
