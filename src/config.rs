use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::PassgenError;
use crate::generators::GeneratorKind;
use crate::vocabulary::DEFAULT_WORDLIST_PATH;

pub const CONFIG_ENV: &str = "PASSGEN_CONFIG";
pub const WORDLIST_ENV: &str = "PASSGEN_WORDLIST";

fn default_wordlist() -> PathBuf {
    PathBuf::from(DEFAULT_WORDLIST_PATH)
}

fn default_count() -> usize {
    1
}

/// Settings read from an optional YAML file. Missing keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Word list used when a memorable passphrase has no explicit vocabulary.
    pub wordlist: PathBuf,
    /// Passwords printed per invocation.
    pub count: usize,
    /// Preset used when no subcommand is given.
    pub generator: GeneratorKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wordlist: default_wordlist(),
            count: default_count(),
            generator: GeneratorKind::default(),
        }
    }
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> Result<Self, PassgenError> {
        serde_yaml::from_str(yaml).map_err(|e| PassgenError::ConfigParse(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, PassgenError> {
        let yaml = fs::read_to_string(path).map_err(|source| PassgenError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_yaml(&yaml)?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reads `path`, or the file named by `PASSGEN_CONFIG`, or returns defaults,
    /// then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, PassgenError> {
        let from_env = env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut settings = match path.or(from_env.as_deref()) {
            Some(path) => Self::from_file(path)?,
            None => {
                debug!("No config file given, using defaults");
                Self::default()
            }
        };
        settings.apply_overrides(|key| env::var(key).ok());
        Ok(settings)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(wordlist) = lookup(WORDLIST_ENV) {
            debug!("{} overrides word list with {}", WORDLIST_ENV, wordlist);
            self.wordlist = PathBuf::from(wordlist);
        }
    }
}
