use std::path::PathBuf;

use clap::{Parser, Subcommand};

use passgen::generators::{Capitalization, GeneratorKind};
use passgen::vocabulary::split_words;

#[derive(Debug, Parser)]
#[command(name = "passgen", version, about = "Generate passwords, passphrases and PIN codes")]
pub struct Cli {
    /// YAML settings file (defaults to $PASSGEN_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Word list for memorable passphrases
    #[arg(short, long, global = true)]
    pub wordlist: Option<PathBuf>,

    /// Number of passwords to print
    #[arg(short = 'n', long, global = true)]
    pub count: Option<usize>,

    /// Seed for reproducible output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub mode: Option<Mode>,
}

#[derive(Debug, Subcommand)]
pub enum Mode {
    /// Random letters, optionally with digits and symbols
    Random {
        #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(8..=100))]
        length: u16,
        /// Include digits (off by default, as in a `type: random` config preset)
        #[arg(short, long)]
        digits: bool,
        /// Include punctuation symbols
        #[arg(short, long)]
        symbols: bool,
    },
    /// Words from a vocabulary joined by a separator
    Memorable {
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(2..=10))]
        words: u16,
        #[arg(long, default_value = "-", allow_hyphen_values = true)]
        separator: String,
        /// Upper-case every word
        #[arg(long)]
        capitalize_all: bool,
        /// Upper-case or lower-case each word at random; wins over --capitalize-all
        #[arg(long)]
        capitalize_randomly: bool,
        /// Space-separated words to use instead of the word list
        #[arg(long)]
        vocabulary: Option<String>,
    },
    /// Numeric PIN code
    Pin {
        #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(4..=32))]
        length: u16,
    },
}

impl Mode {
    pub fn into_kind(self) -> GeneratorKind {
        match self {
            Mode::Random {
                length,
                digits,
                symbols,
            } => GeneratorKind::Random {
                length: length.into(),
                include_digits: digits,
                include_symbols: symbols,
            },
            Mode::Memorable {
                words,
                separator,
                capitalize_all,
                capitalize_randomly,
                vocabulary,
            } => GeneratorKind::Memorable {
                word_count: words.into(),
                separator,
                capitalization: Capitalization::from_flags(capitalize_all, capitalize_randomly),
                vocabulary: vocabulary.as_deref().map(split_words),
            },
            Mode::Pin { length } => GeneratorKind::Pin {
                length: length.into(),
            },
        }
    }
}
