//! Password, passphrase and PIN generation.
//!
//! Each generator is built from an immutable configuration and an injected
//! [`RandomSource`](randomness::RandomSource), then called through
//! [`PasswordGenerator::generate`](generators::PasswordGenerator::generate).

pub mod config;
pub mod error;
pub mod generators;
pub mod randomness;
pub mod vocabulary;

pub use error::{GenerationError, PassgenError};
