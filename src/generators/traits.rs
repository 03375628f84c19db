use crate::error::GenerationError;

/// Produces one password per call. Implementations hold only immutable configuration,
/// so a single instance may be shared across threads and called repeatedly.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordGenerator: Send + Sync {
    fn generate(&self) -> Result<String, GenerationError>;
}
