//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. The update
/// rules themselves are total (clamped arithmetic, no IO), so the only
/// failure the domain knows is unusable configuration supplied at
/// construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Configuration supplied at construction was missing or unusable.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
