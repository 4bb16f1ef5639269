//! Error types raised by repository implementations.

use spawner_core::{ErrorSeverity, MenuError};
use thiserror::Error;

/// Errors surfaced by cache implementations.
///
/// The render path never propagates these: callers log them and fall back to
/// re-rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("render cache lock was poisoned")]
    LockPoisoned,
}

impl MenuError for CacheError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::LockPoisoned => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "CACHE_LOCK_POISONED",
        }
    }
}

pub type Result<T> = std::result::Result<T, CacheError>;
