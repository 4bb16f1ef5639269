//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from content loading and menu presentation so clients can
//! bubble them up with consistent context.
use spawner_core::{ErrorSeverity, MenuError, PresentError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to present spawner menu: {0}")]
    Present(#[from] PresentError),

    #[error(transparent)]
    Content(#[from] anyhow::Error),
}

impl MenuError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Present(err) => err.severity(),
            Self::Content(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Present(err) => err.error_code(),
            Self::Content(_) => "RUNTIME_CONTENT",
        }
    }
}
