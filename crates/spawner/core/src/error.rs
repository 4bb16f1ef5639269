//! Common error infrastructure for spawner-core.
//!
//! Rendering itself never fails for a structurally valid [`SpawnerState`]:
//! missing metadata degrades to an unstyled item, a missing drop catalog is an
//! empty list, zero maxima yield zero percentages, and cache misses recompute.
//! The only fallible step in the core is handing a finished menu to the host.
//!
//! [`SpawnerState`]: crate::state::SpawnerState

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Temporary conditions that may succeed on retry
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with the same input.
    ///
    /// Examples: viewer disconnected mid-open, poisoned cache lock
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: loot chance above 100%
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all errors raised around menu rendering.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait MenuError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors reported by the host when presenting an assembled menu.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PresentError {
    /// The viewer left before the menu could be shown.
    #[error("viewer '{0}' is no longer online")]
    ViewerOffline(String),

    /// The host refused to open the menu (another menu is locked open, etc.).
    #[error("host rejected menu: {0}")]
    Rejected(String),
}

impl MenuError for PresentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ViewerOffline(_) | Self::Rejected(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ViewerOffline(_) => "PRESENT_VIEWER_OFFLINE",
            Self::Rejected(_) => "PRESENT_REJECTED",
        }
    }
}
