//! Unified error handling for w3cv Core.
//!
//! Only setup can fail: a rejected endpoint or attempt budget, or an
//! adapter that cannot be built. Validation findings and per-target
//! failures end up in the tally instead.

use thiserror::Error;

use crate::domain::DomainError;

/// Root error type for w3cv Core operations.
#[derive(Debug, Error, Clone)]
pub enum W3cvError {
    /// Errors from the domain layer (invalid targets or settings).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// An adapter could not be set up.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl W3cvError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check the [http] section of your config file".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}

/// Convenient result type alias.
pub type W3cvResult<T> = Result<T, W3cvError>;
