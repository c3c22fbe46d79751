// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry into reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Empty validation target")]
    EmptyTarget,

    #[error("Invalid {name} endpoint '{url}': expected an http:// or https:// URL")]
    InvalidEndpoint { name: &'static str, url: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Attempt budget must be at least 1, got {attempts}")]
    InvalidAttemptBudget { attempts: u32 },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyTarget => vec![
                "Pass a file path or an http:// URL".into(),
                "Example: w3c-validator index.html style.css".into(),
            ],
            Self::InvalidEndpoint { name, url } => vec![
                format!("The {} endpoint is set to '{}'", name, url),
                format!(
                    "Fix `endpoints.{name}` in your config file or W3CV__ENDPOINTS__{}",
                    name.to_uppercase()
                ),
            ],
            Self::InvalidAttemptBudget { .. } => {
                vec!["Set `validation.max_attempts` to 1 or more".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyTarget => ErrorCategory::Validation,
            Self::InvalidEndpoint { .. } | Self::InvalidAttemptBudget { .. } => {
                ErrorCategory::Configuration
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}
