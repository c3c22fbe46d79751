//! Error handling for the w3c-validator CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//!
//! Validation findings are *not* errors; they live in the tally.  A
//! `CliError` means the run could not be carried out at all.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use w3cv_core::error::W3cvError;

pub use w3cv_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `w3cv-core`, e.g. a rejected endpoint.
    #[error("Validation could not start: {0}")]
    Core(#[from] W3cvError),

    // ── System errors ──────────────────────────────────────────────────────
    /// Writing to stdout failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Run 'w3c-validator --config-path' to locate the default config file".into(),
                "Run 'w3c-validator --show-config' to inspect the effective settings".into(),
            ],
            Self::Core(core_err) => core_err.suggestions(),
            Self::IoError { .. } => vec!["Check that stdout is writable".into()],
        }
    }

    /// Get the error category for logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Every failure maps to 1 so that callers only have to distinguish
    /// "clean" from "not clean"; clap's own parse errors keep exit 2.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Render the error, its cause chain (when `verbose`) and suggestions.
    pub fn format(&self, verbose: bool, colored: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if colored { style(text) } else { text.to_owned() }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("Error:", |t: &str| t.red().bold().to_string()),
            paint(&self.to_string(), |t: &str| t.red().to_string()),
        );

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                out.push_str(&format!(
                    "  {}\n",
                    paint(&format!("Caused by: {err}"), |t: &str| t.dimmed().to_string())
                ));
                source = err.source();
            }
        }

        out.push_str(&format!(
            "\n{}\n",
            paint("Suggestions:", |t: &str| t.yellow().bold().to_string())
        ));
        for suggestion in self.suggestions() {
            out.push_str(&format!("  {suggestion}\n"));
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint("Use -v / --verbose for more details.", |t: &str| t.dimmed().to_string())
            ));
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad target or argument.
    UserError,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}
