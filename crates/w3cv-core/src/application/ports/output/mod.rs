//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `w3cv-adapters` crate provides implementations.

use std::fmt;

use crate::application::error::TransportError;
use crate::domain::{HtmlMessage, ValidationRequest, ValidationTarget};

/// Port for executing a validation request.
///
/// Implemented by:
/// - `w3cv_adapters::transport::HttpTransport` (production)
/// - `w3cv_adapters::transport::CannedTransport` (testing)
///
/// ## Design Notes
///
/// - Synchronous and blocking; one request in flight at a time
/// - Returns the raw response body, uninterpreted
#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    /// Send the request and return the response body.
    fn execute(&self, request: &ValidationRequest) -> Result<String, TransportError>;
}

/// Port for the pause between transport attempts.
///
/// Implemented by:
/// - `w3cv_adapters::cooldown::SleepCooldown` (production)
/// - `w3cv_adapters::cooldown::NoCooldown` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Cooldown: Send + Sync {
    /// Block until the next request may be sent.
    fn pause(&self);
}

/// Port for the diagnostic stream.
///
/// Implemented by:
/// - `w3cv-cli`'s `OutputManager` (stderr, optionally coloured)
/// - `w3cv_adapters::reporter::MemoryReporter` (testing)
pub trait Reporter: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Everything the validation service tells the operator.
///
/// `Display` renders the exact line written to the diagnostic stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Validating(ValidationTarget),
    Retrying(ValidationTarget),
    Failed(ValidationTarget),
    /// Verbose echo of the outgoing request.
    Request(String),
    /// Verbose echo of a JSON validator's raw answer.
    RawResponse(String),
    ErrorCount(u64),
    WarningCount(u64),
    /// One markup validator message.
    Message(HtmlMessage),
    /// Full text of the generic checker's answer.
    GenericOutput(String),
}

/// How a diagnostic should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Progress chatter; may be suppressed.
    Progress,
    /// Verbose-only echo.
    Trace,
    Error,
    Warning,
    Info,
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Self::Validating(_) | Self::Retrying(_) => Severity::Progress,
            Self::Request(_) | Self::RawResponse(_) => Severity::Trace,
            Self::Failed(_) | Self::ErrorCount(_) => Severity::Error,
            Self::WarningCount(_) => Severity::Warning,
            Self::Message(msg) if msg.is_error() => Severity::Error,
            Self::Message(_) => Severity::Warning,
            Self::GenericOutput(_) => Severity::Info,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validating(t) => write!(f, "validating: {t} ..."),
            Self::Retrying(t) => write!(f, "retrying: {t} ..."),
            Self::Failed(t) => write!(f, "failed: {t}"),
            Self::Request(text) | Self::RawResponse(text) | Self::GenericOutput(text) => {
                f.write_str(text)
            }
            Self::ErrorCount(n) => write!(f, "errors: {n}"),
            Self::WarningCount(n) => write!(f, "warnings: {n}"),
            Self::Message(msg) => write!(f, "{msg}"),
        }
    }
}
