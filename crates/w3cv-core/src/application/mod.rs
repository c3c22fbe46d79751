//! Application layer for w3cv.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ValidationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! interpretation logic itself. Response parsing lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DEFAULT_MAX_ATTEMPTS, FailureReason, ServiceOptions, TargetOutcome, ValidationService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Cooldown, Diagnostic, Reporter, Severity, Transport};

pub use error::TransportError;
