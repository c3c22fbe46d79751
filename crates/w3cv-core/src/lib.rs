//! w3cv Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the w3cv
//! document validator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            w3cv-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ValidationService)            │
//! │   Retry state machine, tally folding    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Transport, Cooldown,         │
//! │            Reporter)                    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      w3cv-adapters (Infrastructure)     │
//! │ (HttpTransport, SleepCooldown, etc)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ValidationTarget, ValidationRequest,   │
//! │  ValidationResult, Tally)               │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use w3cv_core::prelude::*;
//!
//! // 1. Parse targets
//! let targets = vec![ValidationTarget::parse("index.html")?];
//!
//! // 2. Use application service (with injected adapters)
//! let service = ValidationService::new(transport, cooldown, reporter, ServiceOptions::default())?;
//! let tally = service.run(&targets);
//! std::process::exit(tally.exit_code().into());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ServiceOptions, TargetOutcome, ValidationService,
        ports::{Cooldown, Diagnostic, Reporter, Severity, Transport},
    };
    pub use crate::domain::{
        Contribution, Endpoints, TargetKind, Tally, ValidationRequest, ValidationResult,
        ValidationTarget,
    };
    pub use crate::error::{W3cvError, W3cvResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
