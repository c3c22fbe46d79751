//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "validate these documents".

pub mod validation_service;

pub use validation_service::{
    DEFAULT_MAX_ATTEMPTS, FailureReason, ServiceOptions, TargetOutcome, ValidationService,
};
