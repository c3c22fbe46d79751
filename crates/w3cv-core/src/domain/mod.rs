//! Core domain layer for w3cv.
//!
//! This module contains pure logic: classifying targets, assembling
//! requests, interpreting validator responses and folding totals. All I/O
//! (HTTP, sleeping, printing) is reached through ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Few external crates**: std, thiserror, and serde for response decoding
//! - **Immutable values**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    request::{
        DEFAULT_CSS_ENDPOINT, DEFAULT_HTML_ENDPOINT, DEFAULT_UNICORN_ENDPOINT, Endpoints,
        FileUpload, Method, ValidationRequest,
    },
    result::{
        CssReport, GenericReport, HtmlMessage, HtmlReport, NOT_PASSED_MARKER, PASSED_MARKER,
        ValidationResult, interpret,
    },
    tally::{Contribution, Tally},
    target::{Origin, TargetKind, ValidationTarget},
};

pub use error::{DomainError, ErrorCategory};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Pipeline Tests: target -> request -> interpretation
    // ========================================================================

    #[test]
    fn classification_drives_request_and_interpretation() {
        let target = ValidationTarget::parse("http://example.org/site.css").unwrap();
        let request = ValidationRequest::build(&target, &Endpoints::default());
        assert_eq!(request.kind, TargetKind::Css);

        let raw = r#"{"cssvalidation":{"result":{"errorcount":0,"warningcount":3}}}"#;
        assert_eq!(
            interpret(request.kind, raw),
            ValidationResult::Css(CssReport {
                error_count: 0,
                warning_count: 3
            })
        );
    }

    #[test]
    fn css_json_is_not_accepted_for_generic_targets() {
        let target = ValidationTarget::parse("feed.rss").unwrap();
        let raw = r#"{"cssvalidation":{"result":{"errorcount":1,"warningcount":0}}}"#;
        assert!(matches!(
            interpret(target.kind(), raw),
            ValidationResult::Generic(_)
        ));
    }

    // ========================================================================
    // Validator Tests
    // ========================================================================

    #[test]
    fn zero_attempt_budget_rejected() {
        assert_eq!(
            DomainValidator::validate_attempt_budget(0),
            Err(DomainError::InvalidAttemptBudget { attempts: 0 })
        );
        assert!(DomainValidator::validate_attempt_budget(2).is_ok());
    }

    #[test]
    fn default_endpoints_valid() {
        assert!(DomainValidator::validate_endpoints(&Endpoints::default()).is_ok());
    }

    #[test]
    fn endpoint_errors_are_configuration_errors() {
        let err = DomainError::InvalidEndpoint {
            name: "css",
            url: "ftp://x".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.suggestions().iter().any(|s| s.contains("endpoints.css")));
    }
}
