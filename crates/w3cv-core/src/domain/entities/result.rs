//! Validator responses: the *Result Interpreter*.
//!
//! Each validator answers in its own shape. [`interpret`] turns the raw
//! response text into exactly one [`ValidationResult`] variant, selected by
//! the target's [`TargetKind`]; shapes are never mixed.

use std::fmt;

use serde::Deserialize;

use crate::domain::entities::target::TargetKind;

/// Marker line the generic checker prints for a conformant document.
pub const PASSED_MARKER: &str = "This document has passed the test:";
/// Marker line the generic checker prints for a non-conformant document.
pub const NOT_PASSED_MARKER: &str = "This document has not passed the test:";

// ── Result shapes ─────────────────────────────────────────────────────────────

/// Interpreted response for one transport attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Css(CssReport),
    Generic(GenericReport),
    Html(HtmlReport),
    /// The response could not be interpreted; the attempt may be retried.
    Unparseable,
}

impl ValidationResult {
    pub const fn is_unparseable(&self) -> bool {
        matches!(self, Self::Unparseable)
    }
}

/// Counts reported by the CSS validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CssReport {
    pub error_count: u64,
    pub warning_count: u64,
}

/// Plain-text output of the generic conformance checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericReport {
    pub text: String,
}

impl GenericReport {
    /// `false` only when the "not passed" marker appears and the "passed"
    /// marker does not.
    pub fn passed(&self) -> bool {
        let (passed, not_passed) = markers(&self.text);
        !not_passed || passed
    }
}

/// Which verdict markers start a line of `text`: `(passed, not_passed)`.
fn markers(text: &str) -> (bool, bool) {
    text.lines().fold((false, false), |(passed, not_passed), line| {
        (
            passed || line.starts_with(PASSED_MARKER),
            not_passed || line.starts_with(NOT_PASSED_MARKER),
        )
    })
}

/// Message list returned by the markup validator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct HtmlReport {
    pub messages: Vec<HtmlMessage>,
}

/// One markup validator message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HtmlMessage {
    /// `error`, `warning`, `info`, ... as sent by the service.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "lastLine", default)]
    pub last_line: Option<u64>,
    #[serde(rename = "lastColumn", default)]
    pub last_column: Option<u64>,
}

impl HtmlMessage {
    /// Anything that is not an `error` counts as a warning.
    pub fn is_error(&self) -> bool {
        self.kind == "error"
    }
}

impl fmt::Display for HtmlMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.last_line, self.last_column) {
            (Some(line), Some(column)) => write!(
                f,
                "{}: line {line}: column {column}: {}",
                self.kind, self.message
            ),
            (Some(line), None) => write!(f, "{}: line {line}: {}", self.kind, self.message),
            _ => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

// ── Wire shapes ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CssEnvelope {
    cssvalidation: CssValidation,
}

#[derive(Deserialize)]
struct CssValidation {
    result: CssCounts,
}

#[derive(Deserialize)]
struct CssCounts {
    errorcount: u64,
    warningcount: u64,
}

// ── Interpreter ───────────────────────────────────────────────────────────────

/// Interpret raw validator output for a target of the given kind.
pub fn interpret(kind: TargetKind, raw: &str) -> ValidationResult {
    match kind {
        TargetKind::Css => serde_json::from_str::<CssEnvelope>(raw).map_or(
            ValidationResult::Unparseable,
            |envelope| {
                let counts = envelope.cssvalidation.result;
                ValidationResult::Css(CssReport {
                    error_count: counts.errorcount,
                    warning_count: counts.warningcount,
                })
            },
        ),
        TargetKind::Html => serde_json::from_str::<HtmlReport>(raw)
            .map_or(ValidationResult::Unparseable, ValidationResult::Html),
        // No verdict line means an error page or an empty body, not a result.
        TargetKind::Other => match markers(raw) {
            (false, false) => ValidationResult::Unparseable,
            _ => ValidationResult::Generic(GenericReport {
                text: raw.to_owned(),
            }),
        },
    }
}
