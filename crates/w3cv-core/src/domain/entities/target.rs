//! The `ValidationTarget` value and its classification.
//!
//! A target is whatever the operator typed on the command line: a local
//! path or a remote URL. Classification is purely lexical (prefix and
//! suffix), which decides both the validator endpoint and how the response
//! is interpreted.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;

use crate::domain::error::DomainError;

/// Suffixes routed to the markup validator.
pub const HTML_SUFFIXES: [&str; 4] = [".htm", ".html", ".xht", ".xhtml"];

/// Suffix routed to the CSS validator.
pub const CSS_SUFFIX: &str = ".css";

const REMOTE_PREFIXES: [&str; 2] = ["http://", "https://"];

// ── Classification ────────────────────────────────────────────────────────────

/// Which validator a target belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Style sheets (`.css`), checked by the CSS validator.
    Css,
    /// Markup documents (`.htm`, `.html`, `.xht`, `.xhtml`).
    Html,
    /// Anything else goes to the generic conformance checker.
    Other,
}

impl TargetKind {
    /// Classify a target string by suffix.
    pub fn classify(target: &str) -> Self {
        if target.ends_with(CSS_SUFFIX) {
            Self::Css
        } else if HTML_SUFFIXES.iter().any(|s| target.ends_with(s)) {
            Self::Html
        } else {
            Self::Other
        }
    }

    /// `true` when the validator answers in JSON (and raw output is worth
    /// echoing in verbose mode).
    pub const fn answers_json(self) -> bool {
        matches!(self, Self::Css | Self::Html)
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Css => "css",
            Self::Html => "html",
            Self::Other => "other",
        })
    }
}

/// Where the document lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Fetched by the validator itself; submitted with GET.
    Remote,
    /// Read locally and uploaded as multipart form data.
    Local,
}

// ── Value object ──────────────────────────────────────────────────────────────

/// A single file path or URL submitted for validation.
///
/// Immutable once parsed; `kind` and `origin` are derived at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationTarget {
    raw: String,
    kind: TargetKind,
    origin: Origin,
}

impl ValidationTarget {
    /// Parse and classify a target.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyTarget`] for an empty (or blank) string.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::EmptyTarget);
        }

        let origin = if REMOTE_PREFIXES.iter().any(|p| raw.starts_with(p)) {
            Origin::Remote
        } else {
            Origin::Local
        };

        Ok(Self {
            kind: TargetKind::classify(&raw),
            origin,
            raw,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
    pub const fn kind(&self) -> TargetKind {
        self.kind
    }
    pub const fn origin(&self) -> Origin {
        self.origin
    }
    pub const fn is_remote(&self) -> bool {
        matches!(self.origin, Origin::Remote)
    }
}

impl fmt::Display for ValidationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for ValidationTarget {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
