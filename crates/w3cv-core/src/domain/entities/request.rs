//! Request construction: the *Request Builder*.
//!
//! [`ValidationRequest::build`] is pure parameter assembly. It never touches
//! the network or the filesystem; upload paths are carried as-is and only
//! opened by the transport adapter.

use std::fmt;
use std::path::PathBuf;

use crate::domain::{
    entities::target::{Origin, TargetKind, ValidationTarget},
    error::DomainError,
};

pub const DEFAULT_CSS_ENDPOINT: &str = "https://jigsaw.w3.org/css-validator/validator";
pub const DEFAULT_HTML_ENDPOINT: &str = "https://validator.w3.org/check";
pub const DEFAULT_UNICORN_ENDPOINT: &str = "https://validator.w3.org/unicorn/check";

// ── Endpoints ─────────────────────────────────────────────────────────────────

/// The three validator services, one per [`TargetKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub css: String,
    pub html: String,
    pub unicorn: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            css: DEFAULT_CSS_ENDPOINT.into(),
            html: DEFAULT_HTML_ENDPOINT.into(),
            unicorn: DEFAULT_UNICORN_ENDPOINT.into(),
        }
    }
}

impl Endpoints {
    /// Endpoint serving the given kind of target.
    pub fn for_kind(&self, kind: TargetKind) -> &str {
        match kind {
            TargetKind::Css => &self.css,
            TargetKind::Html => &self.html,
            TargetKind::Other => &self.unicorn,
        }
    }

    /// Every endpoint must be an absolute HTTP(S) URL.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (name, url) in [
            ("css", &self.css),
            ("html", &self.html),
            ("unicorn", &self.unicorn),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(DomainError::InvalidEndpoint {
                    name,
                    url: url.clone(),
                });
            }
        }
        Ok(())
    }
}

// ── Request description ──────────────────────────────────────────────────────

/// How the request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Parameters go in the (percent-encoded) query string.
    Get,
    /// Parameters and the file go in a `multipart/form-data` body.
    MultipartPost,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::MultipartPost => "POST",
        })
    }
}

/// A local file attached to a multipart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// Form field the validator expects the document under.
    pub field: &'static str,
    pub path: PathBuf,
    /// Declared MIME type, when the validator needs one.
    pub content_type: Option<&'static str>,
}

/// A fully specified HTTP request for one target. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    pub method: Method,
    pub endpoint: String,
    /// Plain (unencoded) form parameters, in submission order.
    pub params: Vec<(&'static str, String)>,
    pub upload: Option<FileUpload>,
    /// Classification of the target this request was built for.
    pub kind: TargetKind,
}

impl ValidationRequest {
    /// Build the request for `target` against `endpoints`.
    pub fn build(target: &ValidationTarget, endpoints: &Endpoints) -> Self {
        let kind = target.kind();
        let endpoint = endpoints.for_kind(kind).to_owned();

        let options: &[(&'static str, &'static str)] = match kind {
            TargetKind::Css => &[("output", "json"), ("warning", "0")],
            TargetKind::Html => &[("output", "json")],
            TargetKind::Other => &[("ucn_task", "conformance"), ("ucn_format", "text")],
        };
        let options = options.iter().map(|(k, v)| (*k, (*v).to_owned()));

        match target.origin() {
            Origin::Remote => {
                let uri_field = match kind {
                    TargetKind::Css | TargetKind::Html => "uri",
                    TargetKind::Other => "ucn_uri",
                };
                let mut params = vec![(uri_field, target.as_str().to_owned())];
                params.extend(options);

                Self {
                    method: Method::Get,
                    endpoint,
                    params,
                    upload: None,
                    kind,
                }
            }
            Origin::Local => {
                let (field, content_type) = match kind {
                    TargetKind::Css => ("file", Some("text/css")),
                    TargetKind::Html => ("uploaded_file", Some("text/html")),
                    TargetKind::Other => ("ucn_file", None),
                };

                Self {
                    method: Method::MultipartPost,
                    endpoint,
                    params: options.collect(),
                    upload: Some(FileUpload {
                        field,
                        path: PathBuf::from(target.as_str()),
                        content_type,
                    }),
                    kind,
                }
            }
        }
    }

    /// Value of a form parameter, if present.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// curl-like one-line rendering, used for verbose echo.
impl fmt::Display for ValidationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.endpoint)?;
        if let Some(upload) = &self.upload {
            write!(f, " {}=@{}", upload.field, upload.path.display())?;
            if let Some(ct) = upload.content_type {
                write!(f, ";type={ct}")?;
            }
        }
        for (k, v) in &self.params {
            write!(f, " {k}={v}")?;
        }
        Ok(())
    }
}
