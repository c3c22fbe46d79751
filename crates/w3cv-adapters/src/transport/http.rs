//! Blocking HTTP transport using reqwest.

use std::time::Duration;

use reqwest::blocking::{
    Client,
    multipart::{Form, Part},
};
use tracing::{debug, instrument};

use w3cv_core::{
    application::{TransportError, ports::Transport},
    domain::{FileUpload, Method, ValidationRequest},
    error::{W3cvError, W3cvResult},
};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Client settings for [`HttpTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("w3cv/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

/// Production transport: GET with a percent-encoded query string, or a
/// `multipart/form-data` POST carrying the local document.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build the underlying client.
    pub fn new(settings: &HttpSettings) -> W3cvResult<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| W3cvError::Configuration {
                message: format!("cannot build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    fn multipart(request: &ValidationRequest) -> Result<Form, TransportError> {
        let mut form = Form::new();
        for (name, value) in &request.params {
            form = form.text(*name, value.clone());
        }
        if let Some(upload) = &request.upload {
            form = form.part(upload.field, file_part(upload)?);
        }
        Ok(form)
    }
}

impl Transport for HttpTransport {
    #[instrument(skip_all, fields(method = %request.method, endpoint = %request.endpoint))]
    fn execute(&self, request: &ValidationRequest) -> Result<String, TransportError> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.endpoint).query(&request.params),
            Method::MultipartPost => self
                .client
                .post(&request.endpoint)
                .multipart(Self::multipart(request)?),
        };

        let response = builder
            .send()
            .map_err(|e| request_error(&request.endpoint, &e))?;

        let status = response.status();
        // Like `curl -s`: an error status still hands its body to
        // interpretation, where an error page is unparseable and retried.
        debug!(
            status = status.as_u16(),
            success = status.is_success(),
            "Response received"
        );

        response
            .text()
            .map_err(|e| request_error(&request.endpoint, &e))
    }
}

fn file_part(upload: &FileUpload) -> Result<Part, TransportError> {
    let upload_error = |reason: String| TransportError::Upload {
        path: upload.path.clone(),
        reason,
    };

    let bytes = std::fs::read(&upload.path).map_err(|e| upload_error(e.to_string()))?;
    let file_name = upload.path.file_name().map_or_else(
        || upload.path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    );

    let part = Part::bytes(bytes).file_name(file_name);
    match upload.content_type {
        Some(ct) => part.mime_str(ct).map_err(|e| upload_error(e.to_string())),
        None => Ok(part),
    }
}

fn request_error(endpoint: &str, e: &reqwest::Error) -> TransportError {
    TransportError::Request {
        endpoint: endpoint.to_owned(),
        reason: e.to_string(),
    }
}
