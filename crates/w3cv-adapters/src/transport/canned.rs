//! Scripted transport for tests and offline replays.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use w3cv_core::{
    application::{TransportError, ports::Transport},
    domain::ValidationRequest,
};

/// Transport that answers from a queue of canned responses.
///
/// Every request is recorded, so tests can assert on what would have been
/// sent. An exhausted queue answers with a transport failure.
#[derive(Debug, Clone, Default)]
pub struct CannedTransport {
    inner: Arc<Mutex<CannedTransportInner>>,
}

#[derive(Debug, Default)]
struct CannedTransportInner {
    responses: VecDeque<Result<String, TransportError>>,
    requests: Vec<ValidationRequest>,
}

impl CannedTransport {
    /// Create a transport with no responses queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport that answers with `bodies`, in order.
    pub fn with_responses<I, S>(bodies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let transport = Self::new();
        for body in bodies {
            transport.push_response(body);
        }
        transport
    }

    /// Queue a response body.
    pub fn push_response(&self, body: impl Into<String>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.responses.push_back(Ok(body.into()));
        }
    }

    /// Queue a transport failure.
    pub fn push_failure(&self, error: TransportError) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.responses.push_back(Err(error));
        }
    }

    /// Requests received so far (testing helper).
    pub fn requests(&self) -> Vec<ValidationRequest> {
        self.inner
            .lock()
            .map(|inner| inner.requests.clone())
            .unwrap_or_default()
    }

    /// Number of responses still queued.
    pub fn remaining(&self) -> usize {
        self.inner.lock().map_or(0, |inner| inner.responses.len())
    }
}

impl Transport for CannedTransport {
    fn execute(&self, request: &ValidationRequest) -> Result<String, TransportError> {
        let mut inner = self.inner.lock().map_err(|_| TransportError::Request {
            endpoint: request.endpoint.clone(),
            reason: "canned transport lock poisoned".into(),
        })?;

        inner.requests.push(request.clone());
        inner
            .responses
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Request {
                    endpoint: request.endpoint.clone(),
                    reason: "no canned response left".into(),
                })
            })
    }
}
