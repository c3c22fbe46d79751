//! In-memory reporter for testing.

use std::sync::{Arc, Mutex};

use w3cv_core::application::ports::{Diagnostic, Reporter};

/// Collects diagnostics instead of printing them.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    inner: Arc<Mutex<Vec<Diagnostic>>>,
}

impl MemoryReporter {
    /// Create a new empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.inner
            .lock()
            .map(|inner| inner.clone())
            .unwrap_or_default()
    }

    /// Rendered lines, as they would appear on the diagnostic stream.
    pub fn lines(&self) -> Vec<String> {
        self.diagnostics().iter().map(ToString::to_string).collect()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, diagnostic: &Diagnostic) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.push(diagnostic.clone());
        }
    }
}
