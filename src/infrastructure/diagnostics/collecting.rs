//! Diagnostic sink that keeps every failure in memory

use std::sync::Arc;

use parking_lot::Mutex;

use crate::application::ports::{DiagnosticSink, HandlerFailure};

/// Records failures for later inspection, optionally forwarding each one.
///
/// The CLI wraps [`super::TracingDiagnostics`] with this so failures are
/// both logged as they happen and counted in the session report.
#[derive(Default)]
pub struct CollectingDiagnostics {
    failures: Mutex<Vec<HandlerFailure>>,
    forward: Option<Arc<dyn DiagnosticSink>>,
}

impl CollectingDiagnostics {
    /// Create a sink that only records
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that records and then forwards to `inner`
    pub fn forwarding_to(inner: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            failures: Mutex::new(Vec::new()),
            forward: Some(inner),
        }
    }

    /// Snapshot of recorded failures, oldest first
    pub fn failures(&self) -> Vec<HandlerFailure> {
        self.failures.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.failures.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl DiagnosticSink for CollectingDiagnostics {
    fn report(&self, failure: &HandlerFailure) {
        self.failures.lock().push(failure.clone());
        if let Some(ref inner) = self.forward {
            inner.report(failure);
        }
    }
}
