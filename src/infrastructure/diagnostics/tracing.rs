//! Diagnostic sink that writes to the log

use crate::application::ports::{DiagnosticSink, HandlerFailure};

/// Reports handler failures as `tracing` warnings
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingDiagnostics {
    fn report(&self, failure: &HandlerFailure) {
        ::tracing::warn!(
            event = %failure.event,
            slot = failure.slot.map(|s| s.as_str()).unwrap_or("-"),
            "{}",
            failure
        );
    }
}
