//! Diagnostic sink adapters

mod collecting;
mod tracing;

pub use collecting::CollectingDiagnostics;
pub use self::tracing::TracingDiagnostics;
