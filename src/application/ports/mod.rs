//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod diagnostics;
pub mod interactable;
pub mod playback;

// Re-export common types
pub use config::ConfigStore;
pub use diagnostics::{DiagnosticSink, HandlerFailure};
pub use interactable::Interactable;
pub use playback::{PlaybackError, PlaybackFactory, PlaybackHandle};
