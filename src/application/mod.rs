//! Application layer - Use cases and port interfaces
//!
//! Contains the feedback binder, the script replay use case, and the trait
//! definitions for external system interactions.

pub mod feedback;
pub mod ports;
pub mod replay;

// Re-export use cases
pub use feedback::{AudioFeedbackBinder, BinderError};
pub use replay::{ReplayCallbacks, ReplaySummary, ScriptReplay};
