//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod feedback;
pub mod interaction;
pub mod timing;

// Re-export common types
pub use config::{AppConfig, ClipsConfig};
pub use error::*;
pub use feedback::{
    AudioClip, FeedbackClips, FeedbackSlot, HoldState, HoldToggle, HoldTransition, LoopCount,
    PlaybackMode,
};
pub use interaction::{InteractableEvents, InteractionEvent, ScriptStep};
pub use timing::Duration;
