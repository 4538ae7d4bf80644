//! Diagnostics port for failures that must not propagate

use std::fmt;

use crate::domain::feedback::FeedbackSlot;
use crate::domain::interaction::InteractionEvent;

use super::playback::PlaybackError;

/// A playback failure caught inside an event handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerFailure {
    /// Event being handled
    pub event: InteractionEvent,
    /// Slot whose handle failed, if known
    pub slot: Option<FeedbackSlot>,
    /// What went wrong
    pub error: PlaybackError,
}

impl fmt::Display for HandlerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot {
            Some(slot) => write!(f, "Error playing {} audio on {}: {}", slot, self.event, self.error),
            None => write!(f, "Error handling {}: {}", self.event, self.error),
        }
    }
}

/// Port trait for reporting handler failures
pub trait DiagnosticSink: Send + Sync {
    /// Report a failure. Must not panic.
    fn report(&self, failure: &HandlerFailure);
}
