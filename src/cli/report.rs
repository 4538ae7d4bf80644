//! End-of-session report

use serde::Serialize;

use crate::application::ports::HandlerFailure;
use crate::application::ReplaySummary;
use crate::domain::feedback::{FeedbackSlot, HoldState};
use crate::domain::interaction::InteractionEvent;

/// One handler failure, flattened for output
#[derive(Debug, Clone, Serialize)]
pub struct FailureRecord {
    pub event: InteractionEvent,
    pub slot: Option<FeedbackSlot>,
    pub message: String,
}

impl From<&HandlerFailure> for FailureRecord {
    fn from(failure: &HandlerFailure) -> Self {
        Self {
            event: failure.event,
            slot: failure.slot,
            message: failure.to_string(),
        }
    }
}

/// What happened during a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub backend: &'static str,
    pub low_latency: bool,
    pub volume: f32,
    pub slots: Vec<FeedbackSlot>,
    pub events: ReplaySummary,
    pub failures: Vec<FailureRecord>,
    pub hold: HoldState,
    pub interrupted: bool,
}

impl SessionReport {
    /// Human-readable key/value rows
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        let slots = if self.slots.is_empty() {
            "(none)".to_string()
        } else {
            self.slots
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut lines = vec![
            ("backend", self.backend.to_string()),
            ("slots", slots),
            (
                "events",
                format!(
                    "{} hover, {} start, {} end",
                    self.events.hover_enter, self.events.trigger_start, self.events.trigger_end
                ),
            ),
            ("hold", self.hold.to_string()),
            ("failures", self.failures.len().to_string()),
        ];
        if self.interrupted {
            lines.push(("interrupted", "true".to_string()));
        }
        lines
    }

    /// JSON rendering
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
