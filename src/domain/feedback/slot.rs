//! Feedback slot identifiers

use std::fmt;

use serde::Serialize;

/// The four places a clip can be configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackSlot {
    /// Played once when the interactable is hovered
    Hover,
    /// Played once when a trigger starts
    TriggerStart,
    /// Played once when a trigger ends
    TriggerEnd,
    /// Looped while the hold toggle is active
    Hold,
}

impl FeedbackSlot {
    /// All slots, in table order
    pub const ALL: [FeedbackSlot; 4] = [
        FeedbackSlot::Hover,
        FeedbackSlot::TriggerStart,
        FeedbackSlot::TriggerEnd,
        FeedbackSlot::Hold,
    ];

    /// Position of this slot in fixed-size slot tables
    pub const fn index(&self) -> usize {
        match self {
            Self::Hover => 0,
            Self::TriggerStart => 1,
            Self::TriggerEnd => 2,
            Self::Hold => 3,
        }
    }

    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::TriggerStart => "trigger-start",
            Self::TriggerEnd => "trigger-end",
            Self::Hold => "hold",
        }
    }
}

impl fmt::Display for FeedbackSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
