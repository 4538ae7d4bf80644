//! Hold toggle state machine

use std::fmt;

use serde::Serialize;

/// Hold states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HoldState {
    #[default]
    Idle,
    Holding,
}

impl HoldState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Holding => "holding",
        }
    }
}

impl fmt::Display for HoldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a toggle did, and therefore what the hold sound must do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldTransition {
    /// IDLE -> HOLDING: start looping
    Started,
    /// HOLDING -> IDLE: stop immediately
    Stopped,
}

/// Hold toggle entity.
///
/// State machine:
///   IDLE -> HOLDING (toggle)
///   HOLDING -> IDLE (toggle)
///
/// Every trigger-start flips the state, so the parity of trigger-starts
/// decides whether the hold sound is looping.
#[derive(Debug, Default)]
pub struct HoldToggle {
    state: HoldState,
}

impl HoldToggle {
    /// Create a new toggle in idle state
    pub fn new() -> Self {
        Self {
            state: HoldState::Idle,
        }
    }

    /// Get the current state
    pub fn state(&self) -> HoldState {
        self.state
    }

    /// Check if the hold sound should be looping
    pub fn is_holding(&self) -> bool {
        self.state == HoldState::Holding
    }

    /// Flip the state and report the transition taken
    pub fn toggle(&mut self) -> HoldTransition {
        match self.state {
            HoldState::Idle => {
                self.state = HoldState::Holding;
                HoldTransition::Started
            }
            HoldState::Holding => {
                self.state = HoldState::Idle;
                HoldTransition::Stopped
            }
        }
    }
}
