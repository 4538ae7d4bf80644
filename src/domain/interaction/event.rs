//! Interaction events emitted by an interactable

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::InvalidEventError;

/// Discrete interaction events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionEvent {
    HoverEnter,
    TriggerStart,
    TriggerEnd,
}

impl InteractionEvent {
    /// All events, in delivery-table order
    pub const ALL: [InteractionEvent; 3] = [
        InteractionEvent::HoverEnter,
        InteractionEvent::TriggerStart,
        InteractionEvent::TriggerEnd,
    ];

    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HoverEnter => "hover-enter",
            Self::TriggerStart => "trigger-start",
            Self::TriggerEnd => "trigger-end",
        }
    }
}

impl fmt::Display for InteractionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InteractionEvent {
    type Err = InvalidEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "hover" | "hover-enter" => Ok(Self::HoverEnter),
            "start" | "trigger-start" | "press" => Ok(Self::TriggerStart),
            "end" | "trigger-end" | "release" => Ok(Self::TriggerEnd),
            _ => Err(InvalidEventError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_short_forms() {
        assert_eq!("hover".parse::<InteractionEvent>().unwrap(), InteractionEvent::HoverEnter);
        assert_eq!("start".parse::<InteractionEvent>().unwrap(), InteractionEvent::TriggerStart);
        assert_eq!("end".parse::<InteractionEvent>().unwrap(), InteractionEvent::TriggerEnd);
    }

    #[test]
    fn parse_long_forms() {
        assert_eq!(
            "Trigger_Start".parse::<InteractionEvent>().unwrap(),
            InteractionEvent::TriggerStart
        );
        assert_eq!(
            "hover-enter".parse::<InteractionEvent>().unwrap(),
            InteractionEvent::HoverEnter
        );
    }

    #[test]
    fn parse_invalid() {
        let err = "jump".parse::<InteractionEvent>().unwrap_err();
        assert_eq!(err.input, "jump");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for event in InteractionEvent::ALL {
            assert_eq!(event.to_string().parse::<InteractionEvent>().unwrap(), event);
        }
    }
}
