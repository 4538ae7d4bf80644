//! Interaction scripts: events interleaved with pauses

use std::fmt;
use std::str::FromStr;

use crate::domain::error::ScriptParseError;
use crate::domain::timing::Duration;

use super::event::InteractionEvent;

/// One step of an interaction script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    /// Deliver an event
    Event(InteractionEvent),
    /// Pause before the next step
    Wait(Duration),
}

impl FromStr for ScriptStep {
    type Err = ScriptParseError;

    /// Parse a step. Accepted forms: `hover`, `start`, `end` (and their long
    /// names), `wait 500ms`, `wait:500ms`, `wait=500ms`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let mut parts = input
            .splitn(2, |c: char| c.is_whitespace() || c == ':' || c == '=')
            .map(str::trim);
        let head = parts.next().unwrap_or_default();
        let rest = parts.next().unwrap_or_default();

        if head.eq_ignore_ascii_case("wait") {
            if rest.is_empty() {
                return Err(ScriptParseError::InvalidStep {
                    input: input.to_string(),
                    message: "wait needs a duration (e.g., wait 500ms)".to_string(),
                });
            }
            let duration = rest
                .parse::<Duration>()
                .map_err(|e| ScriptParseError::InvalidStep {
                    input: input.to_string(),
                    message: e.to_string(),
                })?;
            return Ok(Self::Wait(duration));
        }

        if !rest.is_empty() {
            return Err(ScriptParseError::InvalidStep {
                input: input.to_string(),
                message: "events take no arguments".to_string(),
            });
        }

        head.parse::<InteractionEvent>()
            .map(Self::Event)
            .map_err(|e| ScriptParseError::InvalidStep {
                input: input.to_string(),
                message: e.to_string(),
            })
    }
}

impl fmt::Display for ScriptStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event(event) => write!(f, "{}", event),
            Self::Wait(duration) => write!(f, "wait {}", duration),
        }
    }
}

/// Check if a script line carries no step
pub fn is_blank_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parse a script, one step per line.
/// Blank lines and `#` comments are skipped; errors name the 1-based line.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>, ScriptParseError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !is_blank_line(line))
        .map(|(i, line)| {
            line.parse().map_err(|e| ScriptParseError::AtLine {
                line: i + 1,
                source: Box::new(e),
            })
        })
        .collect()
}
