//! Playback parameters shared by every handle implementation

use std::fmt;

/// How many times a clip plays when started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCount {
    /// Play the clip this many times back to back
    Finite(u32),
    /// Repeat until stopped
    Infinite,
}

impl LoopCount {
    /// A single pass
    pub const ONCE: LoopCount = LoopCount::Finite(1);

    /// Integer form used by host audio APIs: `n` passes, or `-1` forever
    pub const fn as_raw(&self) -> i32 {
        match self {
            Self::Finite(n) => {
                if *n > i32::MAX as u32 {
                    i32::MAX
                } else {
                    *n as i32
                }
            }
            Self::Infinite => -1,
        }
    }

    /// Parse the integer form; `0` and values below `-1` are rejected
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            -1 => Some(Self::Infinite),
            n if n > 0 => Some(Self::Finite(n as u32)),
            _ => None,
        }
    }

    /// Check if this repeats forever
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }
}

impl fmt::Display for LoopCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(n) => write!(f, "{}x", n),
            Self::Infinite => write!(f, "loop"),
        }
    }
}

/// Output mode hint applied to a handle before its clip is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    #[default]
    Default,
    /// Minimise start-up delay, e.g. by decoding ahead of time
    LowLatency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values() {
        assert_eq!(LoopCount::ONCE.as_raw(), 1);
        assert_eq!(LoopCount::Infinite.as_raw(), -1);
        assert_eq!(LoopCount::Finite(3).as_raw(), 3);
    }

    #[test]
    fn from_raw() {
        assert_eq!(LoopCount::from_raw(1), Some(LoopCount::ONCE));
        assert_eq!(LoopCount::from_raw(-1), Some(LoopCount::Infinite));
        assert_eq!(LoopCount::from_raw(0), None);
        assert_eq!(LoopCount::from_raw(-2), None);
    }

    #[test]
    fn display() {
        assert_eq!(LoopCount::ONCE.to_string(), "1x");
        assert_eq!(LoopCount::Infinite.to_string(), "loop");
    }
}
