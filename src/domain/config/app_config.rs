//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::feedback::FeedbackSlot;
use crate::domain::timing::Duration;

/// Default playback volume
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Clip file paths, one per feedback slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipsConfig {
    pub hover: Option<String>,
    pub trigger_start: Option<String>,
    pub trigger_end: Option<String>,
    pub hold: Option<String>,
}

impl ClipsConfig {
    /// Path configured for a slot
    pub fn path(&self, slot: FeedbackSlot) -> Option<&str> {
        match slot {
            FeedbackSlot::Hover => self.hover.as_deref(),
            FeedbackSlot::TriggerStart => self.trigger_start.as_deref(),
            FeedbackSlot::TriggerEnd => self.trigger_end.as_deref(),
            FeedbackSlot::Hold => self.hold.as_deref(),
        }
    }

    /// Check if no slot has a path
    pub fn is_empty(&self) -> bool {
        FeedbackSlot::ALL.iter().all(|slot| self.path(*slot).is_none())
    }

    /// Merge with another, where other takes precedence
    pub fn merge(self, other: Self) -> Self {
        Self {
            hover: other.hover.or(self.hover),
            trigger_start: other.trigger_start.or(self.trigger_start),
            trigger_end: other.trigger_end.or(self.trigger_end),
            hold: other.hold.or(self.hold),
        }
    }
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub low_latency: Option<bool>,
    pub volume: Option<f32>,
    pub silent: Option<bool>,
    pub linger: Option<String>,
    /// Kept last so TOML output places the table after plain keys
    pub clips: Option<ClipsConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            clips: None,
            low_latency: Some(true),
            volume: Some(DEFAULT_VOLUME),
            silent: Some(false),
            linger: Some(Duration::default_linger().to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            clips: Self::merge_clips_config(self.clips, other.clips),
            low_latency: other.low_latency.or(self.low_latency),
            volume: other.volume.or(self.volume),
            silent: other.silent.or(self.silent),
            linger: other.linger.or(self.linger),
        }
    }

    /// Merge clip sections
    fn merge_clips_config(
        base: Option<ClipsConfig>,
        other: Option<ClipsConfig>,
    ) -> Option<ClipsConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(b.merge(o)),
        }
    }

    /// Clip paths, or an empty table if not set
    pub fn clips_or_default(&self) -> ClipsConfig {
        self.clips.clone().unwrap_or_default()
    }

    /// Get low-latency setting, or true if not set
    pub fn low_latency_or_default(&self) -> bool {
        self.low_latency.unwrap_or(true)
    }

    /// Get volume, or 1.0 if not set or negative
    pub fn volume_or_default(&self) -> f32 {
        self.volume
            .filter(|v| v.is_finite() && *v >= 0.0)
            .unwrap_or(DEFAULT_VOLUME)
    }

    /// Get silent setting, or false if not set
    pub fn silent_or_default(&self) -> bool {
        self.silent.unwrap_or(false)
    }

    /// Get linger as parsed Duration, or default if not set/invalid
    pub fn linger_or_default(&self) -> Duration {
        self.linger
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Duration::default_linger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.clips.is_none());
        assert_eq!(config.low_latency, Some(true));
        assert_eq!(config.volume, Some(1.0));
        assert_eq!(config.silent, Some(false));
        assert_eq!(config.linger, Some("1s".to_string()));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.clips.is_none());
        assert!(config.low_latency.is_none());
        assert!(config.volume.is_none());
        assert!(config.silent.is_none());
        assert!(config.linger.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            volume: Some(0.5),
            silent: Some(false),
            linger: Some("2s".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            volume: Some(0.8),
            silent: None, // Should not override
            linger: Some("500ms".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.volume, Some(0.8));
        assert_eq!(merged.silent, Some(false)); // Kept from base
        assert_eq!(merged.linger, Some("500ms".to_string()));
    }

    #[test]
    fn merge_clips_per_slot() {
        let base = AppConfig {
            clips: Some(ClipsConfig {
                hover: Some("tick.wav".to_string()),
                hold: Some("hum.wav".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let other = AppConfig {
            clips: Some(ClipsConfig {
                hold: Some("buzz.wav".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let clips = base.merge(other).clips_or_default();
        assert_eq!(clips.path(FeedbackSlot::Hover), Some("tick.wav"));
        assert_eq!(clips.path(FeedbackSlot::Hold), Some("buzz.wav"));
        assert_eq!(clips.path(FeedbackSlot::TriggerStart), None);
    }

    #[test]
    fn merge_preserves_base_clips_when_other_is_none() {
        let base = AppConfig {
            clips: Some(ClipsConfig {
                trigger_end: Some("up.wav".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let merged = base.merge(AppConfig::empty());
        assert_eq!(
            merged.clips_or_default().path(FeedbackSlot::TriggerEnd),
            Some("up.wav")
        );
    }

    #[test]
    fn clips_config_is_empty() {
        assert!(ClipsConfig::default().is_empty());
        let clips = ClipsConfig {
            trigger_end: Some("up.wav".to_string()),
            ..Default::default()
        };
        assert!(!clips.is_empty());
    }

    #[test]
    fn volume_or_default_rejects_negative() {
        let config = AppConfig {
            volume: Some(-1.0),
            ..Default::default()
        };
        assert_eq!(config.volume_or_default(), DEFAULT_VOLUME);
    }

    #[test]
    fn linger_or_default_parses() {
        let config = AppConfig {
            linger: Some("250ms".to_string()),
            ..Default::default()
        };
        assert_eq!(config.linger_or_default().as_millis(), 250);
    }

    #[test]
    fn linger_or_default_uses_default_on_invalid() {
        let config = AppConfig {
            linger: Some("soon".to_string()),
            ..Default::default()
        };
        assert_eq!(config.linger_or_default(), Duration::default_linger());
    }

    #[test]
    fn boolean_defaults() {
        let config = AppConfig::empty();
        assert!(config.low_latency_or_default());
        assert!(!config.silent_or_default());
    }
}
