//! Playback port: handles that start and stop one clip each
//!
//! A factory creates one handle per configured feedback slot. Handles are
//! shared between the binder's event handlers and callers that want to
//! adjust them (volume) after initialization, so every method takes `&self`.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::feedback::{AudioClip, FeedbackSlot, LoopCount, PlaybackMode};

/// Errors that can occur while creating or driving a playback handle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// No audio output device available
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),

    /// `play` was called before a clip was attached
    #[error("No clip attached to the {0} handle")]
    NoClip(FeedbackSlot),

    /// The attached clip could not be decoded
    #[error("Failed to decode clip '{clip}': {message}")]
    Decode { clip: String, message: String },

    /// Failed to play or stop the clip
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// The handle panicked while being driven
    #[error("Playback handle panicked: {0}")]
    Panicked(String),
}

/// Port trait for a single playback handle
pub trait PlaybackHandle: Send + Sync {
    /// Attach the clip this handle plays
    fn set_clip(&self, clip: AudioClip);

    /// Apply an output mode hint
    fn set_playback_mode(&self, mode: PlaybackMode);

    /// Current output mode
    fn playback_mode(&self) -> PlaybackMode;

    /// Start playing the attached clip, restarting it if already playing
    fn play(&self, loops: LoopCount) -> Result<(), PlaybackError>;

    /// Stop playback. `immediate` cuts the sound off instead of letting the
    /// current pass finish.
    fn stop(&self, immediate: bool) -> Result<(), PlaybackError>;

    /// Set the output volume (1.0 = unchanged)
    fn set_volume(&self, volume: f32);

    /// Current output volume
    fn volume(&self) -> f32;

    /// Check if sound is currently coming out of this handle
    fn is_playing(&self) -> bool;
}

/// Port trait for creating playback handles
pub trait PlaybackFactory {
    /// Create a new handle for a slot
    fn create_handle(&self, slot: FeedbackSlot) -> Result<Arc<dyn PlaybackHandle>, PlaybackError>;

    /// The low-latency mode if this backend offers one
    fn low_latency_mode(&self) -> Option<PlaybackMode>;

    /// Backend name for status output
    fn name(&self) -> &'static str;
}
