//! Silent playback adapter
//!
//! Used with `--silent` and when no output device is available. Calls are
//! logged instead of producing sound; one-shots finish instantly, loops
//! count as playing until stopped.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::application::ports::{PlaybackError, PlaybackFactory, PlaybackHandle};
use crate::domain::feedback::{AudioClip, FeedbackSlot, LoopCount, PlaybackMode};

#[derive(Debug)]
struct SilentState {
    clip: Option<AudioClip>,
    mode: PlaybackMode,
    volume: f32,
    looping: bool,
}

/// Playback handle that produces no sound
#[derive(Debug)]
pub struct SilentPlaybackHandle {
    slot: FeedbackSlot,
    state: Mutex<SilentState>,
}

impl SilentPlaybackHandle {
    /// Create a handle for a slot
    pub fn new(slot: FeedbackSlot) -> Self {
        Self {
            slot,
            state: Mutex::new(SilentState {
                clip: None,
                mode: PlaybackMode::Default,
                volume: 1.0,
                looping: false,
            }),
        }
    }
}

impl PlaybackHandle for SilentPlaybackHandle {
    fn set_clip(&self, clip: AudioClip) {
        self.state.lock().clip = Some(clip);
    }

    fn set_playback_mode(&self, mode: PlaybackMode) {
        self.state.lock().mode = mode;
    }

    fn playback_mode(&self) -> PlaybackMode {
        self.state.lock().mode
    }

    fn play(&self, loops: LoopCount) -> Result<(), PlaybackError> {
        let mut state = self.state.lock();
        let clip = state.clip.as_ref().ok_or(PlaybackError::NoClip(self.slot))?;
        tracing::info!(slot = %self.slot, clip = clip.name(), %loops, volume = state.volume, "play");
        state.looping = loops.is_infinite();
        Ok(())
    }

    fn stop(&self, immediate: bool) -> Result<(), PlaybackError> {
        let mut state = self.state.lock();
        tracing::info!(slot = %self.slot, immediate, "stop");
        state.looping = false;
        Ok(())
    }

    fn set_volume(&self, volume: f32) {
        self.state.lock().volume = volume.max(0.0);
    }

    fn volume(&self) -> f32 {
        self.state.lock().volume
    }

    fn is_playing(&self) -> bool {
        self.state.lock().looping
    }
}

/// Factory for silent handles
#[derive(Debug, Clone, Copy)]
pub struct SilentPlaybackFactory {
    low_latency: bool,
}

impl SilentPlaybackFactory {
    /// Create a new silent factory
    pub fn new() -> Self {
        Self { low_latency: true }
    }

    /// Enable or disable the low-latency mode
    pub fn with_low_latency(mut self, enabled: bool) -> Self {
        self.low_latency = enabled;
        self
    }
}

impl Default for SilentPlaybackFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackFactory for SilentPlaybackFactory {
    fn create_handle(&self, slot: FeedbackSlot) -> Result<Arc<dyn PlaybackHandle>, PlaybackError> {
        Ok(Arc::new(SilentPlaybackHandle::new(slot)))
    }

    fn low_latency_mode(&self) -> Option<PlaybackMode> {
        self.low_latency.then_some(PlaybackMode::LowLatency)
    }

    fn name(&self) -> &'static str {
        "silent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_plays_until_stopped() {
        let handle = SilentPlaybackHandle::new(FeedbackSlot::Hold);
        handle.set_clip(AudioClip::new("hum", vec![0u8]));

        handle.play(LoopCount::Infinite).unwrap();
        assert!(handle.is_playing());

        handle.stop(true).unwrap();
        assert!(!handle.is_playing());
    }

    #[test]
    fn one_shot_finishes_instantly() {
        let handle = SilentPlaybackHandle::new(FeedbackSlot::Hover);
        handle.set_clip(AudioClip::new("tick", vec![0u8]));

        handle.play(LoopCount::ONCE).unwrap();
        assert!(!handle.is_playing());
    }

    #[test]
    fn play_without_clip_fails() {
        let handle = SilentPlaybackHandle::new(FeedbackSlot::TriggerEnd);
        assert_eq!(
            handle.play(LoopCount::ONCE),
            Err(PlaybackError::NoClip(FeedbackSlot::TriggerEnd))
        );
    }

    #[test]
    fn volume_is_clamped() {
        let handle = SilentPlaybackHandle::new(FeedbackSlot::Hover);
        handle.set_volume(-2.0);
        assert_eq!(handle.volume(), 0.0);
    }

    #[test]
    fn factory_low_latency_toggle() {
        assert_eq!(
            SilentPlaybackFactory::new().low_latency_mode(),
            Some(PlaybackMode::LowLatency)
        );
        assert_eq!(
            SilentPlaybackFactory::new().with_low_latency(false).low_latency_mode(),
            None
        );
    }
}
