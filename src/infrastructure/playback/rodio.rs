//! Rodio-based playback adapter
//!
//! Each handle owns at most one sink. `play` replaces the sink, so starting
//! a clip that is already playing restarts it.

use std::io::Cursor;
use std::sync::Arc;

use parking_lot::Mutex;
use ::rodio::source::{Buffered, Source};
use ::rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::application::ports::{PlaybackError, PlaybackFactory, PlaybackHandle};
use crate::domain::feedback::{AudioClip, FeedbackSlot, LoopCount, PlaybackMode};

type ClipSource = Buffered<Decoder<Cursor<Arc<[u8]>>>>;

/// Wrap a clip in a buffered source that can be cloned per play.
///
/// Decoding is lazy: frames are decoded as the first pass plays and shared
/// with every clone from then on.
fn decode(clip: &AudioClip) -> Result<ClipSource, PlaybackError> {
    let decoder = Decoder::new(Cursor::new(clip.shared_bytes())).map_err(|e| PlaybackError::Decode {
        clip: clip.name().to_string(),
        message: e.to_string(),
    })?;
    Ok(decoder.buffered())
}

/// Decode the whole clip now. Clones of the returned source replay the
/// shared frames, so `play` does no decoding.
fn decode_fully(clip: &AudioClip) -> Result<ClipSource, PlaybackError> {
    let source = decode(clip)?;
    let samples = source.clone().count();
    tracing::debug!(clip = clip.name(), samples, "clip decoded");
    Ok(source)
}

struct HandleState {
    clip: Option<AudioClip>,
    /// Decoded ahead of time in low-latency mode
    prepared: Option<ClipSource>,
    mode: PlaybackMode,
    volume: f32,
    sink: Option<Sink>,
    looping: bool,
}

impl HandleState {
    /// Decode the clip now if the mode asks for it
    fn prepare(&mut self) {
        if self.mode != PlaybackMode::LowLatency || self.prepared.is_some() {
            return;
        }
        if let Some(ref clip) = self.clip {
            match decode_fully(clip) {
                Ok(source) => self.prepared = Some(source),
                // Retried on play, where the error reaches diagnostics
                Err(e) => tracing::warn!(error = %e, "could not pre-decode clip"),
            }
        }
    }

    fn source(&self, slot: FeedbackSlot) -> Result<ClipSource, PlaybackError> {
        if let Some(ref prepared) = self.prepared {
            return Ok(prepared.clone());
        }
        let clip = self.clip.as_ref().ok_or(PlaybackError::NoClip(slot))?;
        decode(clip)
    }
}

/// Playback handle backed by a rodio sink
pub struct RodioPlaybackHandle {
    slot: FeedbackSlot,
    stream_handle: OutputStreamHandle,
    state: Mutex<HandleState>,
}

impl RodioPlaybackHandle {
    fn new(slot: FeedbackSlot, stream_handle: OutputStreamHandle) -> Self {
        Self {
            slot,
            stream_handle,
            state: Mutex::new(HandleState {
                clip: None,
                prepared: None,
                mode: PlaybackMode::Default,
                volume: 1.0,
                sink: None,
                looping: false,
            }),
        }
    }
}

impl PlaybackHandle for RodioPlaybackHandle {
    fn set_clip(&self, clip: AudioClip) {
        let mut state = self.state.lock();
        state.clip = Some(clip);
        state.prepared = None;
        state.prepare();
    }

    fn set_playback_mode(&self, mode: PlaybackMode) {
        let mut state = self.state.lock();
        state.mode = mode;
        if mode == PlaybackMode::LowLatency {
            state.prepare();
        } else {
            state.prepared = None;
        }
    }

    fn playback_mode(&self) -> PlaybackMode {
        self.state.lock().mode
    }

    fn play(&self, loops: LoopCount) -> Result<(), PlaybackError> {
        let mut state = self.state.lock();
        let source = state.source(self.slot)?;

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| PlaybackError::DeviceNotAvailable(e.to_string()))?;
        sink.set_volume(state.volume);

        match loops {
            LoopCount::Infinite => sink.append(source.repeat_infinite()),
            LoopCount::Finite(n) => {
                for _ in 0..n {
                    sink.append(source.clone());
                }
            }
        }

        // Dropping the previous sink stops it
        state.sink = Some(sink);
        state.looping = loops.is_infinite();
        Ok(())
    }

    /// A non-immediate stop lets a one-shot finish on its own but still
    /// cancels a loop, which would otherwise never end.
    fn stop(&self, immediate: bool) -> Result<(), PlaybackError> {
        let mut state = self.state.lock();
        if let Some(sink) = state.sink.take() {
            if immediate || state.looping {
                sink.stop();
            } else {
                sink.detach();
            }
        }
        state.looping = false;
        Ok(())
    }

    fn set_volume(&self, volume: f32) {
        let mut state = self.state.lock();
        state.volume = volume.max(0.0);
        if let Some(ref sink) = state.sink {
            sink.set_volume(state.volume);
        }
    }

    fn volume(&self) -> f32 {
        self.state.lock().volume
    }

    fn is_playing(&self) -> bool {
        self.state
            .lock()
            .sink
            .as_ref()
            .is_some_and(|sink| !sink.empty())
    }
}

/// Factory for rodio playback handles.
///
/// Owns the output stream; handles stop producing sound once the factory
/// is dropped.
pub struct RodioPlaybackFactory {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
    low_latency: bool,
}

impl RodioPlaybackFactory {
    /// Open the default output device
    pub fn try_new() -> Result<Self, PlaybackError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| PlaybackError::DeviceNotAvailable(e.to_string()))?;
        Ok(Self {
            _stream: stream,
            stream_handle,
            low_latency: true,
        })
    }

    /// Enable or disable the low-latency mode
    pub fn with_low_latency(mut self, enabled: bool) -> Self {
        self.low_latency = enabled;
        self
    }
}

impl PlaybackFactory for RodioPlaybackFactory {
    fn create_handle(&self, slot: FeedbackSlot) -> Result<Arc<dyn PlaybackHandle>, PlaybackError> {
        Ok(Arc::new(RodioPlaybackHandle::new(
            slot,
            self.stream_handle.clone(),
        )))
    }

    fn low_latency_mode(&self) -> Option<PlaybackMode> {
        self.low_latency.then_some(PlaybackMode::LowLatency)
    }

    fn name(&self) -> &'static str {
        "rodio"
    }
}
