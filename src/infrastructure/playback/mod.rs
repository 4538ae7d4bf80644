//! Playback infrastructure adapters

mod rodio;
mod silent;

pub use self::rodio::{RodioPlaybackFactory, RodioPlaybackHandle};
pub use self::silent::{SilentPlaybackFactory, SilentPlaybackHandle};

use crate::application::ports::PlaybackFactory;

/// Create a playback factory.
///
/// Silent mode never touches the audio device. Otherwise the default output
/// device is opened, falling back to silent playback if none is available.
pub fn create_playback_factory(silent: bool, low_latency: bool) -> Box<dyn PlaybackFactory> {
    if silent {
        return Box::new(SilentPlaybackFactory::new().with_low_latency(low_latency));
    }

    match RodioPlaybackFactory::try_new() {
        Ok(factory) => Box::new(factory.with_low_latency(low_latency)),
        Err(e) => {
            tracing::warn!(error = %e, "no audio output, falling back to silent playback");
            Box::new(SilentPlaybackFactory::new().with_low_latency(low_latency))
        }
    }
}
