//! Infrastructure layer - Adapter implementations
//!
//! Concrete implementations of the port interfaces: rodio playback, the
//! silent backend, diagnostic sinks, XDG config storage and clip loading.

pub mod clips;
pub mod config;
pub mod diagnostics;
pub mod playback;

// Re-export adapters
pub use clips::{load_clip, load_clips};
pub use config::XdgConfigStore;
pub use diagnostics::{CollectingDiagnostics, TracingDiagnostics};
pub use playback::{
    create_playback_factory, RodioPlaybackFactory, SilentPlaybackFactory, SilentPlaybackHandle,
};
