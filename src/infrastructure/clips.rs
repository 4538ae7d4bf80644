//! Loading clip files from disk

use std::path::Path;

use tokio::fs;

use crate::domain::config::ClipsConfig;
use crate::domain::error::ClipLoadError;
use crate::domain::feedback::{AudioClip, FeedbackClips, FeedbackSlot};

/// Read a clip file. The clip is named after the file stem.
///
/// The bytes are not decoded here; format errors surface when the clip is
/// first played or prepared.
pub async fn load_clip(path: impl AsRef<Path>) -> Result<AudioClip, ClipLoadError> {
    let path = path.as_ref();
    let to_error = |message: String| ClipLoadError {
        path: path.display().to_string(),
        message,
    };

    let data = fs::read(path).await.map_err(|e| to_error(e.to_string()))?;
    if data.is_empty() {
        return Err(to_error("file is empty".to_string()));
    }

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    tracing::debug!(path = %path.display(), bytes = data.len(), "loaded clip");
    Ok(AudioClip::new(name, data))
}

/// Load every clip named in the config. Slots without a path stay empty.
pub async fn load_clips(config: &ClipsConfig) -> Result<FeedbackClips, ClipLoadError> {
    let mut clips = FeedbackClips::new();
    for slot in FeedbackSlot::ALL {
        if let Some(path) = config.path(slot) {
            clips.set(slot, Some(load_clip(path).await?));
        }
    }
    Ok(clips)
}
