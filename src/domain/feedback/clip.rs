//! Audio clip references and the per-slot clip table

use std::fmt;
use std::sync::Arc;

use super::slot::FeedbackSlot;

/// Opaque handle to a pre-loaded sound asset.
///
/// Cloning is cheap: the name and bytes are shared.
#[derive(Clone)]
pub struct AudioClip {
    name: Arc<str>,
    data: Arc<[u8]>,
}

impl AudioClip {
    /// Create a clip from its encoded bytes
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        let name: String = name.into();
        let data: Vec<u8> = data.into();
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Human-readable clip name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Encoded audio bytes
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Shared handle to the encoded bytes
    pub fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.data)
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the clip carries no data
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Debug for AudioClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioClip")
            .field("name", &self.name)
            .field("len", &self.data.len())
            .finish()
    }
}

/// Clip configuration for a feedback binder.
/// Every slot is optional; an empty slot disables that cue.
#[derive(Debug, Clone, Default)]
pub struct FeedbackClips {
    pub hover: Option<AudioClip>,
    pub trigger_start: Option<AudioClip>,
    pub trigger_end: Option<AudioClip>,
    pub hold: Option<AudioClip>,
}

impl FeedbackClips {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for one slot
    pub fn with(mut self, slot: FeedbackSlot, clip: AudioClip) -> Self {
        self.set(slot, Some(clip));
        self
    }

    /// Replace the clip in one slot
    pub fn set(&mut self, slot: FeedbackSlot, clip: Option<AudioClip>) {
        match slot {
            FeedbackSlot::Hover => self.hover = clip,
            FeedbackSlot::TriggerStart => self.trigger_start = clip,
            FeedbackSlot::TriggerEnd => self.trigger_end = clip,
            FeedbackSlot::Hold => self.hold = clip,
        }
    }

    /// Get the clip configured for a slot
    pub fn get(&self, slot: FeedbackSlot) -> Option<&AudioClip> {
        match slot {
            FeedbackSlot::Hover => self.hover.as_ref(),
            FeedbackSlot::TriggerStart => self.trigger_start.as_ref(),
            FeedbackSlot::TriggerEnd => self.trigger_end.as_ref(),
            FeedbackSlot::Hold => self.hold.as_ref(),
        }
    }

    /// Slot table of (slot, clip) pairs in fixed order
    pub fn entries(&self) -> [(FeedbackSlot, Option<&AudioClip>); 4] {
        FeedbackSlot::ALL.map(|slot| (slot, self.get(slot)))
    }

    /// Slots that have a clip
    pub fn configured_slots(&self) -> Vec<FeedbackSlot> {
        self.entries()
            .into_iter()
            .filter_map(|(slot, clip)| clip.map(|_| slot))
            .collect()
    }

    /// Check if no slot is configured
    pub fn is_empty(&self) -> bool {
        self.configured_slots().is_empty()
    }
}
