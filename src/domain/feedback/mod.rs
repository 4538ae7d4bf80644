//! Feedback value objects and the hold toggle entity

pub mod clip;
pub mod hold;
pub mod playback;
pub mod slot;

pub use clip::{AudioClip, FeedbackClips};
pub use hold::{HoldState, HoldToggle, HoldTransition};
pub use playback::{LoopCount, PlaybackMode};
pub use slot::FeedbackSlot;
