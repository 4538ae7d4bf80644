//! Audio feedback binder use case
//!
//! Binds an interactable's hover and trigger events to up to four playback
//! handles. Handlers never propagate errors: every playback failure is
//! handed to a [`DiagnosticSink`] and the next event is handled normally.
//!
//! Event table:
//!   hover-enter   -> hover handle plays once
//!   trigger-start -> trigger-start handle plays once, then the hold toggle
//!                    flips (IDLE -> HOLDING loops the hold handle,
//!                    HOLDING -> IDLE stops it immediately)
//!   trigger-end   -> trigger-end handle plays once

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use crate::domain::feedback::{
    FeedbackClips, FeedbackSlot, HoldState, HoldToggle, HoldTransition, LoopCount,
};
use crate::domain::interaction::InteractionEvent;

use super::ports::{
    DiagnosticSink, HandlerFailure, Interactable, PlaybackError, PlaybackFactory, PlaybackHandle,
};

/// Errors that stop a binder from being created
#[derive(Debug, Error)]
pub enum BinderError {
    #[error("Could not find an interactable on this object; attach one before adding audio feedback")]
    MissingInteractable,

    #[error("Failed to create {slot} playback handle: {source}")]
    HandleCreation {
        slot: FeedbackSlot,
        #[source]
        source: PlaybackError,
    },
}

type HandleTable = [Option<Arc<dyn PlaybackHandle>>; 4];

/// State shared with the subscribed handlers
struct BinderInner {
    handles: HandleTable,
    hold: Mutex<HoldToggle>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl BinderInner {
    fn handle(&self, slot: FeedbackSlot) -> Option<&Arc<dyn PlaybackHandle>> {
        self.handles[slot.index()].as_ref()
    }

    fn report(&self, event: InteractionEvent, slot: Option<FeedbackSlot>, error: PlaybackError) {
        self.diagnostics.report(&HandlerFailure { event, slot, error });
    }

    /// Run one playback call, reporting an error or a panic against its slot
    fn guarded(
        &self,
        event: InteractionEvent,
        slot: FeedbackSlot,
        call: impl FnOnce() -> Result<(), PlaybackError>,
    ) {
        let result = panic::catch_unwind(AssertUnwindSafe(call))
            .unwrap_or_else(|payload| Err(PlaybackError::Panicked(panic_message(payload))));
        if let Err(e) = result {
            self.report(event, Some(slot), e);
        }
    }

    /// Play a slot once if it has a handle
    fn play_once(&self, event: InteractionEvent, slot: FeedbackSlot) {
        if let Some(handle) = self.handle(slot) {
            tracing::debug!(%event, %slot, "playing cue");
            self.guarded(event, slot, || handle.play(LoopCount::ONCE));
        }
    }

    fn on_hover_enter(&self) {
        self.play_once(InteractionEvent::HoverEnter, FeedbackSlot::Hover);
    }

    fn on_trigger_start(&self) {
        let event = InteractionEvent::TriggerStart;
        self.play_once(event, FeedbackSlot::TriggerStart);

        let Some(hold) = self.handle(FeedbackSlot::Hold) else {
            return;
        };

        // Held across the playback call so toggles cannot interleave.
        // Released before the failure is reported, even on unwind.
        self.guarded(event, FeedbackSlot::Hold, || {
            let mut toggle = self.hold.lock();
            match toggle.toggle() {
                HoldTransition::Started => {
                    tracing::debug!("hold started");
                    hold.play(LoopCount::Infinite)
                }
                HoldTransition::Stopped => {
                    tracing::debug!("hold stopped");
                    hold.stop(true)
                }
            }
        });
    }

    fn on_trigger_end(&self) {
        self.play_once(InteractionEvent::TriggerEnd, FeedbackSlot::TriggerEnd);
    }

    /// Run a handler, turning a panic that escaped the per-call guards into
    /// a reported failure
    fn dispatch(&self, event: InteractionEvent, handler: impl FnOnce(&Self)) {
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| handler(self))) {
            self.report(event, None, PlaybackError::Panicked(panic_message(payload)));
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Plays audio cues in response to interaction events.
///
/// Created once with [`AudioFeedbackBinder::initialize`]; there is no other
/// constructor, so handles are never created twice.
pub struct AudioFeedbackBinder {
    inner: Arc<BinderInner>,
}

impl AudioFeedbackBinder {
    /// Create handles for the configured clips and subscribe to the
    /// interactable's events.
    ///
    /// For each configured slot a handle is created, switched to the
    /// factory's low-latency mode when one exists, and given its clip.
    /// A missing interactable is fatal and leaves nothing subscribed.
    pub fn initialize(
        clips: FeedbackClips,
        factory: &dyn PlaybackFactory,
        interactable: Option<Arc<dyn Interactable>>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Result<Self, BinderError> {
        let mut handles: HandleTable = Default::default();

        for (slot, clip) in clips.entries() {
            let Some(clip) = clip else {
                continue;
            };
            let handle = factory
                .create_handle(slot)
                .map_err(|source| BinderError::HandleCreation { slot, source })?;
            if let Some(mode) = factory.low_latency_mode() {
                handle.set_playback_mode(mode);
            }
            handle.set_clip(clip.clone());
            tracing::debug!(%slot, clip = clip.name(), backend = factory.name(), "created playback handle");
            handles[slot.index()] = Some(handle);
        }

        let interactable = interactable.ok_or(BinderError::MissingInteractable)?;

        let inner = Arc::new(BinderInner {
            handles,
            hold: Mutex::new(HoldToggle::new()),
            diagnostics,
        });

        let binder = Self { inner };
        binder.subscribe(interactable.as_ref());
        Ok(binder)
    }

    fn subscribe(&self, interactable: &dyn Interactable) {
        let inner = Arc::clone(&self.inner);
        interactable.on_hover_enter().add(move || {
            inner.dispatch(InteractionEvent::HoverEnter, BinderInner::on_hover_enter)
        });

        let inner = Arc::clone(&self.inner);
        interactable.on_trigger_start().add(move || {
            inner.dispatch(InteractionEvent::TriggerStart, BinderInner::on_trigger_start)
        });

        let inner = Arc::clone(&self.inner);
        interactable.on_trigger_end().add(move || {
            inner.dispatch(InteractionEvent::TriggerEnd, BinderInner::on_trigger_end)
        });

        tracing::debug!(slots = ?self.configured_slots(), "subscribed to interactable events");
    }

    /// Handle for a slot, if that slot was configured
    pub fn handle(&self, slot: FeedbackSlot) -> Option<Arc<dyn PlaybackHandle>> {
        self.inner.handle(slot).cloned()
    }

    /// Handle used for hover feedback, for further configuration such as volume
    pub fn hover_handle(&self) -> Option<Arc<dyn PlaybackHandle>> {
        self.handle(FeedbackSlot::Hover)
    }

    /// Handle used for trigger-start feedback
    pub fn trigger_start_handle(&self) -> Option<Arc<dyn PlaybackHandle>> {
        self.handle(FeedbackSlot::TriggerStart)
    }

    /// Handle used for trigger-end feedback
    pub fn trigger_end_handle(&self) -> Option<Arc<dyn PlaybackHandle>> {
        self.handle(FeedbackSlot::TriggerEnd)
    }

    /// Handle used for hold feedback
    pub fn hold_handle(&self) -> Option<Arc<dyn PlaybackHandle>> {
        self.handle(FeedbackSlot::Hold)
    }

    /// Slots that received a handle
    pub fn configured_slots(&self) -> Vec<FeedbackSlot> {
        FeedbackSlot::ALL
            .into_iter()
            .filter(|slot| self.inner.handle(*slot).is_some())
            .collect()
    }

    /// Current hold state
    pub fn hold_state(&self) -> HoldState {
        self.inner.hold.lock().state()
    }

    /// Check if the hold sound is looping
    pub fn is_holding(&self) -> bool {
        self.hold_state() == HoldState::Holding
    }

    /// Apply one volume to every handle
    pub fn set_volume(&self, volume: f32) {
        for handle in self.inner.handles.iter().flatten() {
            handle.set_volume(volume);
        }
    }
}
