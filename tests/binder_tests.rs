//! Audio feedback binder integration tests
//!
//! Drives the binder through the public API with recording handles that
//! share one call log, so ordering across slots can be checked.

use std::sync::Arc;

use parking_lot::Mutex;

use interaction_cues::application::ports::{
    DiagnosticSink, Interactable, PlaybackError, PlaybackFactory, PlaybackHandle,
};
use interaction_cues::application::{AudioFeedbackBinder, BinderError};
use interaction_cues::domain::feedback::{
    AudioClip, FeedbackClips, FeedbackSlot, HoldState, LoopCount, PlaybackMode,
};
use interaction_cues::domain::interaction::{InteractableEvents, InteractionEvent};
use interaction_cues::infrastructure::CollectingDiagnostics;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Call {
    Play(LoopCount),
    Stop(bool),
}

type CallLog = Arc<Mutex<Vec<(FeedbackSlot, Call)>>>;

struct RecordingHandle {
    slot: FeedbackSlot,
    log: CallLog,
    failing: bool,
    volume: Mutex<f32>,
}

impl PlaybackHandle for RecordingHandle {
    fn set_clip(&self, _clip: AudioClip) {}

    fn set_playback_mode(&self, _mode: PlaybackMode) {}

    fn playback_mode(&self) -> PlaybackMode {
        PlaybackMode::Default
    }

    fn play(&self, loops: LoopCount) -> Result<(), PlaybackError> {
        self.log.lock().push((self.slot, Call::Play(loops)));
        if self.failing {
            return Err(PlaybackError::PlaybackFailed("unplugged".to_string()));
        }
        Ok(())
    }

    fn stop(&self, immediate: bool) -> Result<(), PlaybackError> {
        self.log.lock().push((self.slot, Call::Stop(immediate)));
        Ok(())
    }

    fn set_volume(&self, volume: f32) {
        *self.volume.lock() = volume;
    }

    fn volume(&self) -> f32 {
        *self.volume.lock()
    }

    fn is_playing(&self) -> bool {
        false
    }
}

#[derive(Default)]
struct RecordingFactory {
    log: CallLog,
    failing: Vec<FeedbackSlot>,
    created: Mutex<Vec<Arc<RecordingHandle>>>,
}

impl PlaybackFactory for RecordingFactory {
    fn create_handle(&self, slot: FeedbackSlot) -> Result<Arc<dyn PlaybackHandle>, PlaybackError> {
        let handle = Arc::new(RecordingHandle {
            slot,
            log: Arc::clone(&self.log),
            failing: self.failing.contains(&slot),
            volume: Mutex::new(1.0),
        });
        self.created.lock().push(Arc::clone(&handle));
        Ok(handle)
    }

    fn low_latency_mode(&self) -> Option<PlaybackMode> {
        Some(PlaybackMode::LowLatency)
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

fn clips_for(slots: &[FeedbackSlot]) -> FeedbackClips {
    slots.iter().fold(FeedbackClips::new(), |clips, slot| {
        clips.with(*slot, AudioClip::new(slot.as_str(), vec![0u8; 4]))
    })
}

struct Rig {
    binder: AudioFeedbackBinder,
    events: Arc<InteractableEvents>,
    diagnostics: Arc<CollectingDiagnostics>,
    log: CallLog,
}

fn rig(slots: &[FeedbackSlot], failing: &[FeedbackSlot]) -> Rig {
    let factory = RecordingFactory {
        failing: failing.to_vec(),
        ..Default::default()
    };
    let events = Arc::new(InteractableEvents::new());
    let diagnostics = Arc::new(CollectingDiagnostics::new());
    let binder = AudioFeedbackBinder::initialize(
        clips_for(slots),
        &factory,
        Some(events.clone() as Arc<dyn Interactable>),
        diagnostics.clone() as Arc<dyn DiagnosticSink>,
    )
    .unwrap();
    Rig {
        binder,
        events,
        diagnostics,
        log: factory.log,
    }
}

impl Rig {
    fn take_calls(&self) -> Vec<(FeedbackSlot, Call)> {
        std::mem::take(&mut *self.log.lock())
    }
}

/// Every subset of the four slots
fn all_configurations() -> Vec<Vec<FeedbackSlot>> {
    (0u8..16)
        .map(|mask| {
            FeedbackSlot::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, slot)| slot)
                .collect()
        })
        .collect()
}

#[test]
fn each_configuration_only_touches_configured_slots() {
    for slots in all_configurations() {
        let rig = rig(&slots, &[]);
        assert_eq!(rig.binder.configured_slots(), slots);
        for slot in FeedbackSlot::ALL {
            assert_eq!(rig.binder.handle(slot).is_some(), slots.contains(&slot));
        }

        rig.events.emit(InteractionEvent::HoverEnter);
        let expected: Vec<_> = slots
            .iter()
            .filter(|s| **s == FeedbackSlot::Hover)
            .map(|s| (*s, Call::Play(LoopCount::ONCE)))
            .collect();
        assert_eq!(rig.take_calls(), expected, "hover with {:?}", slots);

        rig.events.emit(InteractionEvent::TriggerStart);
        let mut expected = Vec::new();
        if slots.contains(&FeedbackSlot::TriggerStart) {
            expected.push((FeedbackSlot::TriggerStart, Call::Play(LoopCount::ONCE)));
        }
        if slots.contains(&FeedbackSlot::Hold) {
            expected.push((FeedbackSlot::Hold, Call::Play(LoopCount::Infinite)));
        }
        assert_eq!(rig.take_calls(), expected, "trigger-start with {:?}", slots);

        rig.events.emit(InteractionEvent::TriggerEnd);
        let expected: Vec<_> = slots
            .iter()
            .filter(|s| **s == FeedbackSlot::TriggerEnd)
            .map(|s| (*s, Call::Play(LoopCount::ONCE)))
            .collect();
        assert_eq!(rig.take_calls(), expected, "trigger-end with {:?}", slots);

        assert_eq!(rig.diagnostics.count(), 0);
    }
}

#[test]
fn hold_parity_follows_press_count() {
    for presses in 0..7u32 {
        let rig = rig(&[FeedbackSlot::Hold], &[]);
        for _ in 0..presses {
            rig.events.emit(InteractionEvent::TriggerStart);
        }
        let expected = if presses % 2 == 1 {
            HoldState::Holding
        } else {
            HoldState::Idle
        };
        assert_eq!(rig.binder.hold_state(), expected, "{} presses", presses);
    }
}

#[test]
fn release_does_not_stop_hold() {
    let rig = rig(&[FeedbackSlot::TriggerEnd, FeedbackSlot::Hold], &[]);
    rig.events.emit(InteractionEvent::TriggerStart);
    rig.events.emit(InteractionEvent::TriggerEnd);

    assert!(rig.binder.is_holding());
    assert!(!rig
        .take_calls()
        .iter()
        .any(|(slot, call)| *slot == FeedbackSlot::Hold && matches!(call, Call::Stop(_))));
}

#[test]
fn three_presses_replay_scenario() {
    let rig = rig(&[FeedbackSlot::TriggerStart, FeedbackSlot::Hold], &[]);
    for _ in 0..3 {
        rig.events.emit(InteractionEvent::TriggerStart);
    }

    assert_eq!(
        rig.take_calls(),
        vec![
            (FeedbackSlot::TriggerStart, Call::Play(LoopCount::ONCE)),
            (FeedbackSlot::Hold, Call::Play(LoopCount::Infinite)),
            (FeedbackSlot::TriggerStart, Call::Play(LoopCount::ONCE)),
            (FeedbackSlot::Hold, Call::Stop(true)),
            (FeedbackSlot::TriggerStart, Call::Play(LoopCount::ONCE)),
            (FeedbackSlot::Hold, Call::Play(LoopCount::Infinite)),
        ]
    );
    assert_eq!(rig.binder.hold_state(), HoldState::Holding);
}

#[test]
fn hover_failure_does_not_block_later_events() {
    let rig = rig(
        &[FeedbackSlot::Hover, FeedbackSlot::Hold],
        &[FeedbackSlot::Hover],
    );

    rig.events.emit(InteractionEvent::HoverEnter);
    rig.events.emit(InteractionEvent::TriggerStart);

    assert!(rig.binder.is_holding());
    let failures = rig.diagnostics.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].event, InteractionEvent::HoverEnter);
    assert_eq!(failures[0].slot, Some(FeedbackSlot::Hover));
    assert!(failures[0].to_string().contains("unplugged"));
}

#[test]
fn repeated_failures_keep_reporting() {
    let rig = rig(&[FeedbackSlot::TriggerEnd], &[FeedbackSlot::TriggerEnd]);
    for _ in 0..3 {
        rig.events.emit(InteractionEvent::TriggerEnd);
    }
    assert_eq!(rig.diagnostics.count(), 3);
}

#[test]
fn missing_interactable_is_fatal_and_releases_handles() {
    let factory = RecordingFactory::default();
    let result = AudioFeedbackBinder::initialize(
        clips_for(&FeedbackSlot::ALL),
        &factory,
        None,
        Arc::new(CollectingDiagnostics::new()),
    );

    assert!(matches!(result, Err(BinderError::MissingInteractable)));
    drop(result);

    let created = factory.created.lock();
    assert_eq!(created.len(), 4);
    for handle in created.iter() {
        // Only the factory's record is left; no handler captured the handle
        assert_eq!(Arc::strong_count(handle), 1, "{} handle still held", handle.slot);
    }
    assert!(factory.log.lock().is_empty());
}

#[test]
fn one_subscription_per_stream() {
    let rig = rig(&[], &[]);
    for event in InteractionEvent::ALL {
        assert_eq!(rig.events.stream(event).subscriber_count(), 1);
    }
}

#[test]
fn volume_reaches_every_handle() {
    let rig = rig(&FeedbackSlot::ALL, &[]);
    rig.binder.set_volume(0.25);
    for slot in FeedbackSlot::ALL {
        assert_eq!(rig.binder.handle(slot).unwrap().volume(), 0.25);
    }

    rig.binder.hover_handle().unwrap().set_volume(0.75);
    assert_eq!(rig.binder.hover_handle().unwrap().volume(), 0.75);
    assert_eq!(rig.binder.hold_handle().unwrap().volume(), 0.25);
}

#[test]
fn concurrent_presses_keep_parity() {
    let rig = rig(&[FeedbackSlot::Hold], &[]);
    let threads: Vec<_> = (0..4)
        .map(|_| {
            let events = Arc::clone(&rig.events);
            std::thread::spawn(move || {
                for _ in 0..25 {
                    events.emit(InteractionEvent::TriggerStart);
                }
            })
        })
        .collect();
    for thread in threads {
        thread.join().unwrap();
    }

    // 100 presses
    assert_eq!(rig.binder.hold_state(), HoldState::Idle);
    let calls = rig.take_calls();
    assert_eq!(calls.len(), 100);
    for pair in calls.chunks(2) {
        assert_eq!(pair[0].1, Call::Play(LoopCount::Infinite));
        assert_eq!(pair[1].1, Call::Stop(true));
    }
}
