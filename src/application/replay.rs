//! Script replay use case
//!
//! Feeds interaction steps to an [`InteractableEvents`], standing in for the
//! host runtime's event dispatch loop.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::interaction::{InteractableEvents, InteractionEvent, ScriptStep};
use crate::domain::timing::Duration;

/// Callback invoked before each step is applied
pub type StepCallback = Box<dyn Fn(&ScriptStep) + Send + Sync>;

/// Callbacks for replay progress
#[derive(Default)]
pub struct ReplayCallbacks {
    pub on_step: Option<StepCallback>,
}

/// Counts of what a replay delivered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub hover_enter: u32,
    pub trigger_start: u32,
    pub trigger_end: u32,
    pub waited_ms: u64,
}

impl ReplaySummary {
    /// Total number of events delivered
    pub fn total_events(&self) -> u32 {
        self.hover_enter + self.trigger_start + self.trigger_end
    }

    fn record(&mut self, event: InteractionEvent) {
        match event {
            InteractionEvent::HoverEnter => self.hover_enter += 1,
            InteractionEvent::TriggerStart => self.trigger_start += 1,
            InteractionEvent::TriggerEnd => self.trigger_end += 1,
        }
    }
}

/// Replays script steps against an interactable
pub struct ScriptReplay {
    events: Arc<InteractableEvents>,
    callbacks: ReplayCallbacks,
    summary: ReplaySummary,
}

impl ScriptReplay {
    /// Create a replay over the given interactable
    pub fn new(events: Arc<InteractableEvents>, callbacks: ReplayCallbacks) -> Self {
        Self {
            events,
            callbacks,
            summary: ReplaySummary::default(),
        }
    }

    /// Apply one step: emit an event, or sleep for a wait
    pub async fn step(&mut self, step: ScriptStep) {
        if let Some(ref on_step) = self.callbacks.on_step {
            on_step(&step);
        }

        match step {
            ScriptStep::Event(event) => {
                tracing::debug!(%event, "emitting event");
                self.events.emit(event);
                self.summary.record(event);
            }
            ScriptStep::Wait(duration) => {
                tokio::time::sleep(duration.as_std()).await;
                self.summary.waited_ms += duration.as_millis();
            }
        }
    }

    /// Apply every step in order
    pub async fn run<I>(&mut self, steps: I)
    where
        I: IntoIterator<Item = ScriptStep>,
    {
        for step in steps {
            self.step(step).await;
        }
    }

    /// Wait without counting it as part of the script
    pub async fn linger(&self, duration: Duration) {
        tokio::time::sleep(duration.as_std()).await;
    }

    /// What has been delivered so far
    pub fn summary(&self) -> &ReplaySummary {
        &self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn run_emits_and_counts() {
        let events = Arc::new(InteractableEvents::new());
        let starts = Arc::new(AtomicUsize::new(0));
        let s = Arc::clone(&starts);
        events.trigger_start().add(move || {
            s.fetch_add(1, Ordering::SeqCst);
        });

        let mut replay = ScriptReplay::new(events, ReplayCallbacks::default());
        replay
            .run([
                ScriptStep::Event(InteractionEvent::HoverEnter),
                ScriptStep::Event(InteractionEvent::TriggerStart),
                ScriptStep::Event(InteractionEvent::TriggerStart),
                ScriptStep::Event(InteractionEvent::TriggerEnd),
            ])
            .await;

        assert_eq!(starts.load(Ordering::SeqCst), 2);
        let summary = replay.summary();
        assert_eq!(summary.hover_enter, 1);
        assert_eq!(summary.trigger_start, 2);
        assert_eq!(summary.trigger_end, 1);
        assert_eq!(summary.total_events(), 4);
    }

    #[tokio::test]
    async fn wait_sleeps_and_accumulates() {
        let events = Arc::new(InteractableEvents::new());
        let mut replay = ScriptReplay::new(events, ReplayCallbacks::default());

        let before = std::time::Instant::now();
        replay.step(ScriptStep::Wait(Duration::from_millis(30))).await;

        assert!(before.elapsed() >= std::time::Duration::from_millis(30));
        assert_eq!(replay.summary().waited_ms, 30);
        assert_eq!(replay.summary().total_events(), 0);
    }

    #[tokio::test]
    async fn on_step_sees_every_step() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = Arc::clone(&seen);
        let callbacks = ReplayCallbacks {
            on_step: Some(Box::new(move |step: &ScriptStep| s.lock().push(*step))),
        };

        let mut replay = ScriptReplay::new(Arc::new(InteractableEvents::new()), callbacks);
        replay.step(ScriptStep::Event(InteractionEvent::TriggerEnd)).await;

        assert_eq!(
            *seen.lock(),
            vec![ScriptStep::Event(InteractionEvent::TriggerEnd)]
        );
    }
}
