//! In-process interactable that emits events on demand

use super::event::InteractionEvent;
use super::stream::EventStream;

/// The three event streams of an interactable object.
///
/// Stands in for the host runtime's interactable: whoever owns it decides
/// when events happen and calls [`InteractableEvents::emit`].
#[derive(Debug, Default)]
pub struct InteractableEvents {
    hover_enter: EventStream,
    trigger_start: EventStream,
    trigger_end: EventStream,
}

impl InteractableEvents {
    /// Create an interactable with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Stream fired when the object is hovered
    pub fn hover_enter(&self) -> &EventStream {
        &self.hover_enter
    }

    /// Stream fired when a trigger starts
    pub fn trigger_start(&self) -> &EventStream {
        &self.trigger_start
    }

    /// Stream fired when a trigger ends
    pub fn trigger_end(&self) -> &EventStream {
        &self.trigger_end
    }

    /// Stream for a given event
    pub fn stream(&self, event: InteractionEvent) -> &EventStream {
        match event {
            InteractionEvent::HoverEnter => &self.hover_enter,
            InteractionEvent::TriggerStart => &self.trigger_start,
            InteractionEvent::TriggerEnd => &self.trigger_end,
        }
    }

    /// Deliver an event to its subscribers
    pub fn emit(&self, event: InteractionEvent) {
        self.stream(event).invoke();
    }
}
