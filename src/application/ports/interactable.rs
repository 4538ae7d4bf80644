//! Interactable port

use crate::domain::interaction::{EventStream, InteractableEvents, InteractionEvent};

/// Port trait for an object that reports hover and trigger interactions
pub trait Interactable: Send + Sync {
    /// Fired when the object is hovered
    fn on_hover_enter(&self) -> &EventStream;

    /// Fired when a trigger starts
    fn on_trigger_start(&self) -> &EventStream;

    /// Fired when a trigger ends
    fn on_trigger_end(&self) -> &EventStream;

    /// Stream for a given event
    fn stream(&self, event: InteractionEvent) -> &EventStream {
        match event {
            InteractionEvent::HoverEnter => self.on_hover_enter(),
            InteractionEvent::TriggerStart => self.on_trigger_start(),
            InteractionEvent::TriggerEnd => self.on_trigger_end(),
        }
    }
}

impl Interactable for InteractableEvents {
    fn on_hover_enter(&self) -> &EventStream {
        self.hover_enter()
    }

    fn on_trigger_start(&self) -> &EventStream {
        self.trigger_start()
    }

    fn on_trigger_end(&self) -> &EventStream {
        self.trigger_end()
    }
}
