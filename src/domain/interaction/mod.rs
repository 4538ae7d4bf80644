//! Interaction events, event streams and scripts

pub mod event;
pub mod events;
pub mod script;
pub mod stream;

pub use event::InteractionEvent;
pub use events::InteractableEvents;
pub use script::{is_blank_line, parse_script, ScriptStep};
pub use stream::{EventStream, Subscriber};
