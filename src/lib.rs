//! Interaction cues - audio feedback for interactable objects
//!
//! Binds hover, trigger-start and trigger-end events of an interactable to
//! short audio cues, with a looping hold sound toggled by trigger presses.
//! Playback failures inside event handlers are reported, never propagated.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (slots, clips, hold toggle, events, scripts) and errors
//! - **Application**: The feedback binder, script replay, and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (rodio, silent playback, diagnostics, config)
//! - **CLI**: Command-line interface, argument parsing, logging and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
