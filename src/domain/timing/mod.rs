//! Timing value objects

pub mod duration;

pub use duration::Duration;
