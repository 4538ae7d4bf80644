//! CLI layer - Command-line interface
//!
//! Contains argument parsing, logging setup, output formatting, signal
//! handling, and the session and config command runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod logging;
pub mod presenter;
pub mod report;
pub mod signals;

// Re-export commonly used types
pub use app::{run_session, SessionOptions, StepSource, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction};
pub use presenter::Presenter;
pub use report::SessionReport;
