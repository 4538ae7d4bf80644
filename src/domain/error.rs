//! Domain error types

use thiserror::Error;

/// Error when parsing a duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected format: <number>ms, <number>s, <number>m, or combinations (e.g., 500ms, 2s, 1m30s)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when an interaction event name is not recognised
#[derive(Debug, Clone, Error)]
#[error("Invalid event: \"{input}\". Valid events are: hover, start, end")]
pub struct InvalidEventError {
    pub input: String,
}

/// Error when a script step cannot be parsed
#[derive(Debug, Clone, Error)]
pub enum ScriptParseError {
    #[error("Invalid step \"{input}\": {message}")]
    InvalidStep { input: String, message: String },

    #[error("Line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<ScriptParseError>,
    },
}

/// Error when an audio clip cannot be loaded
#[derive(Debug, Clone, Error)]
#[error("Failed to load clip '{path}': {message}")]
pub struct ClipLoadError {
    pub path: String,
    pub message: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
