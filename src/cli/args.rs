//! CLI argument definitions using Clap

use clap::{ArgAction, Parser, Subcommand};

/// Interaction cues - audio feedback for hover, press and hold
#[derive(Parser, Debug)]
#[command(name = "interaction-cues")]
#[command(version)]
#[command(about = "Play audio cues for interaction events on a simulated interactable")]
#[command(long_about = None)]
pub struct Cli {
    /// Clip played once when the pointer enters
    #[arg(long, value_name = "FILE")]
    pub hover: Option<String>,

    /// Clip played once on every trigger press
    #[arg(long, value_name = "FILE")]
    pub trigger_start: Option<String>,

    /// Clip played once on every trigger release
    #[arg(long, value_name = "FILE")]
    pub trigger_end: Option<String>,

    /// Clip looped while holding (toggled by trigger presses)
    #[arg(long, value_name = "FILE")]
    pub hold: Option<String>,

    /// Read steps from a script file instead of the command line
    #[arg(short = 's', long, value_name = "FILE", conflicts_with = "events")]
    pub script: Option<String>,

    /// Do not open an audio device; log playback instead
    #[arg(long, env = "INTERACTION_CUES_SILENT")]
    pub silent: bool,

    /// Decode clips on every play instead of up front
    #[arg(long)]
    pub no_low_latency: bool,

    /// Playback volume (1.0 is unchanged)
    #[arg(long, value_name = "VOLUME", env = "INTERACTION_CUES_VOLUME")]
    pub volume: Option<f32>,

    /// Time to keep playing after the last step (e.g., 500ms, 2s)
    #[arg(short = 'l', long, value_name = "TIME")]
    pub linger: Option<String>,

    /// Print the session report as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Steps to replay: hover, start, end, or wait:<time>.
    /// Read from stdin when neither steps nor --script are given.
    #[arg(value_name = "STEP")]
    pub events: Vec<String>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "clips.hover",
    "clips.trigger_start",
    "clips.trigger_end",
    "clips.hold",
    "low_latency",
    "volume",
    "silent",
    "linger",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
