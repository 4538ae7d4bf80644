//! Log output setup

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count. Only this crate gets chattier;
/// dependencies stay at `warn`.
pub fn filter_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,interaction_cues={}", level)
}

/// Install the global subscriber, writing to stderr so stdout stays
/// reserved for the session report. `RUST_LOG` takes precedence.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

    // Fails only if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
