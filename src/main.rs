//! Interaction cues CLI entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use interaction_cues::cli::{
    app::{load_merged_config, parse_inline_steps, run_session, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging::init_logging,
    presenter::Presenter,
    SessionOptions, StepSource,
};
use interaction_cues::domain::config::{AppConfig, ClipsConfig};
use interaction_cues::domain::timing::Duration;
use interaction_cues::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    if let Some(volume) = cli.volume {
        if !volume.is_finite() || volume < 0.0 {
            presenter.error(&format!(
                "Invalid volume: must be a non-negative number, got {}",
                volume
            ));
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    }

    let clips = ClipsConfig {
        hover: cli.hover.clone(),
        trigger_start: cli.trigger_start.clone(),
        trigger_end: cli.trigger_end.clone(),
        hold: cli.hold.clone(),
    };
    let cli_config = AppConfig {
        clips: (!clips.is_empty()).then_some(clips),
        low_latency: if cli.no_low_latency { Some(false) } else { None },
        volume: cli.volume,
        silent: if cli.silent { Some(true) } else { None },
        linger: cli.linger.clone(),
    };

    let config = load_merged_config(cli_config).await;

    let linger = match config.linger.as_ref() {
        Some(s) => match s.parse::<Duration>() {
            Ok(d) => d,
            Err(e) => {
                presenter.error(&format!("Invalid linger: {}", e));
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => Duration::default_linger(),
    };

    let source = if let Some(path) = cli.script {
        StepSource::Script(PathBuf::from(path))
    } else if cli.events.is_empty() {
        StepSource::Stdin
    } else {
        match parse_inline_steps(&cli.events) {
            Ok(steps) => StepSource::Inline(steps),
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        }
    };

    let options = SessionOptions {
        clips: config.clips_or_default(),
        low_latency: config.low_latency_or_default(),
        volume: config.volume_or_default(),
        silent: config.silent_or_default(),
        linger,
        source,
        json: cli.json,
    };

    run_session(options).await
}
