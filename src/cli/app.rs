//! Session runner: load clips, bind cues, replay steps, report

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::ports::{ConfigStore, DiagnosticSink, Interactable};
use crate::application::{AudioFeedbackBinder, BinderError, ReplayCallbacks, ScriptReplay};
use crate::domain::config::{AppConfig, ClipsConfig};
use crate::domain::error::{ClipLoadError, ScriptParseError};
use crate::domain::interaction::{is_blank_line, parse_script, InteractableEvents, ScriptStep};
use crate::domain::timing::Duration;
use crate::infrastructure::{
    create_playback_factory, load_clips, CollectingDiagnostics, TracingDiagnostics,
    XdgConfigStore,
};

use super::presenter::Presenter;
use super::report::{FailureRecord, SessionReport};
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Where replay steps come from
#[derive(Debug, Clone)]
pub enum StepSource {
    /// Steps given on the command line
    Inline(Vec<ScriptStep>),
    /// A script file, one step per line
    Script(PathBuf),
    /// Lines read from stdin until it closes
    Stdin,
}

/// Resolved options for one session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub clips: ClipsConfig,
    pub low_latency: bool,
    pub volume: f32,
    pub silent: bool,
    pub linger: Duration,
    pub source: StepSource,
    pub json: bool,
}

/// Errors that end a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Clip(#[from] ClipLoadError),

    #[error(transparent)]
    Binder(#[from] BinderError),

    #[error(transparent)]
    Script(#[from] ScriptParseError),

    #[error("Failed to read script '{path}': {message}")]
    ScriptRead { path: String, message: String },

    #[error("Failed to read steps from stdin: {0}")]
    Stdin(String),

    #[error("Failed to render report: {0}")]
    Report(String),
}

impl SessionError {
    /// Bad steps are the caller's mistake; everything else is a runtime error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Script(_) => EXIT_USAGE_ERROR,
            _ => EXIT_ERROR,
        }
    }
}

/// Parse steps given as separate arguments
pub fn parse_inline_steps(args: &[String]) -> Result<Vec<ScriptStep>, ScriptParseError> {
    args.iter().map(|arg| arg.parse()).collect()
}

/// Load and merge configuration: defaults < file < cli.
///
/// Environment variables reach `cli_config` through clap, so they sit
/// between the file and explicit flags.
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load_or_empty().await;

    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Run a session and print its report
pub async fn run_session(options: SessionOptions) -> ExitCode {
    let presenter = Presenter::new().quiet(options.json);
    let json = options.json;

    let report = match execute_session(options, presenter).await {
        Ok(report) => report,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(e.exit_code());
        }
    };

    if json {
        match report.to_json() {
            Ok(text) => presenter.output(&text),
            Err(e) => {
                presenter.error(&SessionError::Report(e.to_string()).to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        presenter.report(&report);
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Run a session without printing anything but status lines
pub async fn execute_session(
    options: SessionOptions,
    presenter: Presenter,
) -> Result<SessionReport, SessionError> {
    // Bad steps are reported before any clip is touched
    let steps = match options.source {
        StepSource::Inline(ref steps) => Some(steps.clone()),
        StepSource::Script(ref path) => Some(read_script(path).await?),
        StepSource::Stdin => None,
    };

    let clips = load_clips(&options.clips).await?;
    if clips.is_empty() {
        presenter.warn("No clips configured; events will not make a sound");
    }

    let factory = create_playback_factory(options.silent, options.low_latency);
    let events = Arc::new(InteractableEvents::new());
    let diagnostics = Arc::new(CollectingDiagnostics::forwarding_to(Arc::new(
        TracingDiagnostics::new(),
    )));

    let interactable: Arc<dyn Interactable> = events.clone();
    let sink: Arc<dyn DiagnosticSink> = diagnostics.clone();
    let binder =
        AudioFeedbackBinder::initialize(clips, factory.as_ref(), Some(interactable), sink)?;

    for slot in binder.configured_slots() {
        if let Some(handle) = binder.handle(slot) {
            handle.set_volume(options.volume);
        }
    }

    presenter.info(&format!(
        "Playing through {} backend ({} slot(s))",
        factory.name(),
        binder.configured_slots().len()
    ));

    let callbacks = ReplayCallbacks {
        on_step: Some(Box::new(move |step: &ScriptStep| presenter.step(step))),
    };
    let mut replay = ScriptReplay::new(events, callbacks);

    let shutdown = ShutdownSignal::new();
    shutdown.setup();

    let mut interrupted = tokio::select! {
        result = drive(&mut replay, steps) => {
            result?;
            false
        }
        _ = shutdown.wait() => true,
    };

    if interrupted {
        presenter.warn("Interrupted");
    } else if !options.silent && replay.summary().total_events() > 0 {
        tokio::select! {
            _ = replay.linger(options.linger) => {}
            _ = shutdown.wait() => interrupted = true,
        }
    }

    Ok(SessionReport {
        backend: factory.name(),
        low_latency: factory.low_latency_mode().is_some(),
        volume: options.volume,
        slots: binder.configured_slots(),
        events: replay.summary().clone(),
        failures: diagnostics
            .failures()
            .iter()
            .map(FailureRecord::from)
            .collect(),
        hold: binder.hold_state(),
        interrupted,
    })
}

async fn read_script(path: &Path) -> Result<Vec<ScriptStep>, SessionError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SessionError::ScriptRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    Ok(parse_script(&text)?)
}

/// Feed steps to the replay, from a list or from stdin
async fn drive(replay: &mut ScriptReplay, steps: Option<Vec<ScriptStep>>) -> Result<(), SessionError> {
    if let Some(steps) = steps {
        replay.run(steps).await;
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut number = 0;
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| SessionError::Stdin(e.to_string()))?
    {
        number += 1;
        if is_blank_line(&line) {
            continue;
        }
        let step = line
            .parse::<ScriptStep>()
            .map_err(|e| ScriptParseError::AtLine {
                line: number,
                source: Box::new(e),
            })?;
        replay.step(step).await;
    }
    Ok(())
}
