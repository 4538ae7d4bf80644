//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, ClipsConfig};
use crate::domain::error::ConfigError;
use crate::domain::timing::Duration;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;
    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    let config = store.load().await?;
    presenter.output(read_value(&config, key).as_deref().unwrap_or(NOT_SET));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;
    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, read_value(&config, key).as_deref().unwrap_or(NOT_SET));
    }
    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: message.into(),
    }
}

/// Validate `value` for `key` and store it in the config
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    if let Some(slot_key) = key.strip_prefix("clips.") {
        if value.trim().is_empty() {
            return Err(invalid(key, "Path must not be empty"));
        }
        let clips = config.clips.get_or_insert_with(ClipsConfig::default);
        let field = match slot_key {
            "hover" => &mut clips.hover,
            "trigger_start" => &mut clips.trigger_start,
            "trigger_end" => &mut clips.trigger_end,
            "hold" => &mut clips.hold,
            _ => return Err(invalid(key, "Unknown clip slot")),
        };
        *field = Some(value.to_string());
        return Ok(());
    }

    match key {
        "low_latency" => {
            config.low_latency =
                Some(parse_bool(value).map_err(|_| invalid(key, "Value must be 'true' or 'false'"))?)
        }
        "silent" => {
            config.silent =
                Some(parse_bool(value).map_err(|_| invalid(key, "Value must be 'true' or 'false'"))?)
        }
        "volume" => config.volume = Some(parse_volume(value).map_err(|m| invalid(key, m))?),
        "linger" => {
            let duration = value
                .parse::<Duration>()
                .map_err(|e| invalid(key, e.to_string()))?;
            config.linger = Some(duration.to_string());
        }
        _ => return Err(invalid(key, "Unknown key")),
    }
    Ok(())
}

/// Current value of a key, formatted for display
fn read_value(config: &AppConfig, key: &str) -> Option<String> {
    let clips = config.clips.as_ref();
    match key {
        "clips.hover" => clips.and_then(|c| c.hover.clone()),
        "clips.trigger_start" => clips.and_then(|c| c.trigger_start.clone()),
        "clips.trigger_end" => clips.and_then(|c| c.trigger_end.clone()),
        "clips.hold" => clips.and_then(|c| c.hold.clone()),
        "low_latency" => config.low_latency.map(|b| b.to_string()),
        "silent" => config.silent.map(|b| b.to_string()),
        "volume" => config.volume.map(|v| v.to_string()),
        "linger" => config.linger.clone(),
        _ => None,
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

/// Parse a volume: a finite, non-negative number
pub fn parse_volume(value: &str) -> Result<f32, String> {
    let volume: f32 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !volume.is_finite() || volume < 0.0 {
        return Err(format!("Volume must be a non-negative number, got {}", value));
    }
    Ok(volume)
}
