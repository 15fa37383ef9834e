//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::infrastructure::clipboard::ClipboardToolPreference;

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
    ensure_known_key(key)?;
    let value = normalize_config_value(key, value)?;

    let mut config = store.load().await?;
    set_config_value(&mut config, key, value.clone())?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let config = store.load().await?;
    presenter.output(config_value(&config, key).unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, config_value(&config, key).unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_known_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(unknown_key(key))
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    }
}

fn set_config_value(config: &mut AppConfig, key: &str, value: String) -> Result<(), ConfigError> {
    match key {
        "output_dir" => config.output_dir = Some(value),
        "clipboard_tool" => config.clipboard_tool = Some(value),
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

fn config_value<'a>(config: &'a AppConfig, key: &str) -> Option<&'a str> {
    match key {
        "output_dir" => config.output_dir.as_deref(),
        "clipboard_tool" => config.clipboard_tool.as_deref(),
        _ => None,
    }
}

/// Validate a config value and return the form that gets stored
fn normalize_config_value(key: &str, value: &str) -> Result<String, ConfigError> {
    match key {
        "clipboard_tool" => value
            .parse::<ClipboardToolPreference>()
            .map(|p| p.to_string())
            .map_err(|e| ConfigError::ValidationError {
                key: key.to_string(),
                message: e.to_string(),
            }),
        "output_dir" if value.trim().is_empty() => Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must not be empty".to_string(),
        }),
        _ => Ok(value.to_string()),
    }
}
