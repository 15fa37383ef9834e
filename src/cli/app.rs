//! Main app runner for saving the clipboard

use std::env;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::{SaveCallbacks, SaveClipboardUseCase, SaveError};
use crate::domain::config::AppConfig;
use crate::domain::input::ParsedInput;
use crate::infrastructure::clipboard::{create_clipboard, ClipboardToolPreference};
use crate::infrastructure::{LocalOutputStore, XdgConfigStore};

use super::args::Cli;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Environment overrides for config keys
pub const ENV_OUTPUT_DIR: &str = "CB2F_OUTPUT_DIR";
pub const ENV_CLIPBOARD_TOOL: &str = "CB2F_CLIPBOARD_TOOL";

/// Save the clipboard as described by the parsed command line
pub async fn run_save(cli: Cli) -> ExitCode {
    let presenter = Presenter::quiet(cli.quiet);

    let cli_config = AppConfig {
        output_dir: None,
        clipboard_tool: cli.tool.clone(),
    };
    let config = load_merged_config(cli_config, &presenter).await;

    // The positional path is used as given so non-UTF-8 names survive
    let output_dir = cli
        .output_path
        .clone()
        .unwrap_or_else(|| config.output_dir_or_default());
    let input = match ParsedInput::resolve(
        cli.input.as_deref(),
        Some(output_dir.as_path()),
        cli.name.as_deref(),
    ) {
        Ok(input) => input,
        Err(e) => return report(&presenter, &SaveError::from(e)),
    };

    let preference = match config
        .clipboard_tool_or_default()
        .parse::<ClipboardToolPreference>()
    {
        Ok(p) => p,
        Err(e) => {
            presenter.error(&format!("Invalid clipboard tool: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let (clipboard, _tool) = create_clipboard(preference).await;
    let use_case = SaveClipboardUseCase::new(clipboard, LocalOutputStore::new());

    let spinner = presenter.spinner();
    let start_spinner = spinner.clone();
    let end_spinner = spinner.clone();
    let callbacks = SaveCallbacks {
        on_reading_start: Some(Box::new(move |tool: &str| {
            Presenter::start_spinner(&start_spinner, &format!("Reading clipboard ({})...", tool));
        })),
        on_reading_end: Some(Box::new(move || {
            end_spinner.finish_and_clear();
        })),
    };

    match use_case.execute(input, callbacks).await {
        Ok(output) => {
            presenter.saved(&output.path.display().to_string());
            presenter.info(&format!("Wrote {} {}", output.size, output.kind));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            spinner.finish_and_clear();
            report(&presenter, &e)
        }
    }
}

/// Print an error with its hint and return the failure exit code
fn report(presenter: &Presenter, error: &SaveError) -> ExitCode {
    presenter.error(&error.to_string());
    if let Some(hint) = error.hint() {
        presenter.hint(&hint);
    }
    ExitCode::from(EXIT_ERROR)
}

/// Read config overrides from the environment
pub fn env_config() -> AppConfig {
    AppConfig {
        output_dir: env::var(ENV_OUTPUT_DIR).ok().filter(|s| !s.is_empty()),
        clipboard_tool: env::var(ENV_CLIPBOARD_TOOL).ok().filter(|s| !s.is_empty()),
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig, presenter: &Presenter) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            presenter.warn(&format!("{} (using defaults)", e));
            AppConfig::empty()
        }
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli_config)
}
