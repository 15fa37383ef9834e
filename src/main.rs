//! cb2f CLI entry point

use std::process::ExitCode;

use clap::Parser;

use cb2f::cli::{
    app::{run_save, EXIT_ERROR, EXIT_SUCCESS},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use cb2f::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    std::panic::set_hook(Box::new(|info| {
        Presenter::new().error(&format!("Unexpected error: {}", info));
    }));

    let mut cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { EXIT_ERROR } else { EXIT_SUCCESS };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    match cli.command.take() {
        Some(Commands::Config { action }) => {
            let presenter = Presenter::new();
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        None => run_save(cli).await,
    }
}
