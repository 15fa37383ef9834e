//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// cb2f - save clipboard content to a file
#[derive(Parser, Debug)]
#[command(name = "cb2f")]
#[command(version)]
#[command(about = "Save clipboard text or images to a file")]
#[command(long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
#[command(after_help = "Examples:\n  \
    cb2f png .                 Save clipboard image as PNG in current directory\n  \
    cb2f txt ~/Documents       Save clipboard text as TXT in Documents folder\n  \
    cb2f shot.png /tmp         Save clipboard image as /tmp/shot.png\n  \
    cb2f md --name report      Save clipboard text as report.md")]
pub struct Cli {
    /// Format (txt, md, json, png, jpg, ...) or a file name with extension (shot.png)
    #[arg(value_name = "INPUT", required = true)]
    pub input: Option<String>,

    /// Output directory [default: current directory]
    #[arg(value_name = "OUTPUT_PATH")]
    pub output_path: Option<PathBuf>,

    /// File name to use instead of the generated one
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: Option<String>,

    /// Clipboard tool (auto, arboard, wl-paste, xclip, macos, powershell)
    #[arg(short = 't', long, value_name = "TOOL")]
    pub tool: Option<String>,

    /// Only print the saved path and errors
    #[arg(short = 'q', long)]
    pub quiet: bool,

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
pub const VALID_CONFIG_KEYS: &[&str] = &["output_dir", "clipboard_tool"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_bare_format() {
        let cli = Cli::try_parse_from(["cb2f", "png"]).unwrap();
        assert_eq!(cli.input.as_deref(), Some("png"));
        assert!(cli.output_path.is_none());
        assert!(cli.name.is_none());
        assert!(!cli.quiet);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_output_path_and_name() {
        let cli = Cli::try_parse_from(["cb2f", "txt", "/tmp", "-n", "report"]).unwrap();
        assert_eq!(cli.input.as_deref(), Some("txt"));
        assert_eq!(cli.output_path, Some(PathBuf::from("/tmp")));
        assert_eq!(cli.name.as_deref(), Some("report"));
    }

    #[test]
    fn cli_parses_long_name() {
        let cli = Cli::try_parse_from(["cb2f", "shot.png", "--name", "final.png"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("final.png"));
    }

    #[test]
    fn cli_parses_tool() {
        let cli = Cli::try_parse_from(["cb2f", "png", "--tool", "xclip"]).unwrap();
        assert_eq!(cli.tool.as_deref(), Some("xclip"));
    }

    #[test]
    fn cli_requires_input() {
        let err = Cli::try_parse_from(["cb2f"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn cli_parses_config_without_input() {
        let cli = Cli::try_parse_from(["cb2f", "config", "path"]).unwrap();
        assert!(cli.input.is_none());
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Path
            })
        ));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::try_parse_from(["cb2f", "config", "set", "output_dir", "/tmp"]).unwrap();
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "output_dir");
            assert_eq!(value, "/tmp");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("output_dir"));
        assert!(is_valid_config_key("clipboard_tool"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
