//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  modelpick                         Launch the interactive picker
  modelpick -m gpt-4o               Start with a model preselected
  modelpick -b http://host:8000     Use a non-default backend
  modelpick --disabled              Browse the catalog read-only
  modelpick models                  Print the model catalog and exit
  modelpick config                  Show resolved configuration
  modelpick completions bash        Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Pick an AI model from a deep-research backend",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Backend base URL (overrides MODELPICK_BACKEND_URL)
    #[arg(short = 'b', long, global = true)]
    pub backend_url: Option<String>,

    /// Initial model selection; when absent, the last choice or the backend default is used
    #[arg(short = 'm', long, help = "Model ID to preselect (e.g. gpt-4o)")]
    pub model: Option<String>,

    /// Open the picker read-only (the selection cannot be changed)
    #[arg(long)]
    pub disabled: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the catalog once and print it grouped by provider
    Models,
    /// Show the resolved backend URL and config paths
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["modelpick"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn log_level_defaults_to_warn() {
        assert_eq!(args(&[]).log_level(), "warn");
    }

    #[test]
    fn log_level_verbose_steps() {
        assert_eq!(args(&["-v"]).log_level(), "info");
        assert_eq!(args(&["-vv"]).log_level(), "debug");
    }

    #[test]
    fn log_level_quiet_wins() {
        assert_eq!(args(&["-q", "-v"]).log_level(), "error");
    }

    #[test]
    fn backend_url_is_global() {
        let parsed = args(&["models", "-b", "http://host:1234"]);
        assert_eq!(parsed.backend_url.as_deref(), Some("http://host:1234"));
        assert!(matches!(parsed.command, Some(Commands::Models)));
    }
}
