//! Command-line interface for foliosh
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - Subcommand handling (version, completion, config)
//! - One-shot `--eval` execution vs interactive mode selection

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

pub mod completion;

/// foliosh - a personal portfolio as a terminal shell
#[derive(Parser, Debug)]
#[command(
    name = "foliosh",
    version,
    about = "A personal portfolio shell",
    long_about = "A terminal-native personal portfolio: bio, links, projects and watched
movies behind an interactive shell with ghost-text autocompletion."
)]
pub struct CliArgs {
    /// Execute a single command line and exit
    ///
    /// Example: foliosh --eval projects
    #[arg(short = 'e', long = "eval", value_name = "LINE")]
    pub eval: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Quiet mode (skip the welcome banner)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (debug logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for foliosh
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version,

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        let args = CliArgs::parse();
        let config = Self::load_config(&args)?;

        Ok(Self { args, config })
    }

    /// Build a CLI interface from already-parsed arguments (tests).
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load_from_file(args.config_file.as_deref())?;

        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {e}");
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        // Apply CLI arguments to override config values
        if args.no_color {
            config.display.color_output = false;
        }

        Ok(config)
    }

    /// Handle subcommands that short-circuit the shell.
    ///
    /// # Returns
    /// * `Result<bool>` - True when a subcommand ran and the process
    ///   should exit
    pub fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(Commands::Version) => {
                println!("foliosh {}", env!("CARGO_PKG_VERSION"));
                Ok(true)
            }
            Some(Commands::Completion { shell }) => {
                completion::generate_completion(shell)?;
                Ok(true)
            }
            Some(Commands::Config { show, validate }) => {
                if *validate {
                    self.config.validate()?;
                    println!("Configuration OK");
                }
                if *show || !*validate {
                    print!("{}", self.render_config()?);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Effective configuration as TOML.
    fn render_config(&self) -> Result<String> {
        toml::to_string_pretty(&self.config)
            .map_err(|e| crate::error::ConfigError::Generic(e.to_string()).into())
    }

    /// Parsed arguments.
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path of the config file in use.
    pub fn config_path(&self) -> PathBuf {
        self.args
            .config_file
            .as_deref()
            .map(Path::to_path_buf)
            .unwrap_or_else(Config::default_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_parse() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_eval_flag() {
        let args = CliArgs::parse_from(["foliosh", "--eval", "projects"]);
        assert_eq!(args.eval.as_deref(), Some("projects"));
    }

    #[test]
    fn test_no_color_overrides_config() {
        let args = CliArgs::parse_from(["foliosh", "--no-color"]);
        let cli = CliInterface::from_args(args).unwrap();
        assert!(!cli.config().display.color_output);
    }

    #[test]
    fn test_completion_subcommand_parses() {
        let args = CliArgs::parse_from(["foliosh", "completion", "zsh"]);
        assert!(matches!(
            args.command,
            Some(Commands::Completion { ref shell }) if shell == "zsh"
        ));
    }
}
