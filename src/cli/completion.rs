//! Shell completion generation for foliosh
//!
//! Generates completion scripts for bash, zsh, fish and PowerShell so the
//! binary itself tab-completes in the user's login shell. (Completion
//! inside the portfolio shell is a separate concern, handled by the REPL.)

use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io;

use crate::cli::CliArgs;
use crate::error::{ConfigError, FolioshError, Result};

/// Generate a shell completion script on stdout.
///
/// # Arguments
/// * `shell_name` - Shell type (bash, zsh, fish, powershell)
pub fn generate_completion(shell_name: &str) -> Result<()> {
    let shell = parse_shell(shell_name)?;
    let mut cmd = CliArgs::command();

    generate(shell, &mut cmd, "foliosh", &mut io::stdout());
    Ok(())
}

/// Parse shell name string to Shell enum
fn parse_shell(shell_name: &str) -> Result<Shell> {
    match shell_name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        "powershell" => Ok(Shell::PowerShell),
        _ => Err(FolioshError::Config(ConfigError::Generic(format!(
            "Unsupported shell: {shell_name}. Supported shells: bash, zsh, fish, powershell"
        )))),
    }
}
