//! Shell completion generation

use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

use crate::cli::Cli;
use crate::error::CliResult;

/// Print a completion script for the given shell to stdout
pub fn print_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "patternbook", &mut io::stdout());
    Ok(())
}
