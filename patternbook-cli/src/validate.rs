//! The `validate` command: run the catalog integrity checks

use colored::*;
use patternbook::catalog;

use crate::error::CliResult;
use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};

/// Build the catalog and report the outcome of its integrity checks.
///
/// Registry construction already rejects duplicate ids, self-references,
/// and dangling related-pattern links, so validation is construction.
pub fn run_validate_command(quiet: bool) -> CliResult<i32> {
    match catalog::registry() {
        Ok(registry) => {
            if !quiet {
                println!(
                    "{} {} patterns, all ids unique, all related-pattern links resolve",
                    "OK".green().bold(),
                    registry.len()
                );
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("{} {e}", "FAILED".red().bold());
            Ok(EXIT_ERROR)
        }
    }
}
