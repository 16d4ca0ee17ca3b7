//! The `list` command: print every pattern in the catalog

use colored::*;
use patternbook::catalog;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

#[derive(serde::Serialize)]
struct PatternListing<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    #[serde(rename = "whenToUse")]
    when_to_use: &'a str,
}

pub fn run_list_command(format: OutputFormat) -> CliResult<()> {
    let registry = catalog::registry().map_err(CliError::validation)?;

    let listings: Vec<PatternListing<'_>> = registry
        .overviews()
        .into_iter()
        .map(|(id, overview)| PatternListing {
            id,
            name: &overview.name,
            description: &overview.description,
            when_to_use: &overview.when_to_use,
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&listings).map_err(CliError::general)?;
            println!("{json}");
        }
        OutputFormat::Text => {
            println!(
                "{} ({} patterns)\n",
                "Pattern catalog".bold(),
                listings.len()
            );
            for listing in &listings {
                println!("  {}  {}", listing.id.cyan().bold(), listing.name);
                println!("      {}", listing.description);
            }
            println!(
                "\nRun {} for the full write-up.",
                "patternbook show <id>".green()
            );
        }
    }

    Ok(())
}
