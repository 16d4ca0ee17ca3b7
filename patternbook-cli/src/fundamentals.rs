//! The `fundamentals` command: print the code quality guide

use colored::*;
use patternbook::catalog;
use patternbook::fundamentals::Principle;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

pub fn run_fundamentals_command(format: OutputFormat) -> CliResult<()> {
    let fundamentals = catalog::quality_fundamentals();

    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&fundamentals).map_err(CliError::general)?;
            println!("{json}");
        }
        OutputFormat::Text => {
            println!("{}\n", "Code quality fundamentals".bold());
            println!("{}\n", fundamentals.overview);
            println!("{}\n  {}\n", "Core philosophy".bold(), fundamentals.core_philosophy);

            print_principle(&fundamentals.principles.readability);
            print_principle(&fundamentals.principles.predictability);
            print_principle(&fundamentals.principles.cohesion);
            print_principle(&fundamentals.principles.coupling);

            println!("{}", "Balancing the principles".bold());
            for note in &fundamentals.balancing_principles {
                println!("  - {note}");
            }
        }
    }

    Ok(())
}

fn print_principle(principle: &Principle) {
    println!("{}", principle.name.cyan().bold());
    println!("  {}\n", principle.description);

    for concept in &principle.concepts {
        println!("  {}", concept.name.bold());
        println!("    {}", concept.description);
        for practice in &concept.best_practices {
            println!("    - {practice}");
        }
        println!();
    }
}
