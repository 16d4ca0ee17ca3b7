//! The `show` command: print one pattern's full write-up

use colored::*;
use patternbook::catalog;
use patternbook::patterns::{CodeComparisonExample, PatternDocument};
use patternbook::PatternBookError;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::exit_codes::EXIT_WARNING;

pub fn run_show_command(pattern_id: &str, format: OutputFormat) -> CliResult<()> {
    let registry = catalog::registry().map_err(CliError::validation)?;

    let document = match registry.detailed(pattern_id) {
        Ok(document) => document,
        Err(PatternBookError::PatternNotFound(id)) => {
            let known = registry.ids().join(", ");
            return Err(CliError::new(
                format!("Pattern not found: {id}\nKnown patterns: {known}"),
                EXIT_WARNING,
            ));
        }
        Err(e) => return Err(CliError::general(e)),
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&document).map_err(CliError::general)?;
            println!("{json}");
        }
        OutputFormat::Text => print_document(&document),
    }

    Ok(())
}

fn print_document(document: &PatternDocument) {
    let pattern = &document.detailed;

    println!("{} ({})\n", pattern.name.bold(), document.id.cyan());
    println!("{}\n", pattern.description);

    print_section("Problem", &pattern.problem);
    print_section("Solution", &pattern.solution);
    print_list("Benefits", &pattern.benefits);
    print_list("Drawbacks", &pattern.drawbacks);

    for example in &pattern.examples {
        print_comparison(example);
    }

    print_list("Best practices", &pattern.best_practices);
    print_list("Common mistakes", &pattern.common_mistakes);

    if !pattern.related_patterns.is_empty() {
        println!(
            "{}: {}",
            "Related patterns".bold(),
            pattern.related_patterns.join(", ").cyan()
        );
    }
}

fn print_section(title: &str, body: &str) {
    println!("{}", title.bold());
    println!("  {body}\n");
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{}", title.bold());
    for item in items {
        println!("  - {item}");
    }
    println!();
}

fn print_comparison(example: &CodeComparisonExample) {
    println!("{}: {}", "Example".bold(), example.title);
    println!("  {}\n", example.description);

    println!("  {} {}", "Bad:".red().bold(), example.bad.title);
    print_code(&example.bad.code);
    println!("  {} {}", "Good:".green().bold(), example.good.title);
    print_code(&example.good.code);
}

fn print_code(code: &str) {
    for line in code.lines() {
        println!("    {line}");
    }
    println!();
}
