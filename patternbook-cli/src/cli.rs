use clap::{Parser, Subcommand, ValueEnum};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "patternbook")]
#[command(version)]
#[command(about = "An MCP server for React/TypeScript design pattern reference")]
#[command(long_about = "
patternbook is an MCP (Model Context Protocol) server that serves a curated
reference library of React/TypeScript design patterns, with bad/good code
comparisons and a code quality fundamentals guide.

Example usage:
  patternbook serve                  # Run as MCP server over stdio
  patternbook list                   # List every pattern in the catalog
  patternbook show builder-pattern   # Print one pattern's full write-up
  patternbook fundamentals           # Print the code quality guide
  patternbook completion bash > ~/.bashrc.d/patternbook  # Shell completions
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server (default when invoked via stdio)
    #[command(long_about = "
Runs patternbook as an MCP server over stdio. This is the mode MCP clients
invoke. The server exposes three tools:

- get_patterns: list every pattern with a short overview
- get_pattern: retrieve one pattern's full write-up by patternId
- get_quality_fundamentals: the standalone code quality document

Example:
  patternbook serve
  # Or configure in your MCP client's settings
")]
    Serve,
    /// List all patterns in the catalog
    #[command(long_about = "
Lists every pattern in the catalog with its id, name, and a one-line
description.

Output formats:
  text  - Human-readable listing (default)
  json  - JSON output for scripting

Examples:
  patternbook list
  patternbook list --format json
")]
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Show one pattern's full write-up
    #[command(long_about = "
Prints the complete write-up for a single pattern: the problem it solves,
the solution, benefits and drawbacks, bad/good code comparisons, best
practices, common mistakes, and related patterns.

Examples:
  patternbook show builder-pattern
  patternbook show custom-hook --format json
")]
    Show {
        /// Pattern id, as listed by `patternbook list`
        pattern_id: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the code quality fundamentals document
    #[command(long_about = "
Prints the code quality fundamentals guide: the four principles
(readability, predictability, cohesion, coupling) with their concepts,
examples, and the guidance on balancing them.

Examples:
  patternbook fundamentals
  patternbook fundamentals --format json
")]
    Fundamentals {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Check the built-in catalog for integrity problems
    #[command(long_about = "
Runs the catalog integrity checks: duplicate ids, self-references, and
related-pattern links that point at nothing. The shipped catalog always
passes; a failure here means a defect in the build.

Exit codes:
  0 - Catalog is valid
  2 - Integrity errors found

Examples:
  patternbook validate
  patternbook validate --quiet   # CI mode, exit code only
")]
    Validate {
        /// Only set the exit code, print nothing on success
        #[arg(short, long)]
        quiet: bool,
    },
    /// Generate shell completion scripts
    #[command(long_about = "
Generates a completion script for the given shell on stdout.

Examples:
  patternbook completion bash > ~/.bashrc.d/patternbook
  patternbook completion zsh > ~/.zfunc/_patternbook
")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    #[allow(dead_code)]
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_parses() {
        let cli = Cli::try_parse_from_args(["patternbook", "serve"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
    }

    #[test]
    fn test_list_defaults_to_text() {
        let cli = Cli::try_parse_from_args(["patternbook", "list"]).unwrap();
        match cli.command {
            Some(Commands::List { format }) => assert_eq!(format, OutputFormat::Text),
            other => panic!("expected list command, got {other:?}"),
        }
    }

    #[test]
    fn test_show_requires_pattern_id() {
        assert!(Cli::try_parse_from_args(["patternbook", "show"]).is_err());

        let cli =
            Cli::try_parse_from_args(["patternbook", "show", "builder-pattern", "--format", "json"])
                .unwrap();
        match cli.command {
            Some(Commands::Show { pattern_id, format }) => {
                assert_eq!(pattern_id, "builder-pattern");
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("expected show command, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_quiet_flag() {
        let cli = Cli::try_parse_from_args(["patternbook", "validate", "--quiet"]).unwrap();
        match cli.command {
            Some(Commands::Validate { quiet }) => assert!(quiet),
            other => panic!("expected validate command, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from_args(["patternbook", "--verbose", "list"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_no_command_is_allowed() {
        let cli = Cli::try_parse_from_args(["patternbook"]).unwrap();
        assert!(cli.command.is_none());
    }
}
