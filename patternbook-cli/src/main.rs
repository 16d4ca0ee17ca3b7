use std::process;

mod cli;
mod completions;
mod error;
mod exit_codes;
mod fundamentals;
mod list;
mod pattern;
mod validate;

use clap::CommandFactory;
use cli::{Cli, Commands};
use exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    // Fast path for help
    if cli.command.is_none() {
        Cli::command().print_help().expect("Failed to print help");
        process::exit(EXIT_SUCCESS);
    }

    use tracing::Level;

    // MCP clients drive the server over a pipe; a terminal on stdin means a
    // human ran `serve` by hand and logs can go to stderr as usual.
    use is_terminal::IsTerminal;
    let is_mcp_mode =
        matches!(cli.command, Some(Commands::Serve)) && !std::io::stdin().is_terminal();

    let log_level = if is_mcp_mode {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::TRACE
    } else {
        Level::INFO
    };

    if is_mcp_mode {
        // Stdout carries the protocol, so logs go to a file under the home
        // directory instead.
        use std::fs;
        use std::path::PathBuf;

        let log_dir = if let Some(home) = dirs::home_dir() {
            home.join(".patternbook")
        } else {
            PathBuf::from(".patternbook")
        };

        if let Err(e) = fs::create_dir_all(&log_dir) {
            tracing::warn!("Failed to create log directory: {}", e);
        }

        let log_filename =
            std::env::var("PATTERNBOOK_LOG_FILE").unwrap_or_else(|_| "mcp.log".to_string());
        let log_file = log_dir.join(log_filename);

        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
        {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_writer(file)
                    .with_max_level(log_level)
                    .with_ansi(false)
                    .init();
            }
            Err(e) => {
                tracing::warn!("Failed to open log file, using stderr: {}", e);
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_max_level(log_level)
                    .init();
            }
        }
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(log_level)
            .init();
    }

    let exit_code = match cli.command {
        Some(Commands::Serve) => {
            tracing::info!("Starting MCP server");
            run_server().await
        }
        Some(Commands::List { format }) => {
            error::handle_cli_result(list::run_list_command(format))
        }
        Some(Commands::Show { pattern_id, format }) => {
            error::handle_cli_result(pattern::run_show_command(&pattern_id, format))
        }
        Some(Commands::Fundamentals { format }) => {
            error::handle_cli_result(fundamentals::run_fundamentals_command(format))
        }
        Some(Commands::Validate { quiet }) => match validate::run_validate_command(quiet) {
            Ok(exit_code) => exit_code,
            Err(e) => {
                tracing::error!("Validate error: {}", e);
                EXIT_ERROR
            }
        },
        Some(Commands::Completion { shell }) => {
            match completions::print_completion(shell) {
                Ok(_) => EXIT_SUCCESS,
                Err(e) => {
                    tracing::error!("Completion error: {}", e);
                    EXIT_WARNING
                }
            }
        }
        None => {
            // Handled early above
            unreachable!()
        }
    };

    process::exit(exit_code);
}

async fn run_server() -> i32 {
    use patternbook::mcp::PatternServer;
    use rmcp::serve_server;
    use rmcp::transport::io::stdio;
    use tokio_util::sync::CancellationToken;

    let server = match PatternServer::from_catalog() {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to create MCP server: {}", e);
            return EXIT_WARNING;
        }
    };

    let ct = CancellationToken::new();
    let ct_clone = ct.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl+c");

        tracing::info!("Shutdown signal received");
        ct_clone.cancel();
    });

    match serve_server(server, stdio()).await {
        Ok(_running_service) => {
            tracing::info!("MCP server started successfully");

            ct.cancelled().await;

            tracing::info!("MCP server exited successfully");
            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::error!("MCP server error: {}", e);
            EXIT_WARNING
        }
    }
}
