//! sia - Startup Idea Analyzer
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use sia::cli::{Cli, Commands};
use sia::core::logging;
use sia::util::env::should_use_color;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = cli
        .log_level
        .as_deref()
        .and_then(logging::LogLevel::from_arg)
        .or_else(|| logging::parse_log_level_from_env().map(logging::LogLevel::from_tracing_level))
        .unwrap_or_default();
    let log_format = if cli.json_output {
        logging::LogFormat::Json
    } else {
        logging::parse_log_format_from_env().unwrap_or_default()
    };
    let log_file = logging::parse_log_file_from_env();
    logging::init(log_level, log_format, log_file, cli.verbose);

    let result = run(cli).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            let message = format!("error: {e}");
            if should_use_color(false) {
                eprintln!("{}", message.red());
            } else {
                eprintln!("{message}");
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run(cli: Cli) -> sia::Result<()> {
    let format = cli.effective_format();
    let pretty = cli.pretty;
    let no_color = cli.no_color || !should_use_color(cli.no_color);

    match cli.command {
        None => {
            print_quickstart();
            Ok(())
        }

        Some(Commands::Analyze(args)) => {
            sia::cli::analyze::execute(&args, format, pretty, no_color).await
        }

        Some(Commands::Status(args)) => {
            sia::cli::status::execute(&args, format, pretty, no_color).await
        }

        Some(Commands::Watch(args)) => {
            sia::cli::watch::execute(&args, format, pretty, no_color).await
        }
    }
}

fn print_quickstart() {
    println!("sia - Startup Idea Analyzer\n");
    println!("Usage:");
    println!("  sia analyze \"<your startup idea>\"   Analyze an idea");
    println!("  sia status                          Probe provider health");
    println!("  sia watch                           Keep probing while offline");
    println!("\nRun 'sia --help' for all options.");
}
