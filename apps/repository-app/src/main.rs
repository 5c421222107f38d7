//! Repository example application
//!
//! Calls each `mathutil` function once and prints the result, demonstrating
//! consumption of a library crate from another workspace member.
//!
//! # Usage
//!
//! ```bash
//! # Classic run with operands 10 and 5
//! repository-app
//!
//! # Other operands, from flags or the environment
//! repository-app -a 42 -b 0
//! REPO_APP__OPERANDS__B=3 repository-app
//!
//! # A single operation
//! repository-app eval div
//! ```

// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod config;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mathutil::Operation;

use crate::config::{AppConfig, CliOverrides};

/// Repository example - prints the result of each arithmetic operation
#[derive(Parser, Debug)]
#[command(name = "repository-app")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// First operand (overrides config)
    #[arg(short, long, allow_negative_numbers = true)]
    a: Option<i64>,

    /// Second operand (overrides config)
    #[arg(short, long, allow_negative_numbers = true)]
    b: Option<i64>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Commands {
    /// Apply every operation and print the results (default)
    Run,
    /// Apply a single operation: add, sub, mul or div
    Eval {
        #[arg(value_name = "OP")]
        operation: Operation,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config =
        AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    config.apply_cli_overrides(CliOverrides { a: cli.a, b: cli.b });

    tw_bootstrap::init_logging(&config.logging, cli.verbose)
        .context("failed to initialize logging")?;

    tracing::info!(
        a = config.operands.a,
        b = config.operands.b,
        "repository-app starting"
    );

    if cli.print_config {
        let json =
            serde_json::to_string_pretty(&config).context("failed to render configuration")?;
        println!("{json}");
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            for line in report::render_all(config.operands) {
                println!("{line}");
            }
        }
        Commands::Eval { operation } => {
            let result = operation.apply(config.operands.a, config.operands.b);
            println!("{}", report::render_line(operation, result));
        }
    }

    Ok(())
}
