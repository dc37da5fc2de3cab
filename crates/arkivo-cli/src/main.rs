//! Arkivo CLI - command-line access to decimal string arithmetic.

use std::io::IsTerminal;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod output;

use commands::{add, check, compare, normalize, sum};

#[derive(Parser)]
#[command(name = "arkivo")]
#[command(about = "Exact decimal string arithmetic for Arkivo practice problems")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical form of a decimal string
    Normalize {
        /// Decimal string
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare two decimal strings (prints -1, 0 or 1)
    Compare {
        /// Left operand
        #[arg(allow_hyphen_values = true)]
        left: String,
        /// Right operand
        #[arg(allow_hyphen_values = true)]
        right: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add two same-signed decimal strings
    Add {
        /// Left operand
        #[arg(allow_hyphen_values = true)]
        left: String,
        /// Right operand
        #[arg(allow_hyphen_values = true)]
        right: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Total one decimal string per line
    Sum {
        /// Input file (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a submitted answer against the expected value
    Check {
        /// Expected answer
        #[arg(allow_hyphen_values = true)]
        expected: String,
        /// Submitted answer
        #[arg(allow_hyphen_values = true)]
        given: String,
        /// Exit with code 2 if the answer is incorrect
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Normalize { value, json } => normalize::run(value, json),
        Commands::Compare { left, right, json } => compare::run(left, right, json),
        Commands::Add { left, right, json } => add::run(left, right, json),
        Commands::Sum { input, json } => sum::run(input, json),
        Commands::Check {
            expected,
            given,
            strict,
            json,
        } => check::run(expected, given, strict, json),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
