//! Call logging demonstrations.
//!
//! Two scenarios, one per shipped sink default: a fully traced wrapper on
//! the simple-format sink, and an errors-only wrapper reporting through the
//! line-number-annotated sink. Both wrap the same division function and
//! show the failure passing through the logging layer unchanged.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use thiserror::Error;

use call_logger::config::{load_config, Config};
use call_logger::Logged;

#[derive(Parser)]
#[command(name = "call-logger")]
#[command(about = "Function call logging demonstrations", long_about = None)]
struct Cli {
    /// Optional TOML file overriding the built-in sink configuration.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Traced wrapper on the simple-format sink
    Simple,
    /// Errors-only wrapper on the detailed-format sink
    Detailed,
}

/// Division error for the demonstration function.
#[derive(Debug, Error, PartialEq, Eq)]
enum DivideError {
    #[error("division by zero")]
    DivisionByZero,
}

/// The demonstration function both scenarios wrap.
fn divide(a: i64, b: i64) -> Result<i64, DivideError> {
    if b == 0 {
        return Err(DivideError::DivisionByZero);
    }
    Ok(a / b)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    match cli.command {
        Some(Commands::Simple) => run_simple(&config)?,
        Some(Commands::Detailed) => run_detailed(&config)?,
        None => {
            run_simple(&config)?;
            run_detailed(&config)?;
        }
    }

    Ok(())
}

/// Traced division on the simple-format sink; the failure is caught by the
/// caller and reported on the same sink.
fn run_simple(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let sink = Arc::new(config.simple.build()?);
    let divide = Logged::new(sink.clone(), "divide", |(a, b)| divide(a, b));

    if let Err(error) = divide.call((4, 0)) {
        sink.error(format!("Caught an exception: {error}"));
    }

    Ok(())
}

/// Errors-only division on the detailed-format sink.
fn run_detailed(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let sink = Arc::new(config.detailed.build()?);
    let divide = Logged::new(sink.clone(), "divide", |(a, b)| divide(a, b))
        .errors_only()
        .in_module(module_path!());

    if let Err(error) = divide.call((10, 0)) {
        sink.error(format!("Caught exception: {error}"));
    }

    Ok(())
}
