use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod error;
mod filter;
mod format;
mod input;
mod inspect;
mod output;
mod utils;
mod validate;

use error::Result;

#[derive(Parser)]
#[command(name = "cpfcnpj")]
#[command(about = "Validate, format and filter CPF and CNPJ numbers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the digits of a CPF or CNPJ. Exits with status 1 if invalid
    Validate {
        #[command(flatten)]
        config: validate::Config,
    },
    /// Add punctuation to a raw CPF or CNPJ
    Format {
        #[command(flatten)]
        config: format::Config,
    },
    /// Remove punctuation from a formatted CPF or CNPJ
    Filter {
        #[command(flatten)]
        config: filter::Config,
    },
    /// Show the parts of a valid CPF or CNPJ
    Inspect {
        #[command(flatten)]
        config: inspect::Config,
    },
}

fn init_tracing() {
    // stdout carries command output only. RUST_LOG overrides the level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config } => {
            if !validate::execute(config)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Format { config } => {
            format::execute(config)?;
        }
        Commands::Filter { config } => {
            filter::execute(config)?;
        }
        Commands::Inspect { config } => {
            inspect::execute(config)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
