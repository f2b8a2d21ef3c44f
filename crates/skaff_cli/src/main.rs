//! skaff CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success (including canceled and aborted builds)
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Manifest error
//! - 4: Template error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod interactive;
mod settings;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const MANIFEST_ERROR: u8 = 3;
    pub const TEMPLATE_ERROR: u8 = 4;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "skaff=debug,info"
    } else if cli.quiet {
        "warn"
    } else {
        "skaff=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();

    let result = match &cli.command {
        Commands::Create(args) => commands::create::execute(&cli, args).await,
        Commands::List(args) => commands::list::execute(&cli, args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Map an error to its exit code by the first typed cause in the chain.
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if cause.is::<skaff_manifest::ManifestError>() {
            return ExitCodes::MANIFEST_ERROR;
        }
        if cause.is::<skaff_templates::TemplateError>() {
            return ExitCodes::TEMPLATE_ERROR;
        }
        if cause.is::<settings::InvalidArgument>() {
            return ExitCodes::INVALID_ARGS;
        }
    }
    ExitCodes::GENERAL_ERROR
}
