//! CLI command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use skaff_runner::PackageManager;

pub mod create;
pub mod list;

/// skaff - interactive scaffolding for JavaScript and TypeScript projects
#[derive(Parser, Debug)]
#[command(name = "skaff")]
#[command(version, about = "skaff - interactive scaffolding for JavaScript and TypeScript projects")]
#[command(long_about = r#"
skaff creates a new project with the framework's own generator, or enhances
the current directory with a bundled template, then installs the selected
extras and adds lint/format scripts to package.json.

COMMANDS:
  create <language> <type>  → Create or enhance a project interactively
  list                      → Show bundled templates and generators

EXIT CODES:
  0 - Success (including canceled or aborted builds)
  1 - General error
  2 - Invalid arguments
  3 - Manifest error
  4 - Template error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Template root (defaults to the bundled templates)
    #[arg(long, global = true, env = "SKAFF_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Package manager used to install extras (npm, yarn, pnpm)
    #[arg(
        long,
        global = true,
        env = "SKAFF_PACKAGE_MANAGER",
        default_value = "npm",
        value_parser = parse_package_manager
    )]
    pub package_manager: PackageManager,

    /// YAML file replacing the built-in package.json defaults
    #[arg(long, global = true, env = "SKAFF_DEFAULTS")]
    pub defaults: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a project from scratch or enhance the current directory
    Create(create::CreateArgs),

    /// List bundled templates
    List(list::ListArgs),
}

fn parse_package_manager(s: &str) -> Result<PackageManager, String> {
    PackageManager::from_str(s)
        .ok_or_else(|| format!("unknown package manager '{}' (expected npm, yarn or pnpm)", s))
}
