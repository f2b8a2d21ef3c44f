//! Runtime settings resolved from global options and environment.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use skaff_manifest::{EnhancementDefaults, ManifestEnhancer};
use skaff_runner::PackageManager;
use skaff_templates::TemplateStore;
use thiserror::Error;
use tracing::debug;

use crate::commands::Cli;

/// A user-supplied value that cannot be used.
#[derive(Error, Debug)]
#[error("Invalid argument: {0}")]
pub struct InvalidArgument(pub String);

/// Everything a command needs beyond its own arguments.
#[derive(Debug, Clone)]
pub struct Settings {
    pub store: Arc<TemplateStore>,
    pub enhancer: Arc<ManifestEnhancer>,
    pub package_manager: PackageManager,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let store = match &cli.templates_dir {
            Some(dir) if !dir.is_dir() => {
                return Err(InvalidArgument(format!(
                    "templates directory {} does not exist",
                    dir.display()
                ))
                .into());
            }
            Some(dir) => TemplateStore::new(dir),
            None => TemplateStore::bundled(),
        };
        debug!("Template root: {:?}", store.root());

        let defaults = match &cli.defaults {
            Some(path) => EnhancementDefaults::from_yaml_file(path)
                .with_context(|| format!("Failed to load defaults from {}", path.display()))?,
            None => EnhancementDefaults::builtin(),
        };

        Ok(Self {
            store: Arc::new(store),
            enhancer: Arc::new(ManifestEnhancer::new(Arc::new(defaults))),
            package_manager: cli.package_manager,
        })
    }
}

/// Directory the tool was started in.
pub fn working_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to determine the current directory")
}
