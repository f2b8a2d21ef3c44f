//! Package manager command construction.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::command::CommandSpec;

/// Whether packages are installed as runtime or development dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    Runtime,
    Dev,
}

impl DependencyKind {
    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }
}

impl std::fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Runtime => write!(f, "runtime"),
            Self::Dev => write!(f, "dev"),
        }
    }
}

/// Supported Node package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Get the CLI command name.
    pub fn command(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "npm" => Some(Self::Npm),
            "yarn" => Some(Self::Yarn),
            "pnpm" => Some(Self::Pnpm),
            _ => None,
        }
    }

    /// Build the single batched install command for `packages`.
    pub fn install_command(
        &self,
        packages: &[String],
        kind: DependencyKind,
        project_path: &Path,
    ) -> CommandSpec {
        let spec = CommandSpec::new(self.command(), project_path);
        match self {
            Self::Npm => spec
                .arg("install")
                .args(packages.iter().cloned())
                .arg(if kind.is_dev() { "--save-dev" } else { "--save" }),
            Self::Yarn => {
                let spec = spec.arg("add");
                let spec = if kind.is_dev() { spec.arg("--dev") } else { spec };
                spec.args(packages.iter().cloned())
            }
            Self::Pnpm => {
                let spec = spec.arg("add");
                let spec = if kind.is_dev() { spec.arg("--save-dev") } else { spec };
                spec.args(packages.iter().cloned())
            }
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command())
    }
}
