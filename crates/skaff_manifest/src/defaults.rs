//! Enhancement defaults.
//!
//! The entries merged into every manifest are held in an immutable record
//! built once at startup, either from the built-in values or from a YAML
//! file with the same shape:
//!
//! ```yaml
//! scripts:
//!   lint: eslint src/
//! dependencies:
//!   axios: ^0.21.1
//! dev_dependencies:
//!   eslint: ^7.32.0
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ManifestError, ManifestResult};

/// Script entries and version pins merged into a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancementDefaults {
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl Default for EnhancementDefaults {
    fn default() -> Self {
        Self::builtin()
    }
}

impl EnhancementDefaults {
    /// Lint/format scripts plus the axios, eslint and prettier pins.
    pub fn builtin() -> Self {
        Self {
            scripts: entries(&[
                ("lint", "eslint src/"),
                ("format", "prettier --write src/"),
            ]),
            dependencies: entries(&[("axios", "^0.21.1")]),
            dev_dependencies: entries(&[("eslint", "^7.32.0"), ("prettier", "^2.3.2")]),
        }
    }

    /// Load defaults from a YAML file.
    pub fn from_yaml_file(path: &Path) -> ManifestResult<Self> {
        debug!("Loading enhancement defaults from {:?}", path);
        let content = fs::read_to_string(path).map_err(|e| ManifestError::Defaults {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| ManifestError::Defaults {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

fn entries(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_values() {
        let defaults = EnhancementDefaults::builtin();
        assert_eq!(defaults.scripts["lint"], "eslint src/");
        assert_eq!(defaults.scripts["format"], "prettier --write src/");
        assert_eq!(defaults.dependencies["axios"], "^0.21.1");
        assert_eq!(defaults.dev_dependencies["prettier"], "^2.3.2");
    }

    #[test]
    fn test_from_yaml_partial() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("defaults.yaml");
        fs::write(&path, "scripts:\n  test: jest\n").unwrap();

        let defaults = EnhancementDefaults::from_yaml_file(&path).unwrap();
        assert_eq!(defaults.scripts["test"], "jest");
        assert!(defaults.dependencies.is_empty());
    }

    #[test]
    fn test_from_yaml_invalid() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("defaults.yaml");
        fs::write(&path, "scripts: [1, 2").unwrap();

        let err = EnhancementDefaults::from_yaml_file(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Defaults { .. }));
    }
}
