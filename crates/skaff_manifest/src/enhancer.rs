//! Manifest enhancement.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::defaults::EnhancementDefaults;
use crate::error::{ManifestError, ManifestResult};
use crate::manifest::PackageManifest;

/// What an enhancement pass did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnhanceOutcome {
    /// No manifest at the project path; nothing was done.
    Missing(PathBuf),
    /// The manifest already contained every default.
    Unchanged(PathBuf),
    /// The manifest was rewritten.
    Updated(PathBuf),
}

impl EnhanceOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Missing(p) | Self::Unchanged(p) | Self::Updated(p) => p,
        }
    }
}

/// Merges the configured defaults into a project's `package.json`.
#[derive(Debug, Clone)]
pub struct ManifestEnhancer {
    defaults: Arc<EnhancementDefaults>,
}

impl Default for ManifestEnhancer {
    fn default() -> Self {
        Self::new(Arc::new(EnhancementDefaults::builtin()))
    }
}

impl ManifestEnhancer {
    pub fn new(defaults: Arc<EnhancementDefaults>) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &EnhancementDefaults {
        &self.defaults
    }

    /// Enhance the manifest under `project_path`.
    ///
    /// A missing manifest is not an error. Running this twice leaves the
    /// file exactly as the first run wrote it.
    pub fn enhance(&self, project_path: &Path) -> ManifestResult<EnhanceOutcome> {
        let path = PackageManifest::path_for(project_path);
        if !path.is_file() {
            debug!("No manifest at {:?}, skipping enhancement", path);
            return Ok(EnhanceOutcome::Missing(path));
        }

        let original = fs::read_to_string(&path).map_err(|source| ManifestError::Read {
            path: path.clone(),
            source,
        })?;
        let mut manifest = PackageManifest::parse(&path, &original)?;
        manifest.merge(&self.defaults);

        if manifest.to_pretty_string()? == original {
            debug!("Manifest {:?} already enhanced", path);
            return Ok(EnhanceOutcome::Unchanged(path));
        }

        manifest.save()?;
        info!("Updated {:?} with additional configurations", path);
        Ok(EnhanceOutcome::Updated(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_enhance_missing_is_noop() {
        let temp = tempdir().unwrap();
        let outcome = ManifestEnhancer::default().enhance(temp.path()).unwrap();

        assert!(matches!(outcome, EnhanceOutcome::Missing(_)));
        assert!(!temp.path().join("package.json").exists());
    }

    #[test]
    fn test_enhance_updates_then_unchanged() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("package.json"), r#"{"name":"x"}"#).unwrap();

        let enhancer = ManifestEnhancer::default();
        assert!(matches!(enhancer.enhance(temp.path()).unwrap(), EnhanceOutcome::Updated(_)));
        assert!(matches!(enhancer.enhance(temp.path()).unwrap(), EnhanceOutcome::Unchanged(_)));
    }

    #[test]
    fn test_enhance_malformed_fails_without_writing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("package.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ManifestEnhancer::default().enhance(temp.path()).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }
}
