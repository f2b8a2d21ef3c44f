//! Template discovery.
//!
//! Templates live under a root directory laid out as
//! `<root>/<language>/<kind>/`, each leaf directory being copied verbatim.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{TemplateError, TemplateResult};

/// Directory name of the bundled template tree.
pub const TEMPLATES_DIR: &str = "templates";

/// A (language, kind) pair identifying a template.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemplateKey {
    pub language: String,
    pub kind: String,
}

impl TemplateKey {
    pub fn new(language: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            kind: kind.into(),
        }
    }
}

impl std::fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.language, self.kind)
    }
}

/// A resolved template directory.
#[derive(Debug, Clone)]
pub struct Template {
    pub key: TemplateKey,
    pub path: PathBuf,
}

impl Template {
    /// Relative paths of every file in the template, sorted.
    pub fn files(&self) -> TemplateResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.path).min_depth(1) {
            let entry = entry.map_err(|e| TemplateError::Io(e.into()))?;
            if entry.file_type().is_file() {
                if let Ok(relative) = entry.path().strip_prefix(&self.path) {
                    files.push(relative.to_path_buf());
                }
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Read-only view over a template root.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    /// Create a store over the given root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locate the template tree shipped with the tool.
    ///
    /// Looks next to the running executable first (installed layout), then
    /// falls back to the workspace `templates/` directory.
    pub fn bundled() -> Self {
        let mut candidates = Vec::new();
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                candidates.push(dir.join(TEMPLATES_DIR));
                candidates.push(dir.join("..").join("share").join("skaff").join(TEMPLATES_DIR));
            }
        }
        let workspace = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join(TEMPLATES_DIR);
        candidates.push(workspace.clone());

        let root = candidates
            .into_iter()
            .find(|p| p.is_dir())
            .unwrap_or(workspace);
        debug!("Using bundled templates at {:?}", root);
        Self::new(root)
    }

    /// Root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn template_path(&self, language: &str, kind: &str) -> PathBuf {
        self.root.join(language).join(kind)
    }

    /// Check whether a template exists for the pair.
    pub fn exists(&self, language: &str, kind: &str) -> bool {
        is_plain_segment(language)
            && is_plain_segment(kind)
            && self.template_path(language, kind).is_dir()
    }

    /// Resolve a template for the pair.
    pub fn locate(&self, language: &str, kind: &str) -> TemplateResult<Template> {
        if !self.exists(language, kind) {
            return Err(TemplateError::NotFound {
                language: language.to_string(),
                kind: kind.to_string(),
            });
        }
        Ok(Template {
            key: TemplateKey::new(language, kind),
            path: self.template_path(language, kind),
        })
    }

    /// List every available template, sorted by language then kind.
    pub fn list(&self) -> TemplateResult<Vec<TemplateKey>> {
        if !self.root.is_dir() {
            warn!("Templates directory does not exist: {:?}", self.root);
            return Err(TemplateError::RootMissing(self.root.clone()));
        }

        let mut keys = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(2)
            .max_depth(2)
            .follow_links(true)
        {
            let entry = entry.map_err(|e| TemplateError::Io(e.into()))?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let kind = entry.file_name().to_string_lossy().to_string();
            let language = entry
                .path()
                .parent()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().to_string());
            if let Some(language) = language {
                keys.push(TemplateKey::new(language, kind));
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// Reject path traversal through the language or kind arguments.
fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_locate_existing() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("javascript").join("react")).unwrap();

        let store = TemplateStore::new(temp.path());
        let template = store.locate("javascript", "react").unwrap();
        assert_eq!(template.key, TemplateKey::new("javascript", "react"));
        assert!(store.exists("javascript", "react"));
    }

    #[test]
    fn test_locate_missing() {
        let temp = tempdir().unwrap();
        let store = TemplateStore::new(temp.path());
        let err = store.locate("cobol", "mainframe").unwrap_err();
        assert!(matches!(err, TemplateError::NotFound { .. }));
        assert_eq!(err.to_string(), "Template not found: cobol/mainframe");
    }

    #[test]
    fn test_rejects_traversal() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("javascript")).unwrap();
        let store = TemplateStore::new(temp.path().join("javascript"));
        assert!(!store.exists("..", "javascript"));
        assert!(!store.exists("a/b", "c"));
    }

    #[test]
    fn test_list_sorted() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("typescript").join("react")).unwrap();
        fs::create_dir_all(temp.path().join("javascript").join("vue")).unwrap();
        fs::create_dir_all(temp.path().join("javascript").join("react")).unwrap();
        fs::write(temp.path().join("javascript").join("README.md"), "x").unwrap();

        let keys = TemplateStore::new(temp.path()).list().unwrap();
        assert_eq!(
            keys,
            vec![
                TemplateKey::new("javascript", "react"),
                TemplateKey::new("javascript", "vue"),
                TemplateKey::new("typescript", "react"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_list_reports_unreadable_entries() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("javascript").join("react")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("gone"), temp.path().join("typescript"))
            .unwrap();

        let err = TemplateStore::new(temp.path()).list().unwrap_err();
        assert!(matches!(err, TemplateError::Io(_)));
    }

    #[test]
    fn test_list_missing_root() {
        let temp = tempdir().unwrap();
        let store = TemplateStore::new(temp.path().join("nope"));
        assert!(matches!(store.list(), Err(TemplateError::RootMissing(_))));
    }
}
