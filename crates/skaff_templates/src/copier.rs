//! Template tree overlay.

use std::fs;
use std::path::{Path, PathBuf};

use fs_extra::dir::CopyOptions;
use tracing::{debug, info};

use crate::error::TemplateResult;
use crate::store::{TemplateKey, TemplateStore};

/// Summary of a completed copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    pub key: TemplateKey,
    pub destination: PathBuf,
    pub files: usize,
    pub bytes: u64,
}

/// Copy the template for (`language`, `kind`) into `destination`.
///
/// The destination is created when missing and existing files at the same
/// relative paths are overwritten. When no template exists for the pair,
/// `TemplateError::NotFound` is returned before anything is written.
pub fn copy_template(
    store: &TemplateStore,
    language: &str,
    kind: &str,
    destination: &Path,
) -> TemplateResult<CopyReport> {
    let template = store.locate(language, kind)?;
    let files = template.files()?;

    fs::create_dir_all(destination)?;

    info!("Copying template {} to {:?}", template.key, destination);

    let options = CopyOptions {
        overwrite: true,
        content_only: true,
        ..CopyOptions::new()
    };
    let bytes = fs_extra::dir::copy(&template.path, destination, &options)?;

    for file in &files {
        debug!("Copied: {:?}", file);
    }

    Ok(CopyReport {
        key: template.key,
        destination: destination.to_path_buf(),
        files: files.len(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TemplateError;
    use tempfile::tempdir;

    fn seed_store(root: &Path) {
        let template = root.join("javascript").join("react");
        fs::create_dir_all(template.join("src").join("components")).unwrap();
        fs::write(template.join(".prettierrc"), "{}\n").unwrap();
        fs::write(template.join("src").join("components").join("Button.js"), "export {};\n")
            .unwrap();
    }

    #[test]
    fn test_copy_creates_destination() {
        let templates = tempdir().unwrap();
        seed_store(templates.path());
        let target = tempdir().unwrap();
        let destination = target.path().join("app");

        let store = TemplateStore::new(templates.path());
        let report = copy_template(&store, "javascript", "react", &destination).unwrap();

        assert_eq!(report.files, 2);
        assert!(destination.join(".prettierrc").is_file());
        assert!(destination.join("src/components/Button.js").is_file());
    }

    #[test]
    fn test_copy_overwrites_and_keeps_unrelated() {
        let templates = tempdir().unwrap();
        seed_store(templates.path());
        let target = tempdir().unwrap();
        fs::write(target.path().join(".prettierrc"), "old").unwrap();
        fs::write(target.path().join("README.md"), "mine").unwrap();

        let store = TemplateStore::new(templates.path());
        copy_template(&store, "javascript", "react", target.path()).unwrap();

        assert_eq!(fs::read_to_string(target.path().join(".prettierrc")).unwrap(), "{}\n");
        assert_eq!(fs::read_to_string(target.path().join("README.md")).unwrap(), "mine");
    }

    #[test]
    fn test_copy_missing_template_writes_nothing() {
        let templates = tempdir().unwrap();
        let target = tempdir().unwrap();
        let destination = target.path().join("app");

        let store = TemplateStore::new(templates.path());
        let err = copy_template(&store, "rust", "react", &destination).unwrap_err();

        assert!(matches!(err, TemplateError::NotFound { .. }));
        assert!(!destination.exists());
    }
}
