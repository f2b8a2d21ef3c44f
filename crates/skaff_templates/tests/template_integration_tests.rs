//! Integration tests for the bundled template tree.

use std::fs;
use std::path::{Path, PathBuf};

use skaff_templates::{copy_template, TemplateError, TemplateKey, TemplateStore};
use tempfile::tempdir;
use walkdir::WalkDir;

fn bundled_store() -> TemplateStore {
    TemplateStore::new(
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("templates"),
    )
}

fn tree(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut entries: Vec<_> = walkdir_files(root)
        .into_iter()
        .map(|rel| {
            let content = fs::read(root.join(&rel)).unwrap();
            (rel, content)
        })
        .collect();
    entries.sort();
    entries
}

fn walkdir_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

#[test]
fn test_bundled_templates_listed() {
    let keys = bundled_store().list().unwrap();

    assert!(keys.contains(&TemplateKey::new("javascript", "react")));
    assert!(keys.contains(&TemplateKey::new("typescript", "react")));
    assert!(keys.contains(&TemplateKey::new("javascript", "node")));
}

#[test]
fn test_copy_reproduces_every_bundled_template() {
    let store = bundled_store();

    for key in store.list().unwrap() {
        let target = tempdir().unwrap();
        let destination = target.path().join("out");

        let report = copy_template(&store, &key.language, &key.kind, &destination).unwrap();

        let template = store.locate(&key.language, &key.kind).unwrap();
        assert_eq!(tree(&template.path), tree(&destination), "tree mismatch for {}", key);
        assert_eq!(report.files, template.files().unwrap().len());
    }
}

#[test]
fn test_copy_unknown_pairs_write_nothing() {
    let store = bundled_store();
    let target = tempdir().unwrap();

    for (language, kind) in [("rust", "react"), ("javascript", "django"), ("", "react")] {
        let destination = target.path().join(format!("{}-{}", language, kind));
        let err = copy_template(&store, language, kind, &destination).unwrap_err();
        assert!(matches!(err, TemplateError::NotFound { .. }));
        assert!(!destination.exists());
    }

    assert!(fs::read_dir(target.path()).unwrap().next().is_none());
}

#[test]
fn test_copy_twice_is_stable() {
    let store = bundled_store();
    let target = tempdir().unwrap();

    copy_template(&store, "javascript", "react", target.path()).unwrap();
    let first = tree(target.path());
    copy_template(&store, "javascript", "react", target.path()).unwrap();

    assert_eq!(first, tree(target.path()));
}
