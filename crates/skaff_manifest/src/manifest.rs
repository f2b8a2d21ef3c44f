//! In-memory `package.json` model.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::warn;

use crate::defaults::EnhancementDefaults;
use crate::error::{ManifestError, ManifestResult};

/// Conventional manifest file name at a project root.
pub const MANIFEST_FILE: &str = "package.json";

const SCRIPTS: &str = "scripts";
const DEPENDENCIES: &str = "dependencies";
const DEV_DEPENDENCIES: &str = "devDependencies";

/// A parsed project manifest.
///
/// Field order is preserved as read; merged keys that already exist keep
/// their position and new keys are appended.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl PackageManifest {
    /// Path of the manifest for a project directory.
    pub fn path_for(project_path: &Path) -> PathBuf {
        project_path.join(MANIFEST_FILE)
    }

    /// Parse manifest content.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> ManifestResult<Self> {
        let path = path.into();
        // Editors on Windows often write a byte order mark.
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let value: Value = serde_json::from_str(content).map_err(|source| ManifestError::Parse {
            path: path.clone(),
            source,
        })?;
        match value {
            Value::Object(fields) => Ok(Self { path, fields }),
            _ => Err(ManifestError::NotAnObject(path)),
        }
    }

    /// Read and parse a manifest from disk.
    pub fn load(path: &Path) -> ManifestResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn scripts(&self) -> Option<&Map<String, Value>> {
        self.fields.get(SCRIPTS).and_then(Value::as_object)
    }

    pub fn dependencies(&self) -> Option<&Map<String, Value>> {
        self.fields.get(DEPENDENCIES).and_then(Value::as_object)
    }

    pub fn dev_dependencies(&self) -> Option<&Map<String, Value>> {
        self.fields.get(DEV_DEPENDENCIES).and_then(Value::as_object)
    }

    /// Overlay the defaults onto this manifest.
    pub fn merge(&mut self, defaults: &EnhancementDefaults) {
        self.merge_section(SCRIPTS, &defaults.scripts);
        self.merge_section(DEPENDENCIES, &defaults.dependencies);
        self.merge_section(DEV_DEPENDENCIES, &defaults.dev_dependencies);
    }

    fn merge_section<'a>(
        &mut self,
        section: &str,
        entries: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) {
        let slot = self
            .fields
            .entry(section.to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        if !slot.is_object() {
            warn!(
                "{:?}: \"{}\" is not an object, replacing it with the defaults",
                self.path, section
            );
            *slot = Value::Object(Map::new());
        }

        if let Value::Object(map) = slot {
            for (key, value) in entries {
                map.insert(key.clone(), Value::String(value.clone()));
            }
        }
    }

    /// Serialize with two-space indentation and a trailing newline.
    pub fn to_pretty_string(&self) -> ManifestResult<String> {
        let mut out = serde_json::to_string_pretty(&self.fields)?;
        out.push('\n');
        Ok(out)
    }

    /// Write the manifest back to its path.
    pub fn save(&self) -> ManifestResult<()> {
        let content = self.to_pretty_string()?;
        fs::write(&self.path, content).map_err(|source| ManifestError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn parse(content: &str) -> PackageManifest {
        PackageManifest::parse("package.json", content).unwrap()
    }

    #[test]
    fn test_merge_preserves_unrelated_keys() {
        let mut manifest = parse(r#"{"name":"x","scripts":{"test":"t"}}"#);
        manifest.merge(&EnhancementDefaults::builtin());

        assert_eq!(manifest.get("name"), Some(&Value::from("x")));
        let scripts = manifest.scripts().unwrap();
        assert_eq!(scripts["test"], "t");
        assert_eq!(scripts["lint"], "eslint src/");
        assert_eq!(scripts["format"], "prettier --write src/");
        assert_eq!(manifest.dependencies().unwrap()["axios"], "^0.21.1");
        assert_eq!(manifest.dev_dependencies().unwrap()["eslint"], "^7.32.0");
    }

    #[test]
    fn test_merge_overwrites_conflicts() {
        let mut manifest = parse(r#"{"dependencies":{"axios":"^1.0.0","react":"^18.0.0"}}"#);
        manifest.merge(&EnhancementDefaults::builtin());

        let deps = manifest.dependencies().unwrap();
        assert_eq!(deps["axios"], "^0.21.1");
        assert_eq!(deps["react"], "^18.0.0");
    }

    #[test]
    fn test_merge_keeps_field_order() {
        let mut manifest =
            parse(r#"{"name":"x","dependencies":{"react":"1"},"version":"1.0.0"}"#);
        manifest.merge(&EnhancementDefaults::builtin());

        let out = manifest.to_pretty_string().unwrap();
        let name = out.find("\"name\"").unwrap();
        let deps = out.find("\"dependencies\"").unwrap();
        let version = out.find("\"version\"").unwrap();
        let scripts = out.find("\"scripts\"").unwrap();
        assert!(name < deps && deps < version && version < scripts);
    }

    #[test]
    fn test_merge_replaces_non_object_section() {
        let mut manifest = parse(r#"{"scripts":"oops"}"#);
        manifest.merge(&EnhancementDefaults {
            scripts: BTreeMap::from([("lint".to_string(), "eslint .".to_string())]),
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::new(),
        });

        assert_eq!(manifest.scripts().unwrap()["lint"], "eslint .");
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = PackageManifest::parse("package.json", "[1, 2]").unwrap_err();
        assert!(matches!(err, ManifestError::NotAnObject(_)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let err = PackageManifest::parse("package.json", "{\"name\": ").unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[test]
    fn test_pretty_output_format() {
        let manifest = parse(r#"{"name":"x"}"#);
        assert_eq!(manifest.to_pretty_string().unwrap(), "{\n  \"name\": \"x\"\n}\n");
    }
}
